use crate::error::{GridError, Result};
use crate::{DIRECTIONS, IMPASSABLE};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;

/// [LabelGrid] stores the integer label of every cell in row-major order together with the
/// connected components of its passable cells, kept in a [UnionFind] structure. Cells labelled
/// [IMPASSABLE] block movement, any other label is free space.
///
/// Points follow the `(x, y)` convention of [grid_util]: `x` is the column and `y` the row.
/// The grid is immutable once built, so the components never go stale.
#[derive(Clone, Debug)]
pub struct LabelGrid {
    width: usize,
    height: usize,
    labels: Vec<i32>,
    components: UnionFind<usize>,
}

impl LabelGrid {
    /// Creates a `width` by `height` grid with every cell set to `label`.
    pub fn new(width: usize, height: usize, label: i32) -> Result<LabelGrid> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(LabelGrid::from_labels(width, height, vec![label; width * height]))
    }

    /// Builds a grid from a list of rows. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<LabelGrid> {
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != width) {
            return Err(GridError::Jagged {
                row,
                expected: width,
                found: r.len(),
            });
        }
        let height = rows.len();
        let labels = rows.into_iter().flatten().collect::<Vec<i32>>();
        Ok(LabelGrid::from_labels(width, height, labels))
    }

    fn from_labels(width: usize, height: usize, labels: Vec<i32>) -> LabelGrid {
        let mut grid = LabelGrid {
            width,
            height,
            labels,
            components: UnionFind::new(width * height),
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn index_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.index_in_bounds(point.x, point.y)
    }
    /// Row-major index of an in-bounds point.
    pub(crate) fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }
    /// Label at `(x, y)`, or [None] if the position lies outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<i32> {
        if self.index_in_bounds(x, y) {
            Some(self.labels[y as usize * self.width + x as usize])
        } else {
            None
        }
    }
    pub fn get_point(&self, point: Point) -> Option<i32> {
        self.get(point.x, point.y)
    }
    /// True if `point` lies on the grid and is not labelled [IMPASSABLE].
    pub fn is_passable(&self, point: Point) -> bool {
        self.get_point(point).is_some_and(|label| label != IMPASSABLE)
    }

    /// Fails with [GridError::OutOfRange] if `point` is not on the grid.
    pub fn check_bounds(&self, point: Point) -> Result<()> {
        if self.point_in_bounds(point) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// In-bounds passable 4-neighbours of `point`, in east, south, west, north order.
    pub fn passable_neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS
            .into_iter()
            .map(move |(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.is_passable(*p))
    }

    /// Retrieves the component id a given in-bounds [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks whether a breadth-first search from `start` would reach `goal`. The start cell
    /// itself is never tested for passability, so an impassable start connects to the
    /// components of its passable neighbours. An impassable goal is only reachable from itself.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.point_in_bounds(*start) || !self.point_in_bounds(*goal) {
            return false;
        }
        if start == goal {
            return true;
        }
        if !self.is_passable(*goal) {
            return false;
        }
        let goal_ix = self.get_ix_point(goal);
        if self.is_passable(*start) {
            self.components.equiv(self.get_ix_point(start), goal_ix)
        } else {
            self.passable_neighbours(*start)
                .any(|n| self.components.equiv(self.get_ix_point(&n), goal_ix))
        }
    }

    /// Checks if `goal` cannot be reached from `start`.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Links every passable cell to its passable east and south neighbours. Together these
    /// cover every edge of the 4-connected grid graph exactly once.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                if !self.is_passable(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_passable(n) {
                        let ix = self.get_ix_point(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for LabelGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.labels.chunks(self.width) {
            writeln!(f, "[{}]", row.iter().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grids() {
        assert_eq!(LabelGrid::from_rows(vec![]).unwrap_err(), GridError::Empty);
        assert_eq!(
            LabelGrid::from_rows(vec![vec![], vec![]]).unwrap_err(),
            GridError::Empty
        );
        assert_eq!(LabelGrid::new(0, 3, 0).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn rejects_jagged_rows() {
        let err = LabelGrid::from_rows(vec![vec![0, 0], vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Jagged {
                row: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn labels_are_row_major() {
        let grid = LabelGrid::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(2, 0), Some(2));
        assert_eq!(grid.get(0, 1), Some(3));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(-1, 0), None);
        assert!(grid.is_passable(Point::new(0, 0)));
        assert!(!grid.is_passable(Point::new(1, 0)));
        assert!(grid.is_passable(Point::new(2, 0)));
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let grid = LabelGrid::from_rows(vec![vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
        let p1 = Point::new(0, 0);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        let p5 = Point::new(2, 1);
        assert_eq!(grid.get_component(&p1), grid.get_component(&p3));
        assert_eq!(grid.get_component(&p4), grid.get_component(&p5));
        assert_ne!(grid.get_component(&p1), grid.get_component(&p4));
        assert!(grid.unreachable(&p1, &p4));
        assert!(grid.reachable(&p1, &p3));
    }

    /// Diagonal contact does not connect two cells on a 4-grid.
    #[test]
    fn diagonal_cells_are_separate() {
        //  __
        // | #|
        // |# |
        //  __
        let grid = LabelGrid::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn impassable_start_joins_neighbouring_components() {
        // |. # .|  start on the wall in the middle column
        let grid = LabelGrid::from_rows(vec![vec![0, 1, 0]]).unwrap();
        let start = Point::new(1, 0);
        assert!(grid.reachable(&start, &Point::new(0, 0)));
        assert!(grid.reachable(&start, &Point::new(2, 0)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn impassable_goal_only_reachable_from_itself() {
        let grid = LabelGrid::from_rows(vec![vec![0, 1]]).unwrap();
        let wall = Point::new(1, 0);
        assert!(grid.unreachable(&Point::new(0, 0), &wall));
        assert!(grid.reachable(&wall, &wall));
    }

    #[test]
    fn display_lists_rows() {
        let grid = LabelGrid::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        assert_eq!(grid.to_string(), "Grid:\n[0, 1]\n[2, 0]\n");
    }
}
