use crate::error::Result;
use crate::label_grid::LabelGrid;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::collections::VecDeque;

/// Breadth-first solver returning the number of orthogonal moves between two cells of a
/// [LabelGrid]. Every call allocates its own visited set and frontier, so a single solver and
/// grid can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct GridPathFinder {
    /// Consults the connected components of the grid before searching and skips the flood
    /// fill when the goal is provably unreachable.
    pub use_components: bool,
    /// Treats an impassable start or goal as unreachable instead of exempting it from the
    /// passability check. A cell is still at distance 0 from itself.
    pub strict_endpoints: bool,
}

impl Default for GridPathFinder {
    fn default() -> GridPathFinder {
        GridPathFinder {
            use_components: true,
            strict_endpoints: false,
        }
    }
}

impl GridPathFinder {
    pub fn new() -> GridPathFinder {
        GridPathFinder::default()
    }

    /// Computes the minimum number of moves from `start` to `goal`, moving east, south, west
    /// or north between cells not labelled [IMPASSABLE](crate::IMPASSABLE).
    ///
    /// Returns `Ok(None)` if no such sequence of moves exists and
    /// [GridError::OutOfRange](crate::GridError::OutOfRange) if either point lies outside
    /// the grid. The start cell is not checked for passability unless
    /// [strict_endpoints](Self::strict_endpoints) is set.
    pub fn find_shortest_path(
        &self,
        grid: &LabelGrid,
        start: Point,
        goal: Point,
    ) -> Result<Option<usize>> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        if start == goal {
            return Ok(Some(0));
        }
        if self.strict_endpoints && (!grid.is_passable(start) || !grid.is_passable(goal)) {
            info!("{} or {} is impassable", start, goal);
            return Ok(None);
        }
        if self.use_components && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let distance = bfs_distance(grid, start, goal);
        if self.use_components && distance.is_none() {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        Ok(distance)
    }
}

/// Flood fills from `start` until `goal` is dequeued. Cells are marked visited as they are
/// enqueued, so each enters the frontier at most once.
fn bfs_distance(grid: &LabelGrid, start: Point, goal: Point) -> Option<usize> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut frontier: VecDeque<(Point, usize)> = VecDeque::new();
    visited[grid.get_ix_point(&start)] = true;
    frontier.push_back((start, 0));
    let mut expanded = 0usize;
    while let Some((current, distance)) = frontier.pop_front() {
        if current == goal {
            debug!("Found {} at distance {} after expanding {} cells", goal, distance, expanded);
            return Some(distance);
        }
        expanded += 1;
        for n in grid.passable_neighbours(current) {
            let ix = grid.get_ix_point(&n);
            if !visited[ix] {
                visited[ix] = true;
                frontier.push_back((n, distance + 1));
            }
        }
    }
    debug!("Exhausted {} cells without reaching {}", expanded, goal);
    None
}

/// Shortest path length using the default [GridPathFinder].
pub fn find_shortest_path(grid: &LabelGrid, start: Point, goal: Point) -> Result<Option<usize>> {
    GridPathFinder::default().find_shortest_path(grid, start, goal)
}
