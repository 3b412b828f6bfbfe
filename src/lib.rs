//! # grid_bfs
//!
//! Shortest path lengths on 4-connected occupancy grids using
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search). Cells carry
//! integer labels; cells labelled [IMPASSABLE] block movement and every other label is free
//! space. Each move goes one cell east, south, west or north and costs one, so the first
//! time the goal leaves the frontier its distance is minimal. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! Unreachable goals are reported as [None]. Front ends that need a numeric sentinel use
//! [NOT_FOUND_SENTINEL].
pub mod error;
pub mod label_grid;
pub mod solver;

pub use error::{GridError, Result};
pub use label_grid::LabelGrid;
pub use solver::{find_shortest_path, GridPathFinder};

/// Label of a cell that cannot be entered.
pub const IMPASSABLE: i32 = 1;

/// Printed in place of a distance when the goal cannot be reached.
pub const NOT_FOUND_SENTINEL: i64 = -1;

/// Neighbour offsets as `(dx, dy)`: east, south, west, north.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
