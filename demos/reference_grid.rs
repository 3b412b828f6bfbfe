use grid_bfs::{find_shortest_path, LabelGrid, NOT_FOUND_SENTINEL};
use grid_util::point::Point;

// In this example the shortest path length is found on a 5x4 grid with shape
//  _____
// |S #.E|
// |  #.#|
// |#   #|
// | ##  |
//  _____
// where
// - # marks an obstacle (label 1)
// - S marks the start
// - E marks the end, a passable cell labelled 2
//
// Nodes have a 4-neighborhood. Run with RUST_LOG=debug to see search statistics.

fn main() -> grid_bfs::Result<()> {
    env_logger::init();
    let grid = LabelGrid::from_rows(vec![
        vec![0, 0, 1, 0, 2],
        vec![0, 0, 1, 0, 1],
        vec![1, 0, 0, 0, 1],
        vec![0, 1, 1, 0, 0],
    ])?;
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(4, 0);
    let length = find_shortest_path(&grid, start, end)?
        .map_or(NOT_FOUND_SENTINEL, |d| d as i64);
    println!("Shortest Path Length: {}", length);
    Ok(())
}
