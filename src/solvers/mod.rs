mod dfs;

pub use dfs::solve_dfs;

use crate::maze::{Coord, Grid};

/// Solves the maze from the entrance (top-left) to the exit (bottom-right).
///
/// Returns the cells of the path, entrance and exit included, or `None` if the
/// exit cannot be reached. Visited flags must be cleared beforehand (see
/// [`Grid::reset_visited`]); stale marks make reachable cells look explored.
pub fn solve_maze(grid: &mut Grid) -> Option<Vec<Coord>> {
    let start = grid.start();
    let goal = grid.goal();
    let path = dfs::depth_first(grid, start, goal);
    match &path {
        Some(path) => tracing::info!("[solve] Goal reached in {} steps", path.len() - 1),
        None => tracing::warn!("[solve] No path from {:?} to {:?}", start, goal),
    }
    path
}
