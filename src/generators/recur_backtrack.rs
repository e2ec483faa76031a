use rand::Rng;

use crate::maze::Grid;

/// Randomized depth-first carving from the top-left cell.
///
/// The stack stands in for the call stack of the recursive formulation: a cell
/// stays on it until it has no unvisited neighbors left, so it can branch more
/// than once.
pub fn recursive_backtrack<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let start = grid.start();
    grid.mark_visited(start);

    let mut stack = vec![start];
    let mut max_depth = stack.len();

    while let Some(cell) = stack.pop() {
        let neighbors = grid.unvisited_around(cell);
        if neighbors.is_empty() {
            // Dead end, backtrack to the previous cell
            continue;
        }

        let (side, _) = neighbors[rng.random_range(0..neighbors.len())];
        let neighbor = grid.carve(cell, side);
        grid.mark_visited(neighbor);
        tracing::trace!("[generate] Carved {:?} -> {:?}", cell, neighbor);

        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(cell);
        // Put the neighbor to carve the maze in that neighbor's direction
        stack.push(neighbor);
        max_depth = max_depth.max(stack.len());
    }

    tracing::debug!("[generate] Backtracker finished, max stack depth {}", max_depth);
}
