use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

use recur_backtrack::recursive_backtrack;

use crate::maze::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves a perfect maze into `grid` using the grid's own seed, then opens the
/// entrance and exit.
///
/// Every cell is left marked visited; call [`Grid::reset_visited`] before solving.
pub fn generate_maze(grid: &mut Grid) {
    let mut rng = get_rng(grid.seed());
    generate_maze_with_rng(grid, &mut rng);
}

/// Same as [`generate_maze`], drawing every random choice from `rng`.
pub fn generate_maze_with_rng<R: Rng>(grid: &mut Grid, rng: &mut R) {
    recursive_backtrack(grid, rng);
    grid.open_entrance_and_exit();
    tracing::info!(
        "[generate] Carved {}x{} maze with {} passages",
        grid.rows(),
        grid.cols(),
        grid.passage_count()
    );
}
