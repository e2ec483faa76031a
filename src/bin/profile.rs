use std::time::Instant;

use mazeworks::{Grid, generators::generate_maze, logging, solvers::solve_maze};

/// Generates and solves the largest grid repeatedly, reporting timings.
/// Usage: `profile [iterations] [size]`.
fn main() -> anyhow::Result<()> {
    let _guard = logging::init("mazeworks-profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let size = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(1000);

    for iter in 0..num_iters {
        let mut grid = Grid::new(size, size, Some(iter as u64))?;

        let started = Instant::now();
        generate_maze(&mut grid);
        let generated = started.elapsed();

        grid.reset_visited();
        let started = Instant::now();
        let path = solve_maze(&mut grid);
        let solved = started.elapsed();

        tracing::info!(
            "[profile] iter {} generate {:?} solve {:?} path {:?}",
            iter,
            generated,
            solved,
            path.as_ref().map(Vec::len)
        );
        println!(
            "{size}x{size} #{iter}: generate {generated:?}, solve {solved:?}, path length {}",
            path.map_or(0, |p| p.len())
        );
    }
    Ok(())
}
