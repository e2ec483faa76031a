use mazeworks::{
    Grid,
    config::Config,
    generators::generate_maze,
    logging,
    solvers::solve_maze,
};

fn main() -> anyhow::Result<()> {
    let _guard = logging::init("mazeworks.log");

    let mut args = std::env::args().skip(1).peekable();
    let config = if args.peek().is_some() {
        Config::from_args(args)?
    } else {
        // No arguments, ask for them instead
        let mut input = String::new();
        println!("Enter maze dimensions (rows cols [seed]). Maximum size is 65535x65535:");
        std::io::stdin().read_line(&mut input)?;
        Config::from_args(input.split_whitespace())?
    };
    tracing::info!("Starting with {:?}", config);

    let mut grid = Grid::new(config.rows, config.cols, config.seed)?;
    generate_maze(&mut grid);
    grid.reset_visited();

    let path = solve_maze(&mut grid);
    print!("{grid}");
    match path {
        Some(path) => {
            println!("Maze solved! Path visits {} cells:", path.len());
            println!("{path:?}");
        }
        None => println!("No path found to the goal."),
    }
    Ok(())
}
