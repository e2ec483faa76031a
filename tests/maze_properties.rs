use std::collections::VecDeque;

use mazeworks::{
    Coord, Grid, GridEvent, MazeError, Side,
    generators::{generate_maze, generate_maze_with_rng, get_rng},
    solvers::{solve_dfs, solve_maze},
};

const SIZES: [(u16, u16); 6] = [(1, 1), (1, 9), (9, 1), (2, 2), (5, 8), (16, 16)];

fn generated(rows: u16, cols: u16, seed: u64) -> Grid {
    let mut grid = Grid::new(rows, cols, Some(seed)).unwrap();
    generate_maze(&mut grid);
    grid
}

/// Number of cells reachable from the entrance through passages.
fn reachable_from_start(grid: &Grid) -> usize {
    let mut seen = vec![false; grid.rows() as usize * grid.cols() as usize];
    let index = |(row, col): Coord| row as usize * grid.cols() as usize + col as usize;
    let mut queue = VecDeque::from([grid.start()]);
    seen[index(grid.start())] = true;
    let mut count = 0;
    while let Some(coord) = queue.pop_front() {
        count += 1;
        for side in Side::ALL {
            if let Some(next) = grid.passage(coord, side) {
                if !seen[index(next)] {
                    seen[index(next)] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    count
}

fn assert_valid_path(grid: &Grid, path: &[Coord]) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));
    for pair in path.windows(2) {
        assert!(
            Side::ALL
                .into_iter()
                .any(|side| grid.passage(pair[0], side) == Some(pair[1])),
            "no passage between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_generated_mazes_are_spanning_trees() {
    for (rows, cols) in SIZES {
        for seed in 0..10 {
            let grid = generated(rows, cols, seed);
            let cells = rows as usize * cols as usize;
            assert_eq!(grid.passage_count(), cells - 1, "{rows}x{cols} seed {seed}");
            assert_eq!(reachable_from_start(&grid), cells, "{rows}x{cols} seed {seed}");
        }
    }
}

#[test]
fn test_only_entrance_and_exit_are_open_on_the_perimeter() {
    for (rows, cols) in SIZES {
        let grid = generated(rows, cols, 17);
        for cell in grid.cells() {
            let (row, col) = cell.coord();
            if row == 0 {
                assert_eq!(cell.has_wall(Side::Top), (row, col) != grid.start());
            }
            if row == rows - 1 {
                assert_eq!(cell.has_wall(Side::Bottom), (row, col) != grid.goal());
            }
            if col == 0 {
                assert!(cell.has_wall(Side::Left));
            }
            if col == cols - 1 {
                assert!(cell.has_wall(Side::Right));
            }
        }
    }
}

#[test]
fn test_walls_are_mutually_consistent() {
    for seed in 0..5 {
        let grid = generated(12, 7, seed);
        for cell in grid.cells() {
            for side in Side::ALL {
                let next = side.step(cell.coord());
                if let Ok(neighbor) = grid.cell_at(next) {
                    assert_eq!(
                        cell.has_wall(side),
                        neighbor.has_wall(side.opposite()),
                        "{:?} {} vs {:?}",
                        cell.coord(),
                        side,
                        next
                    );
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_maze() {
    let a = generated(20, 20, 1234);
    let b = generated(20, 20, 1234);
    assert!(a.cells().eq(b.cells()));
    assert_eq!(a.to_string(), b.to_string());

    let mut c = Grid::new(20, 20, None).unwrap();
    generate_maze_with_rng(&mut c, &mut get_rng(Some(1234)));
    assert_eq!(a.to_string(), c.to_string());
}

#[test]
fn test_different_seeds_different_mazes() {
    let a = generated(20, 20, 1);
    let b = generated(20, 20, 2);
    assert_ne!(a.to_string(), b.to_string());

    let c = generated(20, 20, 3);
    let d = {
        let mut grid = Grid::new(20, 20, None).unwrap();
        generate_maze(&mut grid);
        grid
    };
    assert_ne!(c.to_string(), d.to_string());
}

#[test]
fn test_generated_mazes_are_solvable() {
    for (rows, cols) in SIZES {
        for seed in 0..10 {
            let mut grid = generated(rows, cols, seed);
            grid.reset_visited();
            let path = solve_maze(&mut grid).expect("perfect maze must be solvable");
            assert_valid_path(&grid, &path);
        }
    }
}

#[test]
fn test_solving_without_reset_finds_nothing() {
    let mut grid = generated(4, 4, 8);
    assert_eq!(solve_maze(&mut grid), None);
}

#[test]
fn test_disconnected_goal_has_no_path() {
    let mut grid = Grid::new(3, 3, None).unwrap();
    // Connect every cell except the goal, which keeps all four walls
    let snake = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (2, 1),
    ];
    snake
        .windows(2)
        .for_each(|pair| grid.clear_wall_between(pair[0], pair[1]).unwrap());
    grid.open_entrance_and_exit();

    assert_eq!(solve_maze(&mut grid), None);
    assert!(!grid[(2, 2)].is_visited());
    assert!(snake.iter().all(|&coord| grid[coord].is_visited()));
}

#[test]
fn test_single_cell_maze() {
    let mut grid = generated(1, 1, 99);
    let cell = grid.cell_at((0, 0)).unwrap();
    assert!(!cell.has_wall(Side::Top));
    assert!(!cell.has_wall(Side::Bottom));
    grid.reset_visited();
    assert_eq!(solve_maze(&mut grid), Some(vec![(0, 0)]));
}

#[test]
fn test_right_is_preferred_over_down() {
    // Two routes around the center:
    //   S > > v
    //   v     v
    //   > > > G
    let mut grid = Grid::new(3, 3, None).unwrap();
    for pair in [
        ((0, 0), (0, 1)),
        ((0, 1), (0, 2)),
        ((0, 2), (1, 2)),
        ((1, 2), (2, 2)),
        ((0, 0), (1, 0)),
        ((1, 0), (2, 0)),
        ((2, 0), (2, 1)),
        ((2, 1), (2, 2)),
    ] {
        grid.clear_wall_between(pair.0, pair.1).unwrap();
    }
    grid.open_entrance_and_exit();

    let path = solve_maze(&mut grid).unwrap();
    assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
    // The lower route is never explored
    assert!(!grid[(1, 0)].is_visited());
}

#[test]
fn test_left_is_preferred_over_down_even_when_longer() {
    let mut grid = Grid::new(3, 3, None).unwrap();
    for pair in [
        ((0, 1), (0, 0)),
        ((0, 0), (1, 0)),
        ((1, 0), (2, 0)),
        ((2, 0), (2, 1)),
        ((0, 1), (1, 1)),
        ((1, 1), (2, 1)),
    ] {
        grid.clear_wall_between(pair.0, pair.1).unwrap();
    }

    let path = solve_dfs(&mut grid, (0, 1), (2, 1)).unwrap();
    assert_eq!(path, Some(vec![(0, 1), (0, 0), (1, 0), (2, 0), (2, 1)]));
}

#[test]
fn test_up_is_preferred_over_down() {
    // From the center both up and down lead to the goal column on the right
    let mut grid = Grid::new(3, 3, None).unwrap();
    for pair in [
        ((1, 1), (0, 1)),
        ((0, 1), (0, 2)),
        ((0, 2), (1, 2)),
        ((1, 1), (2, 1)),
        ((2, 1), (2, 2)),
        ((2, 2), (1, 2)),
    ] {
        grid.clear_wall_between(pair.0, pair.1).unwrap();
    }

    let path = solve_dfs(&mut grid, (1, 1), (1, 2)).unwrap();
    assert_eq!(path, Some(vec![(1, 1), (0, 1), (0, 2), (1, 2)]));
}

#[test]
fn test_events_follow_generation_and_solving() {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut grid = Grid::new(6, 5, Some(21)).unwrap().with_sender(tx);
    generate_maze(&mut grid);
    grid.reset_visited();
    let path = solve_maze(&mut grid).unwrap();
    drop(grid);

    let events = rx.iter().collect::<Vec<_>>();
    assert_eq!(events[0], GridEvent::Initial { rows: 6, cols: 5 });

    let carved = events
        .iter()
        .filter(|e| matches!(e, GridEvent::WallCleared { .. }))
        .count();
    assert_eq!(carved, 6 * 5 - 1);

    let opened = events
        .iter()
        .filter_map(|e| match e {
            GridEvent::BoundaryOpened { coord, side } => Some((*coord, *side)),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(opened, vec![((0, 0), Side::Top), ((5, 4), Side::Bottom)]);

    // Each cell is entered at most once; every advance off the final path is backtracked
    let steps = events
        .iter()
        .filter_map(|e| match e {
            GridEvent::SolveStep { coord, advancing } => Some((*coord, *advancing)),
            _ => None,
        })
        .collect::<Vec<_>>();
    let advances = steps.iter().filter(|(_, advancing)| *advancing).count();
    let retreats = steps.len() - advances;
    assert_eq!(advances - retreats, path.len());
    assert_eq!(steps.first(), Some(&((0, 0), true)));
    assert_eq!(steps.last(), Some(&((5, 4), true)));
}

#[test]
fn test_long_corridors_do_not_exhaust_the_stack() {
    let mut corridor = generated(1, 50_000, 4);
    assert_eq!(corridor.passage_count(), 49_999);
    corridor.reset_visited();
    assert_eq!(solve_maze(&mut corridor).map(|p| p.len()), Some(50_000));

    let mut square = generated(300, 300, 4);
    assert_eq!(square.passage_count(), 300 * 300 - 1);
    square.reset_visited();
    assert!(solve_maze(&mut square).is_some());
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    assert_eq!(
        Grid::new(0, 0, Some(1)).unwrap_err(),
        MazeError::InvalidDimension { rows: 0, cols: 0 }
    );
}
