use crate::error::MazeError;
use crate::maze::{Coord, Grid, GridEvent, Side};

/// Directions tried from every cell, first to last.
const PRIORITY: [Side; 4] = [Side::Right, Side::Left, Side::Top, Side::Bottom];

/// A cell on the search path and the index of the next direction to try from it.
struct Frame {
    coord: Coord,
    next: usize,
}

/// Depth-first search with backtracking from `start` to `goal`.
///
/// Fails only if either endpoint is outside the grid; an unreachable goal is `Ok(None)`.
pub fn solve_dfs(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
) -> Result<Option<Vec<Coord>>, MazeError> {
    grid.cell_at(start)?;
    grid.cell_at(goal)?;
    Ok(depth_first(grid, start, goal))
}

pub(super) fn depth_first(grid: &mut Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    enter(grid, start);
    if start == goal {
        return Some(vec![start]);
    }

    let mut stack = vec![Frame {
        coord: start,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&side) = PRIORITY.get(frame.next) else {
            // Every direction failed, this cell is a dead end
            let coord = frame.coord;
            stack.pop();
            grid.send(GridEvent::SolveStep {
                coord,
                advancing: false,
            });
            continue;
        };
        frame.next += 1;
        let coord = frame.coord;

        let Some(next) = grid
            .passage(coord, side)
            .filter(|&next| !grid[next].is_visited())
        else {
            continue;
        };

        enter(grid, next);
        if next == goal {
            let mut path = stack.iter().map(|frame| frame.coord).collect::<Vec<_>>();
            path.push(next);
            tracing::debug!("[solve] Reached {:?} with a path of {} cells", goal, path.len());
            return Some(path);
        }
        stack.push(Frame {
            coord: next,
            next: 0,
        });
    }

    None
}

fn enter(grid: &mut Grid, coord: Coord) {
    grid.mark_visited(coord);
    grid.send(GridEvent::SolveStep {
        coord,
        advancing: true,
    });
}
