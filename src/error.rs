use thiserror::Error;

use crate::maze::Coord;

/// Errors raised by grid construction and coordinate access.
///
/// A solve that finds no path is not an error; see [`crate::solvers::solve_maze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1 (got {rows}x{cols})")]
    InvalidDimension { rows: u16, cols: u16 },
    #[error("coordinate {coord:?} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: u16, cols: u16 },
    #[error("cells {from:?} and {to:?} are not orthogonal neighbors")]
    NotAdjacent { from: Coord, to: Coord },
}
