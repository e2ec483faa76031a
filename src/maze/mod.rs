pub mod cell;
pub mod grid;

pub use cell::{Cell, Side};
pub use grid::Grid;

/// A cell position as `(row, col)`.
pub type Coord = (u16, u16);

/// Notifications sent to an observer of a grid, e.g. a renderer animating the
/// carving and the search. The core never waits on the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Sent once when the observer is attached.
    Initial { rows: u16, cols: u16 },
    /// The wall between two adjacent cells was removed.
    WallCleared { from: Coord, to: Coord },
    /// An outward-facing wall on the perimeter was removed (entrance or exit).
    BoundaryOpened { coord: Coord, side: Side },
    /// The solver moved into a cell (`advancing`) or backtracked out of a dead end.
    SolveStep { coord: Coord, advancing: bool },
}
