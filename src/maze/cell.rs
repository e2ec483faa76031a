use std::fmt;

use super::Coord;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All sides, in the order used for neighbor discovery (up, down, left, right).
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The matching side on the neighboring cell.
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The coordinate one step from `coord` across this side.
    ///
    /// Steps past zero wrap to `u16::MAX` and steps past `u16::MAX` saturate, so the
    /// result is always rejected by a bounds check instead of overflowing.
    /// The largest valid index is `u16::MAX - 1`, since dimensions are at most `u16::MAX`.
    pub fn step(self, coord: Coord) -> Coord {
        let (row, col) = coord;
        match self {
            Side::Top => (row.wrapping_sub(1), col),
            Side::Bottom => (row.saturating_add(1), col),
            Side::Left => (row, col.wrapping_sub(1)),
            Side::Right => (row, col.saturating_add(1)),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Side::Top => 0b0001,
            Side::Bottom => 0b0010,
            Side::Left => 0b0100,
            Side::Right => 0b1000,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => write!(f, "top"),
            Side::Bottom => write!(f, "bottom"),
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A single grid unit: four wall flags, a visited flag and its own coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Bit-set of present walls, one bit per [`Side`].
    walls: u8,
    visited: bool,
    row: u16,
    col: u16,
}

impl Cell {
    const ALL_WALLS: u8 = 0b1111;

    /// Creates a cell with all four walls present and not visited.
    pub fn new(row: u16, col: u16) -> Self {
        Cell {
            walls: Cell::ALL_WALLS,
            visited: false,
            row,
            col,
        }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn has_wall(&self, side: Side) -> bool {
        self.walls & side.bit() != 0
    }

    /// Number of walls still standing around this cell.
    pub fn wall_count(&self) -> u32 {
        self.walls.count_ones()
    }

    /// Removes the wall on one side of this cell only.
    ///
    /// Cells inside a [`Grid`](super::Grid) are only reachable by shared reference;
    /// the grid clears walls in pairs through [`Grid::clear_wall_between`](super::Grid::clear_wall_between).
    pub fn clear_wall(&mut self, side: Side) {
        self.walls &= !side.bit();
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub fn reset_visited(&mut self) {
        self.visited = false;
    }
}
