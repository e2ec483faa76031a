use std::fmt;
use std::sync::mpsc::Sender;

use super::cell::{Cell, Side};
use super::{Coord, GridEvent};
use crate::error::MazeError;

/// A rectangular grid of cells addressed by `(row, col)`.
///
/// The grid is the single place where walls are cleared, which keeps the two
/// sides of every interior wall consistent with each other.
#[derive(Debug)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: u16,
    cols: u16,
    seed: Option<u64>,
    sender: Option<Sender<GridEvent>>,
}

impl Grid {
    /// Creates a grid with every wall intact and no cell visited.
    ///
    /// `seed` is used by the generator's random source. Without one, generation
    /// is seeded from OS entropy.
    pub fn new(rows: u16, cols: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid {
            cells,
            rows,
            cols,
            seed,
            sender: None,
        })
    }

    /// Attaches an observer channel. Every later wall change and solver step is sent on it.
    pub fn with_sender(mut self, sender: Sender<GridEvent>) -> Self {
        let _ = sender.send(GridEvent::Initial {
            rows: self.rows,
            cols: self.cols,
        });
        self.sender = Some(sender);
        self
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The entrance cell, top-left.
    pub fn start(&self) -> Coord {
        (0, 0)
    }

    /// The exit cell, bottom-right.
    pub fn goal(&self) -> Coord {
        (self.rows - 1, self.cols - 1)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), MazeError> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let idx = self.ravel_index(coord);
        &mut self.cells[idx]
    }

    /// Bounds-checked access to a cell.
    pub fn cell_at(&self, coord: Coord) -> Result<&Cell, MazeError> {
        self.check_bounds(coord)?;
        Ok(&self[coord])
    }

    /// Returns the in-bounds, unvisited neighbors of `coord`, in the order up, down, left, right.
    pub fn neighbors_unvisited(&self, coord: Coord) -> Result<Vec<(Side, Coord)>, MazeError> {
        self.check_bounds(coord)?;
        Ok(self.unvisited_around(coord))
    }

    /// Unchecked form of [`Grid::neighbors_unvisited`] for coordinates known to be in bounds.
    pub(crate) fn unvisited_around(&self, coord: Coord) -> Vec<(Side, Coord)> {
        Side::ALL
            .into_iter()
            .map(|side| (side, side.step(coord)))
            .filter(|&(_, next)| self.is_in_bounds(next) && !self[next].is_visited())
            .collect()
    }

    /// The neighbor reachable from `coord` through an open wall on `side`.
    ///
    /// Returns `None` if the wall is present or the opening leads outside the grid,
    /// as the entrance and exit do.
    pub fn passage(&self, coord: Coord, side: Side) -> Option<Coord> {
        if !self.is_in_bounds(coord) || self[coord].has_wall(side) {
            return None;
        }
        let next = side.step(coord);
        self.is_in_bounds(next).then_some(next)
    }

    /// Clears the wall shared by two orthogonally adjacent cells, on both sides.
    pub fn clear_wall_between(&mut self, from: Coord, to: Coord) -> Result<(), MazeError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        let side = Side::ALL
            .into_iter()
            .find(|side| side.step(from) == to)
            .ok_or(MazeError::NotAdjacent { from, to })?;
        self.carve(from, side);
        Ok(())
    }

    /// Clears the wall on `side` of `from` together with the matching wall of the
    /// neighbor across it. Both cells must be in bounds.
    pub(crate) fn carve(&mut self, from: Coord, side: Side) -> Coord {
        let to = side.step(from);
        self.cell_mut(from).clear_wall(side);
        self.cell_mut(to).clear_wall(side.opposite());
        self.send(GridEvent::WallCleared { from, to });
        to
    }

    /// Opens the top wall of the entrance and the bottom wall of the exit.
    pub fn open_entrance_and_exit(&mut self) {
        let entrance = self.start();
        let exit = self.goal();
        self.cell_mut(entrance).clear_wall(Side::Top);
        self.send(GridEvent::BoundaryOpened {
            coord: entrance,
            side: Side::Top,
        });
        self.cell_mut(exit).clear_wall(Side::Bottom);
        self.send(GridEvent::BoundaryOpened {
            coord: exit,
            side: Side::Bottom,
        });
    }

    pub(crate) fn mark_visited(&mut self, coord: Coord) {
        self.cell_mut(coord).mark_visited();
    }

    /// Clears the visited flag on every cell, preparing the grid for a solve pass.
    pub fn reset_visited(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_visited);
    }

    /// Number of open interior walls. A perfect maze has exactly `rows * cols - 1`.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Side::Bottom, Side::Right]
                    .into_iter()
                    .filter(|&side| self.passage(cell.coord(), side).is_some())
                    .count()
            })
            .sum()
    }

    pub(crate) fn send(&self, event: GridEvent) {
        if let Some(sender) = &self.sender {
            // A dropped receiver only means nobody is watching anymore
            let _ = sender.send(event);
        }
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}

/// Draws the wall layout with `+`, `-` and `|`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let top = if self[(row, col)].has_wall(Side::Top) {
                    "---"
                } else {
                    "   "
                };
                write!(f, "+{top}")?;
            }
            writeln!(f, "+")?;
            for col in 0..self.cols {
                let left = if self[(row, col)].has_wall(Side::Left) {
                    "|"
                } else {
                    " "
                };
                write!(f, "{left}   ")?;
            }
            let right = if self[(row, self.cols - 1)].has_wall(Side::Right) {
                "|"
            } else {
                " "
            };
            writeln!(f, "{right}")?;
        }
        for col in 0..self.cols {
            let bottom = if self[(self.rows - 1, col)].has_wall(Side::Bottom) {
                "---"
            } else {
                "   "
            };
            write!(f, "+{bottom}")?;
        }
        writeln!(f, "+")
    }
}
