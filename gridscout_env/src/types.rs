//! Common types for the GridScout environment abstraction.

use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};

/// A grid cell addressed by column `x` and row `y`.
///
/// Coordinates are signed so that neighbour arithmetic near a wall can step
/// outside the grid and be rejected by [`GridDim::contains`] instead of
/// wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Creates a cell from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell reached by applying `mv`.
    pub fn offset(self, mv: Move) -> Self {
        Self::new(self.x + mv.dx, self.y + mv.dy)
    }

    /// Chebyshev (king-move) distance to `other`.
    pub fn chebyshev(self, other: Cell) -> u32 {
        (self.x - other.x).unsigned_abs().max((self.y - other.y).unsigned_abs())
    }

    /// Unit heading from this cell toward `target`.
    ///
    /// Each component is the sign of the difference, so a target sharing a row
    /// or column yields a zero component.
    pub fn heading_to(self, target: Cell) -> Move {
        Move::new((target.x - self.x).signum(), (target.y - self.y).signum())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single-step displacement with both components in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Move {
    pub dx: i32,
    pub dy: i32,
}

impl Move {
    /// No displacement.
    pub const STAY: Move = Move { dx: 0, dy: 0 };

    /// Creates a move, clamping each component to a unit step.
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    /// Returns true if this move leaves the agent where it is.
    pub fn is_stay(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// The opposite displacement.
    pub fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Horizontal component only.
    pub fn horizontal(self) -> Self {
        Self { dx: self.dx, dy: 0 }
    }

    /// Vertical component only.
    pub fn vertical(self) -> Self {
        Self { dx: 0, dy: self.dy }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

/// Side length of a square N x N grid.
///
/// Threaded explicitly through every function that needs it; there is no
/// process-wide dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDim(usize);

impl GridDim {
    /// Creates a dimension, rejecting an empty grid.
    pub fn new(n: usize) -> GridResult<Self> {
        if n == 0 || n > i32::MAX as usize {
            return Err(GridError::InvalidDimension(n));
        }
        Ok(Self(n))
    }

    /// Side length.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Total number of cells (N²).
    pub fn cell_count(&self) -> usize {
        self.0 * self.0
    }

    /// Returns true if `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        let n = self.0 as i64;
        (0..n).contains(&(cell.x as i64)) && (0..n).contains(&(cell.y as i64))
    }

    /// Flat index `x + N*y`, or `None` for a cell outside the grid.
    pub fn flatten(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.x as usize + self.0 * cell.y as usize)
    }

    /// Inverse of [`flatten`](Self::flatten).
    pub fn unflatten(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        Some(Cell::new((index % self.0) as i32, (index / self.0) as i32))
    }

    /// Fails with [`GridError::OutOfBounds`] unless `cell` is inside the grid.
    pub fn check(&self, cell: Cell) -> GridResult<Cell> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(GridError::out_of_bounds(cell, self.0))
        }
    }

    /// The bottom-right cell `(N-1, N-1)`, the default target.
    pub fn corner(&self) -> Cell {
        let last = self.0 as i32 - 1;
        Cell::new(last, last)
    }

    /// All cells in flat-index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).filter_map(move |i| self.unflatten(i))
    }
}

impl std::fmt::Display for GridDim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// What the agent knows about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Never covered by a sensing ring.
    #[default]
    Unknown,
    Open,
    Closed,
}

impl CellState {
    /// Maps a ground-truth reading to a known state.
    pub fn from_open(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Only an observed open cell counts; Unknown is never treated as open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}
