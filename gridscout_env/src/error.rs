//! Error types for the GridScout environment abstraction.

use crate::types::Cell;
use thiserror::Error;

/// Configuration errors raised when a grid, agent or world is constructed.
///
/// Nothing in the navigation core fails once construction succeeded, so every
/// variant here describes bad input rather than a runtime fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Grid dimension must be at least 1
    #[error("Invalid grid dimension: {0} (must be > 0)")]
    InvalidDimension(usize),

    /// Field-of-view radius must be at least 1
    #[error("Invalid field of view: {0} (must be >= 1)")]
    InvalidFov(u32),

    /// A cell lies outside the grid
    #[error("Cell {cell} is out of bounds for a {dim}x{dim} grid")]
    OutOfBounds { cell: Cell, dim: usize },

    /// Openness probability outside [0, 1]
    #[error("Invalid openness: {0} (must be within [0, 1])")]
    InvalidOpenness(f64),

    /// A hand-built layout does not match the grid size
    #[error("Layout mismatch: expected {expected} cells, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// The agent cannot be placed on a closed cell
    #[error("Cell {0} is closed")]
    ClosedCell(Cell),

    /// A hand-built layout contains an unrecognised symbol
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

impl GridError {
    /// Creates an out-of-bounds error.
    pub fn out_of_bounds(cell: Cell, dim: usize) -> Self {
        Self::OutOfBounds { cell, dim }
    }
}

/// Convenience alias used by every constructor in the workspace.
pub type GridResult<T> = Result<T, GridError>;
