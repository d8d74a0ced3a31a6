//! Read-only sensing interface between an agent and the world it explores.

use crate::types::{Cell, CellState, GridDim};

/// The central interface for terrain sensing.
///
/// This trait abstracts the "real world" so that the navigation core never
/// reaches into the structure that owns the ground truth. The agent only ever
/// receives a shared reference to something implementing `Terrain`.
///
/// # Implementations
///
/// - **Simulation**: `GroundTruthGrid` - a seeded random or hand-built layout
///
/// # Contract
///
/// Ground truth is static: `is_open` must return the same answer for a cell
/// every time it is asked.
pub trait Terrain {
    /// Returns the dimension of the grid.
    fn dim(&self) -> GridDim;

    /// Returns true if `cell` can be occupied.
    ///
    /// Cells outside the grid are never open.
    fn is_open(&self, cell: Cell) -> bool;

    /// Reads `cell` as a known state.
    fn sense(&self, cell: Cell) -> CellState {
        CellState::from_open(self.is_open(cell))
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    fn dim(&self) -> GridDim {
        (**self).dim()
    }

    fn is_open(&self, cell: Cell) -> bool {
        (**self).is_open(cell)
    }
}
