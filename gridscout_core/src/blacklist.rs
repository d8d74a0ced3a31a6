//! Cells the agent has given up on.

use gridscout_env::Cell;
use std::collections::BTreeSet;

/// Insert-only set of dead-end cells.
///
/// A cell lands here when the agent stood on it and found no usable forward
/// neighbour. Entries are never removed for the lifetime of the agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    cells: BTreeSet<Cell>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `cell`, returning true if it was not already listed.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
