//! The agent's accumulated partial knowledge of the grid.

use gridscout_env::{Cell, CellState, GridDim, Terrain};
use std::collections::BTreeMap;

/// Sparse record of every cell the agent has observed.
///
/// Entries are keyed by flat index and only ever added. Because ground truth
/// never changes, a recorded state is final: a second observation of the same
/// cell is ignored.
#[derive(Debug, Clone)]
pub struct KnownMap {
    dim: GridDim,
    entries: BTreeMap<usize, CellState>,
}

impl KnownMap {
    /// Creates an empty map.
    pub fn new(dim: GridDim) -> Self {
        Self {
            dim,
            entries: BTreeMap::new(),
        }
    }

    /// Creates a map holding only the start cell, recorded as open.
    ///
    /// The start cell is guaranteed open by the world, so the agent may treat
    /// it as known before its first look.
    pub fn seeded(dim: GridDim, start: Cell) -> Self {
        let mut map = Self::new(dim);
        if let Some(index) = dim.flatten(start) {
            map.entries.insert(index, CellState::Open);
        }
        map
    }

    /// Records the true state of each cell not already known.
    ///
    /// Returns how many cells became known. Cells outside the grid are skipped.
    pub fn update<'a, T, I>(&mut self, cells: I, terrain: &T) -> usize
    where
        T: Terrain + ?Sized,
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut discovered = 0;
        for &cell in cells {
            let Some(index) = self.dim.flatten(cell) else {
                continue;
            };
            self.entries.entry(index).or_insert_with(|| {
                discovered += 1;
                terrain.sense(cell)
            });
        }
        discovered
    }

    /// What is known about `cell`. Anything never observed, including cells
    /// outside the grid, is `Unknown`.
    pub fn lookup(&self, cell: Cell) -> CellState {
        self.dim
            .flatten(cell)
            .and_then(|index| self.entries.get(&index).copied())
            .unwrap_or(CellState::Unknown)
    }

    /// Number of observed cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    /// Observed cells and their states in flat-index order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.entries
            .iter()
            .filter_map(|(&index, &state)| self.dim.unflatten(index).map(|cell| (cell, state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Everything open except the listed cells.
    struct Blocked(GridDim, Vec<Cell>);

    impl Terrain for Blocked {
        fn dim(&self) -> GridDim {
            self.0
        }

        fn is_open(&self, cell: Cell) -> bool {
            self.0.contains(cell) && !self.1.contains(&cell)
        }
    }

    #[test]
    fn test_seeded_start_is_open() {
        let dim = GridDim::new(3).unwrap();
        let map = KnownMap::seeded(dim, Cell::new(1, 1));

        assert_eq!(map.lookup(Cell::new(1, 1)), CellState::Open);
        assert_eq!(map.lookup(Cell::new(0, 0)), CellState::Unknown);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_update_records_truth() {
        let dim = GridDim::new(3).unwrap();
        let terrain = Blocked(dim, vec![Cell::new(1, 0)]);
        let mut map = KnownMap::new(dim);

        let added = map.update(&[Cell::new(1, 0), Cell::new(2, 0)], &terrain);

        assert_eq!(added, 2);
        assert_eq!(map.lookup(Cell::new(1, 0)), CellState::Closed);
        assert_eq!(map.lookup(Cell::new(2, 0)), CellState::Open);
    }

    #[test]
    fn test_recorded_state_never_changes() {
        let dim = GridDim::new(3).unwrap();
        let mut map = KnownMap::new(dim);
        map.update(&[Cell::new(2, 2)], &Blocked(dim, vec![Cell::new(2, 2)]));

        // A terrain disagreeing with the first reading cannot overwrite it
        let added = map.update(&[Cell::new(2, 2)], &Blocked(dim, vec![]));

        assert_eq!(added, 0);
        assert_eq!(map.lookup(Cell::new(2, 2)), CellState::Closed);
    }

    #[test]
    fn test_out_of_bounds_lookup_is_unknown() {
        let dim = GridDim::new(3).unwrap();
        let mut map = KnownMap::seeded(dim, Cell::new(0, 0));
        let added = map.update(&[Cell::new(-1, 0), Cell::new(3, 3)], &Blocked(dim, vec![]));

        assert_eq!(added, 0);
        assert_eq!(map.lookup(Cell::new(-1, 0)), CellState::Unknown);
    }
}
