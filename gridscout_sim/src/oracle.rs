//! Ground truth oracle for simulation.
//!
//! The `GroundTruthGrid` is the "God's eye view" of the simulated world:
//! the true openness of every cell. It is fixed once built; the agent only
//! ever reads it through the `Terrain` trait.

use gridscout_env::{Cell, GridDim, GridError, GridResult, Terrain};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The true openness of every cell, `true` = open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundTruthGrid {
    dim: GridDim,

    /// Indexed by flat index `x + N*y`
    cells: Vec<bool>,
}

impl GroundTruthGrid {
    /// Draws a random grid.
    ///
    /// Each cell is open when a uniform draw from `0..100` is at most
    /// `floor(openness * 100)`, so the open fraction sits slightly above
    /// `openness`. `start` and `target` are forced open afterwards.
    ///
    /// The same seed always yields the same grid.
    pub fn generate(
        dim: GridDim,
        openness: f64,
        start: Cell,
        target: Cell,
        seed: u64,
    ) -> GridResult<Self> {
        if !(0.0..=1.0).contains(&openness) {
            return Err(GridError::InvalidOpenness(openness));
        }
        dim.check(start)?;
        dim.check(target)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let threshold = (openness * 100.0).floor() as u32;
        let cells = (0..dim.cell_count())
            .map(|_| rng.gen_range(0..100u32) <= threshold)
            .collect();

        let mut grid = Self { dim, cells };
        grid.force_open(start);
        grid.force_open(target);
        Ok(grid)
    }

    /// Builds a grid from rows of text, top row first.
    ///
    /// `0` or `.` is open, `1` or `#` is closed. Whitespace is ignored, so the
    /// output of the ground truth render can be pasted back in after
    /// stripping brackets.
    pub fn from_layout(rows: &[&str]) -> GridResult<Self> {
        let dim = GridDim::new(rows.len())?;
        let mut cells = Vec::with_capacity(dim.cell_count());

        for (y, row) in rows.iter().enumerate() {
            let before = cells.len();
            for symbol in row.chars().filter(|c| !c.is_whitespace()) {
                match symbol {
                    '0' | '.' => cells.push(true),
                    '1' | '#' => cells.push(false),
                    other => {
                        return Err(GridError::InvalidLayout(format!(
                            "unexpected '{}' in row {}",
                            other, y
                        )))
                    }
                }
            }
            if cells.len() - before != dim.get() {
                return Err(GridError::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    cells.len() - before,
                    dim.get()
                )));
            }
        }

        Self::from_cells(dim, cells)
    }

    /// Wraps a flat openness vector of length N².
    pub fn from_cells(dim: GridDim, cells: Vec<bool>) -> GridResult<Self> {
        if cells.len() != dim.cell_count() {
            return Err(GridError::LayoutMismatch {
                expected: dim.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { dim, cells })
    }

    /// Forces `cell` open. Used only while building; ignored out of bounds.
    pub(crate) fn force_open(&mut self, cell: Cell) {
        if let Some(index) = self.dim.flatten(cell) {
            self.cells[index] = true;
        }
    }

    /// Fraction of open cells.
    pub fn open_ratio(&self) -> f64 {
        let open = self.cells.iter().filter(|open| **open).count();
        open as f64 / self.cells.len() as f64
    }
}

impl Terrain for GroundTruthGrid {
    fn dim(&self) -> GridDim {
        self.dim
    }

    fn is_open(&self, cell: Cell) -> bool {
        self.dim
            .flatten(cell)
            .map(|index| self.cells[index])
            .unwrap_or(false)
    }
}
