//! Console visualization of a simulation.
//!
//! Two text renders, one row per grid row:
//!
//! ```text
//! Real World:          Explored World:
//! [ 0  1  0 ]          [ R  1  ? ]
//! [ 0  1  0 ]          [ 0  1  ? ]
//! [ 0  1  0 ]          [ ?  ?  T ]
//! ```
//!
//! Symbols: `0` open, `1` closed, `?` unknown, `R` agent, `T` target. The
//! agent mark wins over the target mark when they share a cell.

use crate::oracle::GroundTruthGrid;
use gridscout_core::KnownMap;
use gridscout_env::{Cell, CellState, GridDim, Terrain};
use std::fmt::Write;

/// Renders the true openness of every cell.
pub fn render_ground_truth(grid: &GroundTruthGrid) -> String {
    render_rows("Real World: ", grid.dim(), |cell| {
        if grid.is_open(cell) {
            '0'
        } else {
            '1'
        }
    })
}

/// Renders what the agent knows, marking its position and the target.
pub fn render_known_map(known: &KnownMap, agent: Cell, target: Cell) -> String {
    render_rows("Explored World: ", known.dim(), |cell| {
        if cell == agent {
            'R'
        } else if cell == target {
            'T'
        } else {
            match known.lookup(cell) {
                CellState::Unknown => '?',
                CellState::Open => '0',
                CellState::Closed => '1',
            }
        }
    })
}

fn render_rows<F>(header: &str, dim: GridDim, symbol: F) -> String
where
    F: Fn(Cell) -> char,
{
    let n = dim.get() as i32;
    let mut out = String::with_capacity(header.len() + 1 + (n as usize) * (3 * n as usize + 3));
    out.push_str(header);
    out.push('\n');

    for y in 0..n {
        out.push('[');
        for x in 0..n {
            // Writing into a String cannot fail
            let _ = write!(out, " {} ", symbol(Cell::new(x, y)));
        }
        out.push_str("]\n");
    }
    out
}
