//! The field-of-view geometry engine.
//!
//! A ring of radius `r` around a center is the outline of the axis-aligned
//! square whose corners sit `r` cells away on both axes. It is built from four
//! corners and four sweeps:
//!
//! ```text
//!   top-left ── top sweep ── top-right
//!      │                        │
//!   left sweep     center    right sweep
//!      │                        │
//!   bottom-left ─ bottom sweep ─ bottom-right
//! ```
//!
//! A center touching a wall skips the sweep that would lie beyond it, and the
//! two sweeps perpendicular to that wall are re-anchored at the cell `r` away
//! from the center on the center's own row or column instead of at an
//! off-grid corner. Each sweep is clamped to the grid before any cell is
//! built, so no flat index can alias a cell on another row, and the cost of
//! a ring is bounded by the grid side rather than the radius.

use gridscout_env::{Cell, GridDim};
use std::collections::BTreeSet;

/// Which grid walls a cell is touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Walls {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Walls {
    /// Checks `cell` against the four edges of the grid.
    pub fn of(dim: GridDim, cell: Cell) -> Self {
        let last = dim.get() as i32 - 1;
        Self {
            left: cell.x == 0,
            top: cell.y == 0,
            right: cell.x == last,
            bottom: cell.y == last,
        }
    }
}

/// Chebyshev distance from `center` to the farthest grid edge. Rings beyond
/// it are empty.
fn reach(dim: GridDim, center: Cell) -> u32 {
    let last = dim.get() as i32 - 1;
    let farthest = center.x.max(center.y).max(last - center.x).max(last - center.y);
    u32::try_from(farthest).unwrap_or(0)
}

/// The four corners of a ring, before any clipping.
#[derive(Debug, Clone, Copy)]
struct Corners {
    bottom_right: Cell,
    bottom_left: Cell,
    top_right: Cell,
    top_left: Cell,
}

impl Corners {
    fn around(center: Cell, radius: i32) -> Self {
        Self {
            bottom_right: Cell::new(center.x.saturating_add(radius), center.y.saturating_add(radius)),
            bottom_left: Cell::new(center.x.saturating_sub(radius), center.y.saturating_add(radius)),
            top_right: Cell::new(center.x.saturating_add(radius), center.y.saturating_sub(radius)),
            top_left: Cell::new(center.x.saturating_sub(radius), center.y.saturating_sub(radius)),
        }
    }
}

/// Returns the in-bounds cells at Chebyshev distance exactly `radius` from
/// `center`.
///
/// An interior center with room for the whole square yields `8 * radius`
/// cells. A radius of zero yields nothing; the center itself is never part of
/// a ring.
pub fn ring(dim: GridDim, center: Cell, radius: u32) -> BTreeSet<Cell> {
    let mut cells = BTreeSet::new();
    if radius == 0 || !dim.contains(center) || radius > reach(dim, center) {
        return cells;
    }
    let Ok(r) = i32::try_from(radius) else {
        return cells;
    };

    let walls = Walls::of(dim, center);
    let corners = Corners::around(center, r);

    let mut sweeps: Vec<Vec<Cell>> = Vec::with_capacity(4);
    if !walls.right {
        sweeps.push(vertical_sweep(center, corners.top_right, corners.bottom_right, 1, r, walls, dim));
    }
    if !walls.left {
        sweeps.push(vertical_sweep(center, corners.top_left, corners.bottom_left, -1, r, walls, dim));
    }
    if !walls.top {
        sweeps.push(horizontal_sweep(center, corners.top_left, corners.top_right, -1, r, walls, dim));
    }
    if !walls.bottom {
        sweeps.push(horizontal_sweep(center, corners.bottom_left, corners.bottom_right, 1, r, walls, dim));
    }

    cells.extend(sweeps.into_iter().flatten());
    cells
}

/// Cells from every ring `1..=fov` around `center`, the agent's full sensing
/// footprint for one look.
///
/// Radii past the farthest grid edge add nothing and are never visited.
pub fn field_of_view(dim: GridDim, center: Cell, fov: u32) -> BTreeSet<Cell> {
    if !dim.contains(center) {
        return BTreeSet::new();
    }
    let radius = fov.min(reach(dim, center));
    (1..=radius).flat_map(|r| ring(dim, center, r)).collect()
}

/// Column of cells from `start` down to `end` at `x = center.x + side * r`.
///
/// Against the top wall the sweep starts beside the center; against the
/// bottom wall it ends beside the center. A column off the grid is empty.
fn vertical_sweep(
    center: Cell,
    start: Cell,
    end: Cell,
    side: i32,
    r: i32,
    walls: Walls,
    dim: GridDim,
) -> Vec<Cell> {
    let x = center.x.saturating_add(side.saturating_mul(r));
    let beside = Cell::new(x, center.y);
    let start = if walls.top { beside } else { start };
    let end = if walls.bottom { beside } else { end };

    let last = dim.get() as i32 - 1;
    if !(0..=last).contains(&x) {
        return Vec::new();
    }
    (start.y.max(0)..=end.y.min(last)).map(|y| Cell::new(x, y)).collect()
}

/// Row of cells from `start` right to `end` at `y = center.y + side * r`.
///
/// Against the left wall the sweep starts above/below the center; against the
/// right wall it ends there. A row off the grid is empty.
fn horizontal_sweep(
    center: Cell,
    start: Cell,
    end: Cell,
    side: i32,
    r: i32,
    walls: Walls,
    dim: GridDim,
) -> Vec<Cell> {
    let y = center.y.saturating_add(side.saturating_mul(r));
    let beside = Cell::new(center.x, y);
    let start = if walls.left { beside } else { start };
    let end = if walls.right { beside } else { end };

    let last = dim.get() as i32 - 1;
    if !(0..=last).contains(&y) {
        return Vec::new();
    }
    (start.x.max(0)..=end.x.min(last)).map(|x| Cell::new(x, y)).collect()
}
