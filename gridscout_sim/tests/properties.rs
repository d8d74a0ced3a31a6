//! Property tests for ring geometry, knowledge growth and determinism.

use gridscout_core::{ring, Agent, KnownMap};
use gridscout_env::{Cell, CellState, GridDim};
use gridscout_sim::{GroundTruthGrid, SimConfig, World};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// (dim, center) with the center inside the grid.
fn grid_and_center() -> impl Strategy<Value = (usize, Cell)> {
    (1usize..24).prop_flat_map(|n| {
        let max = n as i32;
        (Just(n), (0..max, 0..max).prop_map(|(x, y)| Cell::new(x, y)))
    })
}

/// Every in-bounds cell at Chebyshev distance exactly `radius`.
fn brute_force_ring(dim: GridDim, center: Cell, radius: u32) -> BTreeSet<Cell> {
    dim.cells()
        .filter(|cell| cell.chebyshev(center) == radius)
        .collect()
}

proptest! {
    #[test]
    fn ring_matches_clipped_square((n, center) in grid_and_center(), radius in 1u32..8) {
        let dim = GridDim::new(n).unwrap();
        prop_assert_eq!(ring(dim, center, radius), brute_force_ring(dim, center, radius));
    }

    #[test]
    fn interior_ring_has_eight_r_cells(n in 3usize..30, radius in 1u32..6, fx in 0.0f64..1.0, fy in 0.0f64..1.0) {
        let r = radius as i32;
        let span = n as i32 - 1 - 2 * r;
        prop_assume!(span > 1);

        // Strictly interior: radius < x, y < n - 1 - radius
        let pick = |f: f64| r + 1 + ((f * (span - 1) as f64) as i32).min(span - 2);
        let center = Cell::new(pick(fx), pick(fy));
        let dim = GridDim::new(n).unwrap();
        let cells = ring(dim, center, radius);

        prop_assert_eq!(cells.len(), 8 * radius as usize);
        for cell in &cells {
            prop_assert_eq!(cell.chebyshev(center), radius);
        }
    }

    #[test]
    fn ring_never_leaves_grid((n, center) in grid_and_center(), radius in 1u32..30) {
        let dim = GridDim::new(n).unwrap();
        for cell in ring(dim, center, radius) {
            prop_assert!(dim.contains(cell));
            prop_assert!(dim.flatten(cell).unwrap() < dim.cell_count());
        }
    }

    #[test]
    fn flatten_round_trip(n in 1usize..64, seed in any::<u64>()) {
        let dim = GridDim::new(n).unwrap();
        let index = (seed % dim.cell_count() as u64) as usize;

        let cell = dim.unflatten(index).unwrap();
        prop_assert_eq!(dim.flatten(cell), Some(index));
        prop_assert_eq!(dim.unflatten(dim.flatten(cell).unwrap()), Some(cell));
    }

    #[test]
    fn knowledge_and_blacklist_only_grow(seed in any::<u64>(), n in 2usize..16, fov in 1u32..4, openness in 0.3f64..1.0) {
        let config = SimConfig { seed, dim: n, fov, openness, ..Default::default() };
        let mut world = World::new(&config).unwrap();

        let mut seen: Vec<(Cell, CellState)> = world.known().iter().collect();
        let mut blacklisted: Vec<Cell> = world.blacklist().iter().collect();

        for _ in 0..(4 * n) {
            if world.reached_target() {
                break;
            }
            world.step();

            // Every earlier entry is still there with the same value
            for (cell, state) in &seen {
                prop_assert_eq!(world.known().lookup(*cell), *state);
            }
            for cell in &blacklisted {
                prop_assert!(world.blacklist().contains(*cell));
            }

            // Blacklisted cells were all occupied at some point
            for cell in world.blacklist().iter() {
                prop_assert!(world.agent().trail().contains(&cell));
            }

            // The agent only stands on cells it knows are open
            prop_assert_eq!(world.known().lookup(world.position()), CellState::Open);

            seen = world.known().iter().collect();
            blacklisted = world.blacklist().iter().collect();
        }
    }

    #[test]
    fn runs_are_deterministic(seed in any::<u64>(), n in 2usize..16, fov in 1u32..3) {
        let config = SimConfig { seed, dim: n, fov, openness: 0.65, ..Default::default() };
        let mut a = World::new(&config).unwrap();
        let mut b = World::new(&config).unwrap();

        for _ in 0..(3 * n) {
            prop_assert_eq!(a.step(), b.step());
        }
        prop_assert_eq!(a.render_known_map(), b.render_known_map());
    }

    #[test]
    fn look_is_monotone(seed in any::<u64>(), n in 1usize..12, fov in 1u32..5) {
        let dim = GridDim::new(n).unwrap();
        let grid = GroundTruthGrid::generate(dim, 0.5, Cell::new(0, 0), dim.corner(), seed).unwrap();
        let agent = Agent::new(Cell::new(0, 0), fov).unwrap();
        let mut known = KnownMap::seeded(dim, agent.position());

        let before = known.len();
        let added = agent.look(&grid, &mut known);
        prop_assert_eq!(known.len(), before + added);
        prop_assert_eq!(agent.look(&grid, &mut known), 0);
    }
}
