//! Agent - position, sensing radius and dead-end memory.
//!
//! The agent owns only its own state. Knowledge lives in a [`KnownMap`] and
//! ground truth behind a [`Terrain`]; both are handed in per call so the
//! agent never reaches into the structure that owns them.

use crate::blacklist::Blacklist;
use crate::geometry;
use crate::known_map::KnownMap;
use crate::navigator::{Decision, Navigator};
use gridscout_env::{Cell, GridError, GridResult, Terrain};

/// A single exploring agent.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Current cell
    position: Cell,

    /// Largest ring radius sensed after each move
    fov: u32,

    /// Cells found to be dead ends
    blacklist: Blacklist,

    /// Every cell occupied so far, starting with the start cell
    trail: Vec<Cell>,

    navigator: Navigator,
}

impl Agent {
    /// Creates an agent at `start` sensing out to `fov`.
    ///
    /// # Errors
    /// `GridError::InvalidFov` when `fov` is zero.
    pub fn new(start: Cell, fov: u32) -> GridResult<Self> {
        if fov == 0 {
            return Err(GridError::InvalidFov(fov));
        }

        Ok(Self {
            position: start,
            fov,
            blacklist: Blacklist::new(),
            trail: vec![start],
            navigator: Navigator::new(),
        })
    }

    /// Senses every ring from 1 to `fov` around the current cell and records
    /// the results. Returns how many cells became known.
    pub fn look<T: Terrain + ?Sized>(&self, terrain: &T, known: &mut KnownMap) -> usize {
        let seen = geometry::field_of_view(known.dim(), self.position, self.fov);
        known.update(&seen, terrain)
    }

    /// Decides and applies one step toward `target`.
    ///
    /// A stuck or backtracking decision blacklists the cell the agent was
    /// standing on before it moves. Sensing is left to the caller.
    pub fn advance(&mut self, target: Cell, known: &KnownMap) -> Decision {
        let decision = self
            .navigator
            .decide(self.position, target, known, &self.blacklist);

        if decision.blacklists_position() {
            self.blacklist.insert(self.position);
        }

        let step = decision.step();
        if !step.is_stay() {
            self.position = self.position.offset(step);
            self.trail.push(self.position);
        }

        decision
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn fov(&self) -> u32 {
        self.fov
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Cells occupied so far, in order. Consecutive entries are neighbours.
    pub fn trail(&self) -> &[Cell] {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridscout_env::{CellState, GridDim};

    struct AllOpen(GridDim);

    impl Terrain for AllOpen {
        fn dim(&self) -> GridDim {
            self.0
        }

        fn is_open(&self, cell: Cell) -> bool {
            self.0.contains(cell)
        }
    }

    #[test]
    fn test_zero_fov_rejected() {
        assert_eq!(
            Agent::new(Cell::new(0, 0), 0).unwrap_err(),
            GridError::InvalidFov(0)
        );
    }

    #[test]
    fn test_look_grows_known_map() {
        let dim = GridDim::new(5).unwrap();
        let terrain = AllOpen(dim);
        let agent = Agent::new(Cell::new(2, 2), 1).unwrap();
        let mut known = KnownMap::seeded(dim, agent.position());

        let added = agent.look(&terrain, &mut known);

        assert_eq!(added, 8);
        assert_eq!(known.len(), 9);
        assert_eq!(known.lookup(Cell::new(3, 3)), CellState::Open);
        assert_eq!(known.lookup(Cell::new(4, 4)), CellState::Unknown);

        // Looking again from the same cell learns nothing new
        assert_eq!(agent.look(&terrain, &mut known), 0);
    }

    #[test]
    fn test_advance_moves_and_records_trail() {
        let dim = GridDim::new(5).unwrap();
        let terrain = AllOpen(dim);
        let mut agent = Agent::new(Cell::new(0, 0), 1).unwrap();
        let mut known = KnownMap::seeded(dim, agent.position());
        agent.look(&terrain, &mut known);

        let decision = agent.advance(Cell::new(4, 4), &known);

        assert!(matches!(decision, Decision::Advance(_)));
        assert_eq!(agent.position(), Cell::new(1, 1));
        assert_eq!(agent.trail(), &[Cell::new(0, 0), Cell::new(1, 1)]);
        assert!(agent.blacklist().is_empty());
    }

    #[test]
    fn test_stuck_agent_blacklists_and_stays() {
        let dim = GridDim::new(3).unwrap();
        let mut agent = Agent::new(Cell::new(0, 0), 1).unwrap();
        let known = KnownMap::seeded(dim, agent.position());

        // Never looked, so every neighbour is unknown
        let decision = agent.advance(Cell::new(2, 2), &known);

        assert_eq!(decision, Decision::Stuck);
        assert_eq!(agent.position(), Cell::new(0, 0));
        assert!(agent.blacklist().contains(Cell::new(0, 0)));
        assert_eq!(agent.trail().len(), 1);
    }
}
