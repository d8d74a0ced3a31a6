//! World - the simulation container.
//!
//! Owns the ground truth, the agent's knowledge, the agent itself and the
//! target, and exposes the step/query surface a driver loop needs.

use crate::oracle::GroundTruthGrid;
use crate::visualizer;

use gridscout_core::{Agent, Blacklist, Decision, KnownMap};
use gridscout_env::{Cell, GridDim, GridError, GridResult, Terrain};
use tracing::{debug, info};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Master seed for grid generation
    pub seed: u64,

    /// Grid side length
    pub dim: usize,

    /// Agent start cell
    pub start: Cell,

    /// Target cell (None = bottom-right corner)
    pub target: Option<Cell>,

    /// Field-of-view radius
    pub fov: u32,

    /// Probability that a generated cell is open
    pub openness: f64,

    /// Step budget for a driver loop
    pub max_steps: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dim: 15,
            start: Cell::new(0, 0),
            target: None,
            fov: 1,
            openness: 0.75,
            max_steps: 10_000,
        }
    }
}

impl SimConfig {
    /// Checks every parameter, failing fast on the first bad one.
    pub fn validate(&self) -> GridResult<GridDim> {
        let dim = GridDim::new(self.dim)?;
        if self.fov == 0 {
            return Err(GridError::InvalidFov(self.fov));
        }
        if !(0.0..=1.0).contains(&self.openness) {
            return Err(GridError::InvalidOpenness(self.openness));
        }
        dim.check(self.start)?;
        dim.check(self.target_cell(dim))?;
        Ok(dim)
    }

    /// The configured target, or the bottom-right corner.
    pub fn target_cell(&self, dim: GridDim) -> Cell {
        self.target.unwrap_or_else(|| dim.corner())
    }
}

/// What happened during one call to [`World::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based step number
    pub index: u64,

    /// The navigation decision taken
    pub decision: Decision,

    /// Agent position after the step
    pub position: Cell,

    /// Cells that became known by the look after the move
    pub newly_known: usize,

    /// True if this step added the agent's previous cell to the blacklist
    pub newly_blacklisted: bool,
}

impl StepReport {
    /// True when the agent is stuck on a cell it had already blacklisted.
    ///
    /// Nothing changes after such a step (no move, nothing new sensed, no new
    /// blacklist entry) so every later step repeats it exactly.
    pub fn is_stalled(&self) -> bool {
        self.decision == Decision::Stuck && !self.newly_blacklisted
    }
}

/// The World - ground truth plus one exploring agent.
pub struct World {
    /// Immutable ground truth
    grid: GroundTruthGrid,

    /// The agent's partial knowledge
    known: KnownMap,

    /// The explorer
    agent: Agent,

    /// Fixed destination
    target: Cell,

    /// Steps taken since construction or the last reset
    steps: u64,
}

impl World {
    /// Generates a grid from `config` and places the agent.
    pub fn new(config: &SimConfig) -> GridResult<Self> {
        let dim = config.validate()?;
        let target = config.target_cell(dim);
        let grid = GroundTruthGrid::generate(dim, config.openness, config.start, target, config.seed)?;

        info!(
            "Generated {} world (seed={}, open={:.0}%)",
            dim,
            config.seed,
            grid.open_ratio() * 100.0
        );

        Self::with_grid(grid, config.start, target, config.fov)
    }

    /// Places an agent on an existing grid.
    ///
    /// Start and target are forced open, matching generated grids.
    pub fn with_grid(mut grid: GroundTruthGrid, start: Cell, target: Cell, fov: u32) -> GridResult<Self> {
        let dim = grid.dim();
        dim.check(start)?;
        dim.check(target)?;
        grid.force_open(start);
        grid.force_open(target);

        let agent = Agent::new(start, fov)?;
        let mut world = Self {
            known: KnownMap::seeded(dim, start),
            grid,
            agent,
            target,
            steps: 0,
        };
        world.agent.look(&world.grid, &mut world.known);
        Ok(world)
    }

    /// Replaces the agent and wipes its knowledge. The grid is kept as is, so
    /// the new start must already be open.
    pub fn reset(&mut self, start: Cell, fov: u32) -> GridResult<()> {
        let dim = self.grid.dim();
        dim.check(start)?;
        if !self.grid.is_open(start) {
            return Err(GridError::ClosedCell(start));
        }

        self.agent = Agent::new(start, fov)?;
        self.known = KnownMap::seeded(dim, start);
        self.agent.look(&self.grid, &mut self.known);
        self.steps = 0;

        debug!("World reset: start={} fov={}", start, fov);
        Ok(())
    }

    /// Moves the agent one step toward the target, then senses.
    pub fn step(&mut self) -> StepReport {
        let blacklisted_before = self.agent.blacklist().len();
        let decision = self.agent.advance(self.target, &self.known);
        let newly_known = self.agent.look(&self.grid, &mut self.known);
        self.steps += 1;

        let report = StepReport {
            index: self.steps,
            decision,
            position: self.agent.position(),
            newly_known,
            newly_blacklisted: self.agent.blacklist().len() > blacklisted_before,
        };

        debug!(
            "step {}: {} -> {} (known +{}, blacklist {})",
            report.index,
            decision,
            report.position,
            newly_known,
            self.agent.blacklist().len()
        );
        report
    }

    pub fn reached_target(&self) -> bool {
        self.agent.position() == self.target
    }

    /// Ground truth as text, `0` open and `1` closed.
    pub fn render_ground_truth(&self) -> String {
        visualizer::render_ground_truth(&self.grid)
    }

    /// The agent's knowledge as text, with `?` unknown, `R` agent, `T` target.
    pub fn render_known_map(&self) -> String {
        visualizer::render_known_map(&self.known, self.agent.position(), self.target)
    }

    pub fn grid(&self) -> &GroundTruthGrid {
        &self.grid
    }

    pub fn known(&self) -> &KnownMap {
        &self.known
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn blacklist(&self) -> &Blacklist {
        self.agent.blacklist()
    }

    pub fn target(&self) -> Cell {
        self.target
    }

    pub fn position(&self) -> Cell {
        self.agent.position()
    }

    /// Returns the number of steps taken since construction or reset.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn dim(&self) -> GridDim {
        self.grid.dim()
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_ground_truth())
    }
}
