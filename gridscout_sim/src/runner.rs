//! Scenario runner - the step-capped driver loop.

use crate::exporter::{SimExport, SimFrame};
use crate::scenarios::ScenarioId;
use crate::world::{SimConfig, StepReport, World};

use gridscout_env::{Cell, GridResult};
use tracing::{debug, info, warn};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Agent stands on the target
    Reached,

    /// Agent is stuck on a cell it already blacklisted; no later step can
    /// change anything
    Stalled,

    /// Step budget ran out while the agent was still moving
    StepCapExhausted,
}

impl Outcome {
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::Reached => "reached",
            Outcome::Stalled => "stalled",
            Outcome::StepCapExhausted => "step_cap_exhausted",
        }
    }
}

/// Results from running a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Scenario that was run
    pub scenario: ScenarioId,

    /// Seed used
    pub seed: u64,

    /// How the run ended
    pub outcome: Outcome,

    /// Total steps executed
    pub steps: u64,

    /// Dead ends recorded by the agent
    pub blacklist_len: usize,

    /// Cells the agent learned about
    pub known_cells: usize,

    /// Every cell the agent occupied, in order
    pub trail: Vec<Cell>,

    /// Failure message if any
    pub failure_reason: Option<String>,
}

impl ScenarioResult {
    /// True if the agent reached its target.
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Reached
    }
}

/// Runs exploration scenarios.
pub struct ScenarioRunner {
    config: SimConfig,
}

impl ScenarioRunner {
    /// Creates a new scenario runner with default settings and the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            config: SimConfig {
                seed,
                ..Default::default()
            },
        }
    }

    /// Creates a runner from a full configuration.
    pub fn from_config(config: SimConfig) -> Self {
        Self { config }
    }

    /// Sets the step budget.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.config.max_steps = max_steps;
        self
    }

    /// Sets the field-of-view radius.
    pub fn with_fov(mut self, fov: u32) -> Self {
        self.config.fov = fov;
        self
    }

    /// Sets the grid dimension for random scenarios.
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.config.dim = dim;
        self
    }

    /// Sets the open probability for random scenarios.
    pub fn with_openness(mut self, openness: f64) -> Self {
        self.config.openness = openness;
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Runs a scenario and returns the result.
    pub fn run(&self, scenario: ScenarioId) -> GridResult<ScenarioResult> {
        self.run_to_end(scenario).map(|(result, _)| result)
    }

    /// Runs a scenario and also hands back the world in its final state.
    pub fn run_to_end(&self, scenario: ScenarioId) -> GridResult<(ScenarioResult, World)> {
        self.run_traced(scenario, |_, _| {})
    }

    /// Runs a scenario, handing the world to `on_step` after every step.
    pub fn run_traced<F>(&self, scenario: ScenarioId, on_step: F) -> GridResult<(ScenarioResult, World)>
    where
        F: FnMut(&World, &StepReport),
    {
        let mut world = scenario.build(&self.config)?;
        let result = self.drive(scenario, &mut world, on_step);
        Ok((result, world))
    }

    /// Runs a scenario, recording a frame per step into a JSON export.
    pub fn run_recorded(&self, scenario: ScenarioId) -> GridResult<(ScenarioResult, SimExport)> {
        let mut world = scenario.build(&self.config)?;
        let mut export = SimExport::new(scenario.name(), self.config.seed, &world);

        let result = self.drive(scenario, &mut world, |world, report| {
            export.add_frame(SimFrame::from_step(world, report));
        });

        export.finalize(&result, world.blacklist().iter());
        Ok((result, export))
    }

    /// Steps `world` until the target is reached, the agent stalls, or the
    /// budget runs out.
    fn drive<F>(&self, scenario: ScenarioId, world: &mut World, mut on_step: F) -> ScenarioResult
    where
        F: FnMut(&World, &StepReport),
    {
        info!(
            "Starting scenario: {} (seed={}, target={})",
            scenario.name(),
            self.config.seed,
            world.target()
        );

        let outcome = loop {
            if world.reached_target() {
                break Outcome::Reached;
            }
            if world.step_count() >= self.config.max_steps {
                warn!("Step cap of {} exhausted", self.config.max_steps);
                break Outcome::StepCapExhausted;
            }

            let report = world.step();
            on_step(&*world, &report);

            if report.is_stalled() {
                debug!("Agent stalled at {} after {} steps", report.position, report.index);
                break Outcome::Stalled;
            }
        };

        let failure_reason = match outcome {
            Outcome::Reached => None,
            Outcome::Stalled => Some(format!(
                "no path found: agent stuck at {} with {} blacklisted cells",
                world.position(),
                world.blacklist().len()
            )),
            Outcome::StepCapExhausted => Some(format!(
                "no path found within {} steps",
                self.config.max_steps
            )),
        };

        ScenarioResult {
            scenario,
            seed: self.config.seed,
            outcome,
            steps: world.step_count(),
            blacklist_len: world.blacklist().len(),
            known_cells: world.known().len(),
            trail: world.agent().trail().to_vec(),
            failure_reason,
        }
    }
}
