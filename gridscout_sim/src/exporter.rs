//! JSON exporter for run replays.
//!
//! Exports one frame per step so a run can be replayed or plotted outside
//! the simulator.

use crate::runner::ScenarioResult;
use crate::world::{StepReport, World};

use gridscout_env::Cell;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// A single frame of simulation data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimFrame {
    /// 1-based step number
    pub step: u64,

    /// Agent position after the step
    pub x: i32,
    pub y: i32,

    /// Decision kind (advance, backtrack, stuck, arrived)
    pub decision: String,

    /// Displacement applied this step
    pub dx: i32,
    pub dy: i32,

    /// Size of the known map after sensing
    pub known_cells: usize,

    /// Size of the blacklist after the step
    pub blacklist_len: usize,
}

impl SimFrame {
    /// Captures the state right after `report` was produced by `world`.
    pub fn from_step(world: &World, report: &StepReport) -> Self {
        let step = report.decision.step();
        Self {
            step: report.index,
            x: report.position.x,
            y: report.position.y,
            decision: report.decision.kind().to_string(),
            dx: step.dx,
            dy: step.dy,
            known_cells: world.known().len(),
            blacklist_len: world.blacklist().len(),
        }
    }
}

/// Complete simulation export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimExport {
    /// Scenario name
    pub scenario: String,

    /// Seed used
    pub seed: u64,

    /// Grid side length
    pub dim: usize,

    pub start: Cell,
    pub target: Cell,

    /// Ground truth render, one string per row
    pub ground_truth: Vec<String>,

    /// All frames
    pub frames: Vec<SimFrame>,

    /// Final results
    pub reached: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blacklist: Vec<Cell>,
}

impl SimExport {
    /// Creates a new export container for a freshly built world.
    pub fn new(scenario: &str, seed: u64, world: &World) -> Self {
        Self {
            scenario: scenario.to_string(),
            seed,
            dim: world.dim().get(),
            start: world.position(),
            target: world.target(),
            ground_truth: world
                .render_ground_truth()
                .lines()
                .skip(1)
                .map(str::to_string)
                .collect(),
            frames: Vec::new(),
            reached: false,
            outcome: None,
            blacklist: Vec::new(),
        }
    }

    /// Adds a frame.
    pub fn add_frame(&mut self, frame: SimFrame) {
        self.frames.push(frame);
    }

    /// Finalizes the export with the run result and the agent's final
    /// blacklist.
    pub fn finalize(&mut self, result: &ScenarioResult, blacklist: impl IntoIterator<Item = Cell>) {
        self.reached = result.passed();
        self.outcome = Some(result.outcome.name().to_string());
        self.blacklist = blacklist.into_iter().collect();
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
