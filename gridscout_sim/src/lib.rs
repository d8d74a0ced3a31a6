//! GridScout Deterministic Simulation Harness
//!
//! This crate provides the world an agent explores: a ground-truth grid it
//! cannot see, the knowledge it builds up, and a driver that steps it toward
//! a target.
//!
//! # Determinism
//!
//! The only randomness is grid generation, derived from a single 64-bit
//! seed. Given the seed (or a hand-built layout), start, target and field of
//! view, every run replays step for step.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                      World                       │
//! │                                                  │
//! │  ┌─────────────────┐  look   ┌────────────────┐  │
//! │  │ GroundTruthGrid │────────►│    KnownMap    │  │
//! │  │   (Terrain)     │         │ ? / open / shut│  │
//! │  └─────────────────┘         └───────┬────────┘  │
//! │                                      │ decide    │
//! │                              ┌───────▼────────┐  │
//! │                              │     Agent      │  │
//! │                              │  + Blacklist   │  │
//! │                              └────────────────┘  │
//! └──────────────────────────────────────────────────┘
//!            ▲  step() / reached_target()
//!            │
//!     ScenarioRunner (step cap, stall detection)
//! ```
//!
//! # Usage
//!
//! ```
//! use gridscout_sim::{ScenarioRunner, scenarios::ScenarioId};
//!
//! let result = ScenarioRunner::new(42).run(ScenarioId::OpenField).unwrap();
//! assert!(result.passed());
//! assert_eq!(result.steps, 4);
//! ```

mod error;
mod exporter;
mod oracle;
mod runner;
mod world;
pub mod scenarios;
pub mod visualizer;

pub use error::{SimError, SimResult};
pub use exporter::{SimExport, SimFrame};
pub use oracle::GroundTruthGrid;
pub use runner::{Outcome, ScenarioResult, ScenarioRunner};
pub use world::{SimConfig, StepReport, World};
