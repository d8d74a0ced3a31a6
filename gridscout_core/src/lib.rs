//! GridScout Core - partial-knowledge grid exploration
//!
//! This library holds the two tightly coupled pieces of the explorer:
//! 1. **Geometry**: the square ring of cells at a Chebyshev radius, clipped
//!    at the grid walls (`geometry::ring`)
//! 2. **Navigation**: a greedy single-step decision over known-open
//!    neighbours with dead-end blacklisting and backtracking (`Navigator`)
//!
//! The `Agent` ties them together: it senses through a read-only `Terrain`,
//! accumulates a `KnownMap`, and advances one cell per call.

pub mod agent;
pub mod blacklist;
pub mod geometry;
pub mod known_map;
pub mod navigator;

// Re-export key types for convenience
pub use agent::Agent;
pub use blacklist::Blacklist;
pub use geometry::{field_of_view, ring, Walls};
pub use known_map::KnownMap;
pub use navigator::{Decision, Navigator};
