//! GridScout Environment Abstraction Layer
//!
//! This crate holds the vocabulary shared by the navigation core and the
//! simulation harness:
//! - Cells, moves and the N x N grid dimension (flat index bijection)
//! - The tri-state `CellState` used for partial knowledge
//! - The read-only `Terrain` trait the agent senses through
//!
//! Nothing here knows how a grid is generated or how an agent decides; the
//! dimension is passed explicitly rather than stored globally.
//!
//! # Example
//!
//! ```
//! use gridscout_env::{Cell, GridDim};
//!
//! let dim = GridDim::new(5).unwrap();
//! let flat = dim.flatten(Cell::new(3, 3)).unwrap();
//! assert_eq!(flat, 18);
//! assert_eq!(dim.unflatten(flat), Some(Cell::new(3, 3)));
//! ```

mod error;
mod terrain;
mod types;

pub use error::{GridError, GridResult};
pub use terrain::Terrain;
pub use types::{Cell, CellState, GridDim, Move};
