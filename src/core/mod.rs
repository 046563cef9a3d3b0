//! Core module - pure simulation logic with no timing or I/O
//!
//! Everything here is deterministic given a `RandomSource`; scheduling
//! and collaborator wiring live in the session layer.

pub mod rng;
pub mod simulation;
pub mod snapshot;

// Re-export commonly used types
pub use rng::{RandomSource, SessionRng};
pub use simulation::{GridSimulation, SimulationError};
pub use snapshot::BoardSnapshot;
