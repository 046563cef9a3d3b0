//! Snake simulation core.
//!
//! Two layers, leaf first: [`core::GridSimulation`] is the pure
//! state-transition engine (grid, snake body, coin, heading, score), and
//! [`session::GameSession`] wraps one simulation per play with the
//! idle/countdown/running/paused/game-over state machine, difficulty
//! timing and high-score bookkeeping. Rendering, input, persistence and
//! score submission stay behind the traits in [`services`]; an external
//! scheduler owns all timers and drives the session tick by tick.

pub mod core;
pub mod services;
pub mod session;
pub mod settings;
pub mod types;

pub use crate::core::{BoardSnapshot, GridSimulation, RandomSource, SessionRng, SimulationError};
pub use crate::services::{
    InMemoryScoreStore, LeaderboardError, LeaderboardService, NullRenderer, Renderer, ScoreStore,
};
pub use crate::session::GameSession;
pub use crate::settings::{SessionSettings, SettingsError, SettingsOutcome};
pub use crate::types::{
    Collision, Difficulty, Direction, GameOverReason, Position, SessionState, StepResult,
};
