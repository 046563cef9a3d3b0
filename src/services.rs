//! Collaborator seams
//!
//! The session calls out through these traits instead of owning any
//! rendering, persistence or network concern. Implementations run on the
//! same logical thread as the session.

use thiserror::Error;

use crate::core::snapshot::BoardSnapshot;

/// Receives the effective board state after every successful step.
pub trait Renderer {
    fn on_state_changed(&mut self, snapshot: &BoardSnapshot);
}

/// Drops every frame. Useful for headless drivers and tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_state_changed(&mut self, _snapshot: &BoardSnapshot) {}
}

/// Persists the single high-score integer. The session reads and writes
/// it only at game over.
pub trait ScoreStore {
    fn high_score(&self) -> u32;
    fn set_high_score(&mut self, score: u32);
}

/// Process-local score store with no persistence.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    high_score: u32,
}

impl InMemoryScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, score: u32) {
        self.high_score = score;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("no authenticated player")]
    NotAuthenticated,
    #[error("leaderboard service unavailable: {0}")]
    Unavailable(String),
}

/// Opaque submit-score call. Failure is surfaced to the caller and never
/// ends the session; the local high score has already been stored.
pub trait LeaderboardService {
    fn submit(&mut self, score: u32) -> Result<(), LeaderboardError>;
}
