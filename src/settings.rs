//! Session configuration
//!
//! Everything that shapes the next `start`: board extent, difficulty and
//! the cosmetic/service toggles the surrounding UI owns. Settings are
//! explicit session state, never process-wide flags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Difficulty, DEFAULT_GRID, MAX_GRID, MIN_GRID};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("grid width must be between {MIN_GRID} and {MAX_GRID}, got {0}")]
    WidthOutOfRange(i32),
    #[error("grid height must be between {MIN_GRID} and {MAX_GRID}, got {0}")]
    HeightOutOfRange(i32),
    #[error("settings can only change while idle or paused")]
    SettingsLocked,
}

/// Outcome of a settings change accepted by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOutcome {
    Applied,
    /// Difficulty differs from the one the current session began with;
    /// the caller decides whether to force a restart.
    RestartRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub width: i32,
    pub height: i32,
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    /// Whether game-over scores go to the leaderboard collaborator
    pub leaderboard_enabled: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID,
            height: DEFAULT_GRID,
            difficulty: Difficulty::Easy,
            sound_enabled: true,
            leaderboard_enabled: true,
        }
    }
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_GRID..=MAX_GRID).contains(&self.width) {
            return Err(SettingsError::WidthOutOfRange(self.width));
        }
        if !(MIN_GRID..=MAX_GRID).contains(&self.height) {
            return Err(SettingsError::HeightOutOfRange(self.height));
        }
        Ok(())
    }
}
