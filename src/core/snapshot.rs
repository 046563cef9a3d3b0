//! Render-facing export of simulation state
//!
//! A renderer never touches the simulation directly; it receives this
//! snapshot after every successful step.

use serde::{Deserialize, Serialize};

use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Snake segments ordered tail first, head last
    pub segments: Vec<Position>,
    pub coin: Option<Position>,
    pub score: u32,
}

impl BoardSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.segments.last().copied()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.coin = None;
        self.score = 0;
    }
}
