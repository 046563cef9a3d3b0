//! Core types shared across the crate
//! This module contains pure data types with no game logic attached

use serde::{Deserialize, Serialize};

/// Default board edge length
pub const DEFAULT_GRID: i32 = 20;
/// Smallest playable board edge
pub const MIN_GRID: i32 = 4;
/// Largest accepted board edge
pub const MAX_GRID: i32 = 100;

/// Game timing constants
pub const BASE_TICK_MS: u64 = 200;
pub const COUNTDOWN_SECONDS: u8 = 3;

/// Seed length of a freshly started snake
pub const INITIAL_SNAKE_LEN: usize = 3;

/// A cell on the grid, 0-indexed. Signed so a candidate head can sit
/// out of bounds before the wall check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring cell one unit step away in `direction`.
    /// Up is row-decreasing.
    pub fn step(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as (row delta, col delta). Up decreases the row index.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Heading that moves `from` onto `to`, if the two cells are one
    /// unit step apart.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        match (to.row - from.row, to.col - from.col) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Difficulty picks the speed multiplier applied to the base tick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn speed_multiplier(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// What a single simulation step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Snake translated one cell, length unchanged
    Moved,
    /// Snake ate the coin and grew; carries the updated coin count
    Grew(u32),
    /// Snake hit something; the simulation is terminal
    Collision(Collision),
}

/// Normal terminal game events, not errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
    /// The snake filled the whole board; this is the win condition
    BoardFilled,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Pre-game delay; the payload is the seconds remaining
    Countdown(u8),
    Running,
    Paused,
    GameOver { score: u32, reason: GameOverReason },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_decreases_row() {
        assert_eq!(Position::new(5, 5).step(Direction::Up), Position::new(4, 5));
        assert_eq!(
            Position::new(5, 5).step(Direction::Down),
            Position::new(6, 5)
        );
        assert_eq!(
            Position::new(5, 5).step(Direction::Left),
            Position::new(5, 4)
        );
        assert_eq!(
            Position::new(5, 5).step(Direction::Right),
            Position::new(5, 6)
        );
    }

    #[test]
    fn test_opposites() {
        for d in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(d.is_opposite(d.opposite()));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_between_unit_steps() {
        let from = Position::new(3, 3);
        assert_eq!(
            Direction::between(from, Position::new(3, 4)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::between(from, Position::new(2, 3)),
            Some(Direction::Up)
        );
        assert_eq!(Direction::between(from, Position::new(3, 5)), None);
        assert_eq!(Direction::between(from, from), None);
    }

    #[test]
    fn test_speed_multipliers() {
        assert_eq!(Difficulty::Easy.speed_multiplier(), 1);
        assert_eq!(Difficulty::Medium.speed_multiplier(), 2);
        assert_eq!(Difficulty::Hard.speed_multiplier(), 3);
    }
}
