//! Grid simulation - pure state-transition engine for one board
//!
//! Owns the snake body, coin and heading, and advances exactly one tick
//! per `step` call. No timers, no rendering, no I/O; the session layer
//! schedules ticks and forwards state to collaborators.
//!
//! Conventions: positions are (row, col) with Up row-decreasing. The
//! body is ordered tail first, head last; the neck is the segment next
//! to the head and is what the reversal guard protects.

use std::collections::{HashSet, VecDeque};

use thiserror::Error;

use crate::core::rng::RandomSource;
use crate::core::snapshot::BoardSnapshot;
use crate::types::{Collision, Direction, Position, StepResult, MIN_GRID};

/// Errors raised when building or advancing a simulation.
///
/// Collisions are not errors; they come back as `StepResult` values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("grid {width}x{height} is too small to play (minimum {MIN_GRID}x{MIN_GRID})")]
    GridTooSmall { width: i32, height: i32 },
    #[error("initial snake needs at least 2 segments, got {0}")]
    SnakeTooShort(usize),
    #[error("initial snake segments overlap at ({},{})", .0.row, .0.col)]
    OverlappingSegments(Position),
    #[error("initial coin at ({},{}) sits on the snake", .0.row, .0.col)]
    CoinOnSnake(Position),
    #[error("no free cell left for the coin")]
    NoValidCoinPosition,
}

/// One snake, one coin, one board.
#[derive(Debug, Clone)]
pub struct GridSimulation {
    width: i32,
    height: i32,
    /// Tail at the front, head at the back
    body: VecDeque<Position>,
    /// Occupancy index kept in lockstep with `body`
    occupied: HashSet<Position>,
    coin: Option<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Coins eaten so far
    score: u32,
}

impl GridSimulation {
    /// Build a simulation from an explicit seed layout.
    ///
    /// Segment adjacency is guaranteed by construction and not checked
    /// here. The initial heading follows the neck-to-head axis.
    pub fn new(
        width: i32,
        height: i32,
        initial_snake: &[Position],
        initial_coin: Position,
    ) -> Result<Self, SimulationError> {
        if width < MIN_GRID || height < MIN_GRID {
            return Err(SimulationError::GridTooSmall { width, height });
        }
        if initial_snake.len() < 2 {
            return Err(SimulationError::SnakeTooShort(initial_snake.len()));
        }

        let mut occupied = HashSet::with_capacity(initial_snake.len());
        for &segment in initial_snake {
            if !occupied.insert(segment) {
                return Err(SimulationError::OverlappingSegments(segment));
            }
        }
        if occupied.contains(&initial_coin) {
            return Err(SimulationError::CoinOnSnake(initial_coin));
        }

        let body: VecDeque<Position> = initial_snake.iter().copied().collect();
        let head = body[body.len() - 1];
        let neck = body[body.len() - 2];
        let direction = Direction::between(neck, head).unwrap_or(Direction::Right);

        Ok(Self {
            width,
            height,
            body,
            occupied,
            coin: Some(initial_coin),
            direction,
            pending_direction: None,
            score: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Segments ordered tail first, head last
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> Position {
        *self.body.back().expect("snake keeps at least 2 segments")
    }

    /// Segment adjacent to the head
    pub fn neck(&self) -> Position {
        self.body[self.body.len() - 2]
    }

    pub fn tail(&self) -> Position {
        *self.body.front().expect("snake keeps at least 2 segments")
    }

    pub fn coin(&self) -> Option<Position> {
        self.coin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Coins eaten so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Buffer a heading change for the next step, last valid request wins.
    ///
    /// The request is dropped (returning `false`) when it reverses the
    /// current heading straight onto the neck, which would otherwise turn
    /// a double tap into an instant self collision. The guard compares
    /// against the current heading and neck, never a still-pending one.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) && self.head().step(direction) == self.neck() {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Advance exactly one tick.
    ///
    /// A collided simulation is inert: the state is left untouched and
    /// repeated calls report the same collision. The only error is
    /// `NoValidCoinPosition` when the snake has filled the board; the
    /// growth that filled it stands, and the caller decides what the win
    /// looks like.
    pub fn step(&mut self, rng: &mut dyn RandomSource) -> Result<StepResult, SimulationError> {
        if let Some(pending) = self.pending_direction.take() {
            self.direction = pending;
        }

        let candidate = self.head().step(self.direction);

        if !self.in_bounds(candidate) {
            return Ok(StepResult::Collision(Collision::Wall));
        }
        // Tail counts too: the tail cell is only freed on a plain move.
        if self.occupied.contains(&candidate) {
            return Ok(StepResult::Collision(Collision::Body));
        }

        if self.coin == Some(candidate) {
            self.body.push_back(candidate);
            self.occupied.insert(candidate);
            self.score += 1;

            match self.random_free_cell(rng) {
                Some(position) => {
                    self.coin = Some(position);
                    Ok(StepResult::Grew(self.score))
                }
                None => {
                    self.coin = None;
                    Err(SimulationError::NoValidCoinPosition)
                }
            }
        } else {
            self.body.push_back(candidate);
            self.occupied.insert(candidate);
            let tail = self
                .body
                .pop_front()
                .expect("snake keeps at least 2 segments");
            self.occupied.remove(&tail);
            Ok(StepResult::Moved)
        }
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.segments.clear();
        out.segments.extend(self.segments());
        out.coin = self.coin;
        out.score = self.score;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut out = BoardSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn in_bounds(&self, position: Position) -> bool {
        (0..self.height).contains(&position.row) && (0..self.width).contains(&position.col)
    }

    /// Uniform pick over every cell the snake does not occupy.
    fn random_free_cell(&self, rng: &mut dyn RandomSource) -> Option<Position> {
        let free: Vec<Position> = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Position::new(row, col)))
            .filter(|cell| !self.occupied.contains(cell))
            .collect();
        if free.is_empty() {
            None
        } else {
            Some(free[rng.uniform(free.len())])
        }
    }
}
