//! Game session - lifecycle, timing policy and score bookkeeping
//!
//! Wraps one `GridSimulation` per play behind the state machine
//! `Idle -> Countdown -> Running <-> Paused`, `Running -> GameOver`,
//! `GameOver -> Idle`. The session never owns a timer: an external
//! scheduler calls `on_countdown_tick` once per second and
//! `on_game_tick` at `tick_interval()`. Ticks that arrive in the wrong
//! state are no-ops, so a stale scheduled tick can never corrupt a
//! replaced simulation.

use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::rng::RandomSource;
use crate::core::simulation::GridSimulation;
use crate::core::snapshot::BoardSnapshot;
use crate::services::{LeaderboardService, Renderer, ScoreStore};
use crate::settings::{SessionSettings, SettingsError, SettingsOutcome};
use crate::types::{
    Collision, Difficulty, Direction, GameOverReason, Position, SessionState, StepResult,
    BASE_TICK_MS, COUNTDOWN_SECONDS, INITIAL_SNAKE_LEN,
};

pub struct GameSession {
    settings: SessionSettings,
    /// Difficulty the current play started with; settings may drift away
    /// from it while paused
    active_difficulty: Difficulty,
    state: SessionState,
    simulation: Option<GridSimulation>,
    score: u32,
    /// Reused frame buffer handed to the renderer
    frame: BoardSnapshot,
    rng: Box<dyn RandomSource>,
    renderer: Box<dyn Renderer>,
    score_store: Box<dyn ScoreStore>,
    leaderboard: Option<Box<dyn LeaderboardService>>,
}

impl GameSession {
    pub fn new(
        settings: SessionSettings,
        renderer: Box<dyn Renderer>,
        score_store: Box<dyn ScoreStore>,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            active_difficulty: settings.difficulty,
            settings,
            state: SessionState::Idle,
            simulation: None,
            score: 0,
            frame: BoardSnapshot::default(),
            rng,
            renderer,
            score_store,
            leaderboard: None,
        })
    }

    pub fn with_leaderboard(mut self, leaderboard: Box<dyn LeaderboardService>) -> Self {
        self.leaderboard = Some(leaderboard);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn difficulty(&self) -> Difficulty {
        self.active_difficulty
    }

    /// Interval the external scheduler should drive `on_game_tick` at
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(BASE_TICK_MS / u64::from(self.active_difficulty.speed_multiplier()))
    }

    pub fn snapshot(&self) -> Option<BoardSnapshot> {
        self.simulation.as_ref().map(GridSimulation::snapshot)
    }

    /// Begin a fresh play. Valid from Idle or GameOver; every start goes
    /// through the countdown.
    pub fn start(&mut self, difficulty: Difficulty) -> bool {
        match self.state {
            SessionState::Idle | SessionState::GameOver { .. } => {}
            _ => return false,
        }

        self.settings.difficulty = difficulty;
        self.active_difficulty = difficulty;
        self.score = 0;
        self.simulation = Some(self.build_simulation());
        self.state = SessionState::Countdown(COUNTDOWN_SECONDS);
        info!(
            "session started ({:?}, {}x{})",
            difficulty, self.settings.width, self.settings.height
        );
        true
    }

    /// Driven once per second while counting down. Entering Running emits
    /// one frame so the renderer shows the board before the first tick.
    pub fn on_countdown_tick(&mut self) -> bool {
        let SessionState::Countdown(remaining) = self.state else {
            return false;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.state = SessionState::Running;
            debug!("countdown finished, ticking at {:?}", self.tick_interval());
            self.publish_frame();
        } else {
            self.state = SessionState::Countdown(remaining);
        }
        true
    }

    /// Advance the simulation by one tick. Returns true when the snake
    /// moved or grew; terminal ticks and out-of-state calls return false.
    pub fn on_game_tick(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }

        let simulation = self
            .simulation
            .as_mut()
            .expect("running session owns a simulation");

        match simulation.step(self.rng.as_mut()) {
            Ok(StepResult::Moved) => {
                self.publish_frame();
                true
            }
            Ok(StepResult::Grew(total)) => {
                self.score += 1;
                debug!("coin eaten, score {}", total);
                self.publish_frame();
                true
            }
            Ok(StepResult::Collision(Collision::Wall)) => {
                self.finish(GameOverReason::HitWall);
                false
            }
            Ok(StepResult::Collision(Collision::Body)) => {
                self.finish(GameOverReason::HitSelf);
                false
            }
            Err(_) => {
                // The step only fails when the snake fills the board;
                // the final coin still counts and the game is won.
                self.score += 1;
                self.finish(GameOverReason::BoardFilled);
                false
            }
        }
    }

    /// Running pauses in place; pausing mid-countdown cancels it and
    /// discards the prepared board (a paused countdown never resumes).
    pub fn pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                true
            }
            SessionState::Countdown(_) => {
                self.simulation = None;
                self.score = 0;
                self.state = SessionState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Running;
        self.publish_frame();
        true
    }

    /// Restart request: GameOver back to Idle, dropping the finished
    /// simulation. The next `start` builds everything fresh.
    pub fn reset(&mut self) -> bool {
        if !matches!(self.state, SessionState::GameOver { .. }) {
            return false;
        }
        self.simulation = None;
        self.score = 0;
        self.state = SessionState::Idle;
        true
    }

    /// Forwarded to the simulation while Running; silently ignored in
    /// every other state.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        match self.simulation.as_mut() {
            Some(simulation) => simulation.request_direction(direction),
            None => false,
        }
    }

    /// Reconfigure the next play. Only Idle and Paused sessions are
    /// editable. A difficulty differing from the one the current play
    /// started with is reported back; enforcing the restart is the
    /// caller's call.
    pub fn change_settings(
        &mut self,
        settings: SessionSettings,
    ) -> Result<SettingsOutcome, SettingsError> {
        if !matches!(self.state, SessionState::Idle | SessionState::Paused) {
            return Err(SettingsError::SettingsLocked);
        }
        settings.validate()?;

        let restart_required = self.state == SessionState::Paused
            && settings.difficulty != self.active_difficulty;
        self.settings = settings;

        if restart_required {
            Ok(SettingsOutcome::RestartRequired)
        } else {
            Ok(SettingsOutcome::Applied)
        }
    }

    /// Canonical board: three segments centered on the middle row heading
    /// Right, coin on a uniformly random free cell.
    fn build_simulation(&mut self) -> GridSimulation {
        let row = self.settings.height / 2;
        let head_col = self.settings.width / 2;
        let snake: Vec<Position> = (0..INITIAL_SNAKE_LEN)
            .map(|i| {
                let offset = (INITIAL_SNAKE_LEN - 1 - i) as i32;
                Position::new(row, head_col - offset)
            })
            .collect();

        let occupied: HashSet<Position> = snake.iter().copied().collect();
        let free: Vec<Position> = (0..self.settings.height)
            .flat_map(|r| (0..self.settings.width).map(move |c| Position::new(r, c)))
            .filter(|cell| !occupied.contains(cell))
            .collect();
        let coin = free[self.rng.uniform(free.len())];

        GridSimulation::new(self.settings.width, self.settings.height, &snake, coin)
            .expect("validated settings always yield a legal board")
    }

    #[cfg(test)]
    fn inject_simulation(&mut self, simulation: GridSimulation) {
        self.simulation = Some(simulation);
        self.state = SessionState::Running;
    }

    fn publish_frame(&mut self) {
        if let Some(simulation) = self.simulation.as_ref() {
            simulation.snapshot_into(&mut self.frame);
        }
        self.renderer.on_state_changed(&self.frame);
    }

    fn finish(&mut self, reason: GameOverReason) {
        let final_score = self.score;
        self.state = SessionState::GameOver {
            score: final_score,
            reason,
        };
        info!("game over ({:?}) with score {}", reason, final_score);

        if final_score > self.score_store.high_score() {
            self.score_store.set_high_score(final_score);
            info!("new high score {}", final_score);
        }

        if self.settings.leaderboard_enabled {
            if let Some(leaderboard) = self.leaderboard.as_mut() {
                if let Err(err) = leaderboard.submit(final_score) {
                    warn!("leaderboard submit failed: {}", err);
                }
            }
        }
    }
}
