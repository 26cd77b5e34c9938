//! Game session lifecycle
//!
//! A [`Session`] owns the game state for one run, from `start` until the bird
//! crashes or the host calls `stop`. The host drives it with `tick` at the
//! configured rate and forwards jump presses; the session renders after every
//! running tick and calls the game-over callback exactly once.

use crate::config::{ConfigError, GameConfig};
use crate::renderer::{Surface, render};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

type GameOverCallback = Box<dyn FnMut()>;

pub struct Session {
    state: GameState,
    autopilot: bool,
    stopped: bool,
    on_game_over: Option<GameOverCallback>,
}

impl Session {
    /// Start a running session with the opening pipe pair already spawned
    pub fn start(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("Session started with seed: {}", seed);
        Ok(Self {
            state: GameState::new(config, seed),
            autopilot: false,
            stopped: false,
            on_game_over: None,
        })
    }

    /// Register the callback fired when the session ends by crashing
    pub fn on_game_over(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_game_over = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether ticks are still being processed
    pub fn is_running(&self) -> bool {
        !self.stopped && self.state.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    /// Flap. Takes effect on the bird immediately; further presses before the
    /// next tick just overwrite the velocity again.
    pub fn jump(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(bird) = self.state.bird_mut() {
            bird.jump();
        }
    }

    /// Advance one tick and, if still running, draw the result
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }

        // Jumps are applied to the bird as they are pressed
        let input = TickInput {
            jump: false,
            autopilot: self.autopilot,
        };
        let events = tick(&mut self.state, &input);

        if events.contains(&GameEvent::GameOver) {
            self.finish();
        } else {
            render(&self.state, surface);
        }
        events
    }

    /// Halt the session without a game over (e.g. host teardown)
    pub fn stop(&mut self) {
        if !self.stopped {
            log::info!("Session stopped at tick {}", self.state.time_ticks);
            self.stopped = true;
        }
    }

    fn finish(&mut self) {
        self.stopped = true;
        if let Some(mut callback) = self.on_game_over.take() {
            callback();
        }
    }
}
