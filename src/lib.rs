//! Flappy Canvas - a Flappy Bird style game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird, pipes, collisions, tick)
//! - `session`: Session lifecycle and game-over notification
//! - `renderer`: Drawing surface abstraction and scene rendering
//! - `platform`: Input mapping and fixed-rate tick clock
//! - `config`: Tunable constants

pub mod config;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::Session;

/// Game configuration defaults
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 144;
    /// Maximum ticks per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 120.0;
    pub const MIN_PIPE_HEIGHT: f32 = 40.0;
    pub const PIPE_SPEED: f32 = 1.0;
    pub const SPAWN_INTERVAL_TICKS: u64 = 320;

    /// Bird defaults
    pub const BIRD_X: f32 = 150.0;
    pub const BIRD_START_Y: f32 = 150.0;
    pub const BIRD_RADIUS: f32 = 15.0;
    pub const GRAVITY: f32 = 0.1;
    pub const JUMP_VELOCITY: f32 = -4.0;
}
