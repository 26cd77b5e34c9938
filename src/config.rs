//! Game configuration
//!
//! Every tunable constant of a session. The web build reads an optional JSON
//! override from LocalStorage so the field can be tweaked without a rebuild.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,
    #[error("gap {gap} leaves no room for two {min_height} pipes in a {height} field")]
    GapTooLarge { gap: f32, min_height: f32, height: f32 },
    #[error("bird x {x} is outside the {width} wide field")]
    BirdOffField { x: f32, width: f32 },
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Pipes ===
    pub pipe_width: f32,
    /// Vertical opening between the two pipes of a pair
    pub gap: f32,
    pub min_pipe_height: f32,
    /// Horizontal distance a pipe moves per tick
    pub pipe_speed: f32,
    /// Ticks between pair spawns
    pub spawn_interval: u64,

    // === Bird ===
    pub bird_x: f32,
    pub bird_start_y: f32,
    pub bird_radius: f32,
    /// Added to the bird's velocity every tick
    pub gravity: f32,
    /// Velocity a jump overwrites the current one with
    pub jump_velocity: f32,

    // === Timing ===
    pub tick_rate: u32,

    // === Colours (CSS) ===
    pub bird_color: String,
    pub pipe_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            pipe_width: PIPE_WIDTH,
            gap: PIPE_GAP,
            min_pipe_height: MIN_PIPE_HEIGHT,
            pipe_speed: PIPE_SPEED,
            spawn_interval: SPAWN_INTERVAL_TICKS,

            bird_x: BIRD_X,
            bird_start_y: BIRD_START_Y,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            tick_rate: TICK_RATE,

            bird_color: "red".to_string(),
            pipe_color: "#000".to_string(),
        }
    }
}

impl GameConfig {
    /// Tallest pipe the generator may draw when a pair leaves `gap` open
    pub fn max_pipe_height(&self, gap: f32) -> f32 {
        self.field_height - gap - self.min_pipe_height
    }

    /// Check that a session can actually be played with these values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("pipe_width", self.pipe_width),
            ("gap", self.gap),
            ("pipe_speed", self.pipe_speed),
            ("bird_radius", self.bird_radius),
            ("tick_rate", self.tick_rate as f32),
        ];
        for (field, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }

        if self.min_pipe_height < 0.0 || self.max_pipe_height(self.gap) < self.min_pipe_height {
            return Err(ConfigError::GapTooLarge {
                gap: self.gap,
                min_height: self.min_pipe_height,
                height: self.field_height,
            });
        }

        if self.bird_x < 0.0 || self.bird_x > self.field_width {
            return Err(ConfigError::BirdOffField {
                x: self.bird_x,
                width: self.field_width,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file (native runner)
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "flappy_canvas_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_pipe_height(config.gap), 340.0);
        assert_eq!(config.max_pipe_height(300.0), 160.0);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.2, "gap": 150 }"#).unwrap();
        assert_eq!(config.gravity, 0.2);
        assert_eq!(config.gap, 150.0);
        assert_eq!(config.field_height, 500.0);
        assert_eq!(config.spawn_interval, 320);
    }

    #[test]
    fn test_rejects_oversized_gap() {
        let err = GameConfig::from_json(r#"{ "gap": 450 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::GapTooLarge { .. }));
    }

    #[test]
    fn test_rejects_zero_spawn_interval() {
        let err = GameConfig::from_json(r#"{ "spawn_interval": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroSpawnInterval));
    }

    #[test]
    fn test_rejects_non_positive_dimension() {
        let config = GameConfig {
            pipe_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "pipe_width", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GameConfig::from_file("/nonexistent/flappy.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
