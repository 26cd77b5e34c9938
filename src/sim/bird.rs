//! The player-controlled bird
//!
//! The bird never moves horizontally; the pipes scroll past it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A falling body under constant gravity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical velocity (units/tick, positive is down)
    pub velocity: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub radius: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.bird_x, config.bird_start_y),
            velocity: 0.0,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
            radius: config.bird_radius,
        }
    }

    /// Apply one tick of gravity, then move by the new velocity
    pub fn integrate(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Pure form of [`Bird::integrate`]
    pub fn integrated(mut self) -> Self {
        self.integrate();
        self
    }

    /// Overwrite the current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.velocity = self.jump_velocity;
    }

    /// Pure form of [`Bird::jump`]
    pub fn jumped(mut self) -> Self {
        self.jump();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ten_ticks_of_free_fall() {
        let mut bird = Bird::new(&GameConfig::default());
        for _ in 0..10 {
            bird.integrate();
        }
        assert!((bird.velocity - 1.0).abs() < 1e-4);
        assert!((bird.pos.y - 155.5).abs() < 1e-3);
        assert_eq!(bird.pos.x, 150.0);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let config = GameConfig::default();
        for v in [-10.0, -4.0, 0.0, 2.5, 30.0] {
            let bird = Bird {
                velocity: v,
                ..Bird::new(&config)
            };
            assert_eq!(bird.jumped().velocity, -4.0);
        }
    }

    #[test]
    fn test_repeated_jumps_do_not_stack() {
        let mut bird = Bird::new(&GameConfig::default());
        bird.jump();
        bird.jump();
        bird.jump();
        assert_eq!(bird.velocity, -4.0);
    }

    #[test]
    fn test_tick_after_jump() {
        let mut bird = Bird::new(&GameConfig::default());
        for _ in 0..5 {
            bird.integrate();
        }
        let y5 = bird.pos.y;
        bird.jump();
        bird.integrate();
        assert!((bird.pos.y - (y5 - 3.9)).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_free_fall_matches_closed_form(
            y0 in 0.0f32..500.0,
            v0 in -4.0f32..4.0,
            n in 0u32..200,
        ) {
            let config = GameConfig::default();
            let mut bird = Bird::new(&config);
            bird.pos.y = y0;
            bird.velocity = v0;
            for _ in 0..n {
                bird = bird.integrated();
            }

            let (y0, v0, g, n) = (y0 as f64, v0 as f64, config.gravity as f64, n as f64);
            let expected_v = v0 + n * g;
            let expected_y = y0 + n * v0 + g * n * (n + 1.0) / 2.0;
            prop_assert!((bird.velocity as f64 - expected_v).abs() < 1e-2);
            prop_assert!((bird.pos.y as f64 - expected_y).abs() < 0.5);
            prop_assert_eq!(bird.pos.x, config.bird_x);
        }
    }
}
