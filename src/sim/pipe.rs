//! Pipes and pipe-pair generation
//!
//! Pipes are generated in pairs that leave a vertical gap between them. They
//! spawn at the right edge of the field and scroll left one step per tick until
//! they have fully left the field.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A single rectangular pipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Scrolled fully past the left edge; pruned at the end of the tick
    pub retired: bool,
}

impl Pipe {
    /// Create a pipe at the right edge of the field.
    ///
    /// With an explicit height the pipe grows up from the floor. Without one
    /// the height is drawn uniformly from `[min_pipe_height, H - gap - min_pipe_height]`
    /// and the pipe hangs from the ceiling. A gap too large for that range
    /// pins the height to `min_pipe_height`.
    pub fn new<R: Rng + ?Sized>(
        config: &GameConfig,
        gap: f32,
        height: Option<f32>,
        rng: &mut R,
    ) -> Self {
        let (y, height) = match height {
            Some(h) => (config.field_height - h, h),
            None => {
                let min = config.min_pipe_height;
                let max = config.max_pipe_height(gap).max(min);
                (0.0, rng.random_range(min..=max))
            }
        };

        Self {
            x: config.field_width,
            y,
            width: config.pipe_width,
            height,
            speed: config.pipe_speed,
            retired: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Scroll one tick to the left and retire once fully off-field
    pub fn tick(&mut self) {
        self.x -= self.speed;
        if self.right() < 0.0 {
            self.retired = true;
        }
    }

    /// Pure form of [`Pipe::tick`]
    pub fn advanced(mut self) -> Self {
        self.tick();
        self
    }
}

/// Generate a pipe pair whose heights plus `gap` span the field exactly.
///
/// The first pipe takes a random height and hangs from the ceiling, the second
/// fills the rest of the field below the gap.
pub fn generate_pair<R: Rng + ?Sized>(config: &GameConfig, gap: f32, rng: &mut R) -> [Pipe; 2] {
    generate_pair_with_height(config, gap, None, rng)
}

/// Generate a pipe pair, optionally fixing the first pipe's height.
///
/// A fixed first height anchors that pipe to the floor (same as every second
/// pipe), so the pair then stacks both pipes from the bottom.
pub fn generate_pair_with_height<R: Rng + ?Sized>(
    config: &GameConfig,
    gap: f32,
    first_height: Option<f32>,
    rng: &mut R,
) -> [Pipe; 2] {
    let first = Pipe::new(config, gap, first_height, rng);
    let second_height = config.field_height - first.height - gap;
    let second = Pipe::new(config, gap, Some(second_height), rng);
    [first, second]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_explicit_first_height() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let [first, second] = generate_pair_with_height(&config, 120.0, Some(200.0), &mut rng);
        assert_eq!(first.height, 200.0);
        assert_eq!(first.y, 300.0);
        assert_eq!(second.height, 180.0);
        assert_eq!(second.y, 320.0);
    }

    #[test]
    fn test_random_pair_layout() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let [top, bottom] = generate_pair(&config, config.gap, &mut rng);

        assert_eq!(top.y, 0.0);
        assert!(top.height >= 40.0 && top.height <= 340.0);
        assert!((bottom.bottom() - config.field_height).abs() < 1e-3);
        // Gap sits between the two pipes
        assert!((bottom.y - top.bottom() - config.gap).abs() < 1e-3);

        for pipe in [top, bottom] {
            assert_eq!(pipe.x, 800.0);
            assert_eq!(pipe.width, 60.0);
            assert!(!pipe.retired);
        }
    }

    #[test]
    fn test_retires_once_fully_off_field() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pipe = Pipe::new(&config, config.gap, Some(100.0), &mut rng);
        pipe.x = -59.0;

        pipe.tick();
        // Right edge exactly at 0 is still on-field
        assert_eq!(pipe.right(), 0.0);
        assert!(!pipe.retired);

        pipe.tick();
        assert!(pipe.retired);
    }

    #[test]
    fn test_spawned_pipe_lifetime() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pipe = Pipe::new(&config, config.gap, Some(100.0), &mut rng);
        let mut ticks = 0;
        while !pipe.retired {
            pipe = pipe.advanced();
            ticks += 1;
        }
        assert_eq!(ticks, 861);
    }

    #[test]
    fn test_height_range_follows_gap_argument() {
        // Gap differs from the configured 120
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let [first, second] = generate_pair(&config, 300.0, &mut rng);
        assert!(first.height >= 40.0 && first.height <= 160.0);
        assert!(second.height >= 40.0 - 1e-3);
    }

    #[test]
    fn test_oversized_gap_does_not_panic() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let [first, _] = generate_pair(&config, 450.0, &mut rng);
        assert_eq!(first.height, config.min_pipe_height);
    }

    proptest! {
        #[test]
        fn prop_pair_spans_field(seed in any::<u64>(), gap in 20.0f32..420.0) {
            let config = GameConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let [first, second] = generate_pair(&config, gap, &mut rng);

            prop_assert!((first.height + gap + second.height - config.field_height).abs() < 1e-3);
            prop_assert!(first.height >= config.min_pipe_height);
            prop_assert!(first.height <= config.max_pipe_height(gap) + 1e-3);
            prop_assert!(second.height >= config.min_pipe_height - 1e-3);
        }
    }
}
