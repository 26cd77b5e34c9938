//! Fixed-rate tick clock
//!
//! Turns variable animation-frame times into a whole number of fixed ticks.
//! Leftover time carries over to the next frame.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame gap honoured; anything longer (tab in background) is clamped
const MAX_FRAME_SECS: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct TickClock {
    dt: f64,
    accumulator: f64,
    last_time_ms: Option<f64>,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate.max(1) as f64,
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    /// Feed a frame timestamp (ms, as passed to `requestAnimationFrame`) and
    /// get the number of ticks to run for it
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        let elapsed = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_SECS),
            None => self.dt,
        };
        self.last_time_ms = Some(time_ms);
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        // Drop what could not be caught up
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.dt);
        }
        ticks
    }

    /// Forget timing history (after a restart or pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time_ms = None;
    }
}
