//! Platform layer
//!
//! Handles everything between the OS and the simulation:
//! - Window and event loop (`app`)
//! - Input events and per-frame presses (`input`)
//! - Window-to-world mapping and projection (`viewport`)
//! - Frame timing (`FrameClock`)

pub mod app;
pub mod input;
pub mod viewport;

use std::time::Instant;

pub use app::run;
pub use input::{Button, InputState};
pub use viewport::Viewport;

/// Monotonic frame timer
///
/// Delta time is not clamped: a stalled frame yields a large step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Seconds since the previous call (or since creation)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
