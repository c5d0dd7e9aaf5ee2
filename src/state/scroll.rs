//! Horizontal scroll offset for the title line.

use std::time::{Duration, Instant};

/// Title x-offset that walks left and wraps back to the right edge.
///
/// The offset starts at the display width (text just off-screen right), drops
/// by `step` each time `interval` has elapsed, and resets to the display width
/// once it falls below `-text_width`.
#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    offset: i32,
    display_width: i32,
    text_width: i32,
    step: i32,
    interval: Duration,
    last_step: Instant,
}

impl ScrollState {
    pub fn new(
        now: Instant,
        display_width: u32,
        text_width: u32,
        step: i32,
        interval: Duration,
    ) -> Self {
        Self {
            offset: display_width as i32,
            display_width: display_width as i32,
            text_width: text_width as i32,
            step,
            interval,
            last_step: now,
        }
    }

    #[inline]
    pub const fn offset(&self) -> i32 { self.offset }

    /// Step the offset if the scroll interval has elapsed. Returns `true` if
    /// the text wrapped back to the right edge.
    pub fn advance(
        &mut self,
        now: Instant,
    ) -> bool {
        if now.saturating_duration_since(self.last_step) < self.interval {
            return false;
        }
        self.last_step = now;
        self.offset -= self.step;
        if self.offset < -self.text_width {
            self.offset = self.display_width;
            return true;
        }
        false
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
