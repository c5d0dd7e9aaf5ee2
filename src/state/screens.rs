//! Screen rotation for the five-view dashboard.
//!
//! # Screens
//!
//! - [`Screen::Cpu`]: CPU load with area graph
//! - [`Screen::Memory`]: Memory usage with area graph
//! - [`Screen::Disk`]: Root filesystem usage with area graph
//! - [`Screen::Containers`]: Running containers and their status
//! - [`Screen::SystemInfo`]: OS version, last patch time, pending reboot

use std::time::{Duration, Instant};

/// Number of screens in the rotation.
pub const SCREEN_COUNT: usize = 5;

/// Available screens, in rotation order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Screen {
    #[default]
    Cpu,
    Memory,
    Disk,
    Containers,
    SystemInfo,
}

impl Screen {
    /// All screens in rotation order.
    pub const ALL: [Self; SCREEN_COUNT] = [Self::Cpu, Self::Memory, Self::Disk, Self::Containers, Self::SystemInfo];

    /// Next screen (cycles: CPU → Memory → Disk → Containers → System Info → CPU).
    #[inline]
    pub const fn next(self) -> Self { Self::ALL[(self.index() + 1) % SCREEN_COUNT] }

    /// Position in [`Screen::ALL`].
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cpu => "CPU Load",
            Self::Memory => "Memory Usage",
            Self::Disk => "Disk Usage",
            Self::Containers => "Docker Containers",
            Self::SystemInfo => "System Info",
        }
    }
}

/// Active screen plus the time of the last switch.
#[derive(Clone, Copy, Debug)]
pub struct ScreenState {
    current: Screen,
    last_switch: Instant,
    interval: Duration,
}

impl ScreenState {
    pub fn new(
        now: Instant,
        interval: Duration,
    ) -> Self {
        Self {
            current: Screen::default(),
            last_switch: now,
            interval,
        }
    }

    #[inline]
    pub const fn current(&self) -> Screen { self.current }

    /// Rotate to the next screen once more than `interval` has passed since the
    /// last switch. Returns `true` if the screen changed.
    ///
    /// The timer restarts at `now`, so a late tick pushes the next switch back
    /// instead of switching twice in a row.
    pub fn advance(
        &mut self,
        now: Instant,
    ) -> bool {
        if now.saturating_duration_since(self.last_switch) > self.interval {
            self.current = self.current.next();
            self.last_switch = now;
            return true;
        }
        false
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
