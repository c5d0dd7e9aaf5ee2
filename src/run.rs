//! Blocking run loop: tick, push, sleep, until stopped.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::dashboard::{Dashboard, DashboardError};
use crate::display::DisplaySink;
use crate::metrics::MetricSource;
use crate::stop::StopSignal;

/// Loop pacing.
#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    /// Sleep after each pushed frame. Render time is not subtracted.
    pub tick_interval: Duration,
    /// Stop after this many ticks, `None` to run until stopped.
    pub max_ticks: Option<u64>,
}

/// Drive `dashboard` until `stop` fires, `max_ticks` is reached or a tick
/// fails. Returns the number of frames pushed.
pub fn run<S, K>(
    dashboard: &mut Dashboard,
    source: &mut S,
    sink: &mut K,
    stop: &StopSignal,
    options: RunOptions,
) -> Result<u64, DashboardError>
where
    S: MetricSource,
    K: DisplaySink + ?Sized,
{
    info!(tick = ?options.tick_interval, max_ticks = ?options.max_ticks, "run loop started");
    let mut pushed = 0u64;

    while !stop.is_stopped() {
        let frame = dashboard.tick(Instant::now(), source)?;
        sink.push(frame)?;
        pushed += 1;

        if options.max_ticks.is_some_and(|max| pushed >= max) {
            debug!(pushed, "tick limit reached");
            break;
        }
        if stop.wait_timeout(options.tick_interval) {
            break;
        }
    }

    info!(pushed, "run loop stopped");
    Ok(pushed)
}

// =============================================================================
// Unit Tests
// =============================================================================
