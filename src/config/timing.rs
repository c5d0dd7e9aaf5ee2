//! Timing constants for the dashboard loop.

use std::time::Duration;

/// Sleep after every tick. Not compensated for render time.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Time each screen stays active before rotating to the next one.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(3);

/// Minimum time between title scroll steps.
/// Shorter than [`TICK_INTERVAL`], so in practice the title moves once per tick.
pub const SCROLL_INTERVAL: Duration = Duration::from_millis(10);

/// Pixels the title moves left per scroll step.
pub const SCROLL_STEP: i32 = 8;

/// Upper bound for a single metric command.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);
