//! Dashboard state that survives between ticks.
//!
//! - [`history`]: Rolling metric samples for the area graphs
//! - [`screens`]: Active screen and round-robin rotation timer
//! - [`scroll`]: Title scroll offset

pub mod history;
pub mod screens;
pub mod scroll;

pub use history::MetricHistory;
pub use screens::{Screen, ScreenState};
pub use scroll::ScrollState;
