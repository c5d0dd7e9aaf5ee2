//! Per-screen rendering.
//!
//! Every screen draws a label line and a content region below the scrolling
//! title. Readings arrive already resolved through their failure policy, so
//! screens only decide how a [`Reading`](crate::metrics::Reading) looks.
//!
//! - [`gauge`]: CPU, memory and disk, label plus area graph
//! - [`containers`]: Running container list
//! - [`system_info`]: OS version, last patch time, pending reboot

mod containers;
mod gauge;
mod system_info;

pub use containers::{CONTAINERS_LABEL, container_lines, draw_containers_screen};
pub use gauge::{cpu_label, disk_label, draw_gauge_screen, memory_label};
pub use system_info::{SYSTEM_INFO_LABEL, SystemInfo, draw_system_info_screen, system_info_lines};

/// Text drawn for a value that could not be read.
pub const PLACEHOLDER: &str = "Unknown";
