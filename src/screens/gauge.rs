//! CPU, memory and disk screens.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────┐
//! │        my-host (scrolling)     │
//! │ CPU Load: 37.5%                │
//! │            __                  │
//! │     ______|##|____             │
//! │ ___|##############|___________ │
//! └────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::metrics::{CpuReading, DiskReading, MemoryReading, Reading};
use crate::state::MetricHistory;
use crate::styles::{Fonts, Layout};
use crate::widgets::{GraphArea, draw_area_graph, draw_label};

/// Longest gauge label: `Memory: 1048576MB (100.0%)`.
pub const GAUGE_LABEL_LEN: usize = 32;

/// Shown instead of the value under the placeholder policy.
const GAUGE_PLACEHOLDER: &str = "--";

pub fn cpu_label(reading: &Reading<CpuReading>) -> String<GAUGE_LABEL_LEN> {
    let mut s = String::new();
    match reading {
        Reading::Value(r) => write!(s, "CPU Load: {:.1}%", r.percent).ok(),
        Reading::Placeholder => write!(s, "CPU Load: {GAUGE_PLACEHOLDER}").ok(),
        Reading::Hidden => s.push_str("CPU Load").ok(),
    };
    s
}

pub fn memory_label(reading: &Reading<MemoryReading>) -> String<GAUGE_LABEL_LEN> {
    let mut s = String::new();
    match reading {
        Reading::Value(r) => write!(s, "Memory: {:.0}MB ({:.1}%)", r.used_mb, r.percent).ok(),
        Reading::Placeholder => write!(s, "Memory: {GAUGE_PLACEHOLDER}").ok(),
        Reading::Hidden => s.push_str("Memory").ok(),
    };
    s
}

pub fn disk_label(reading: &Reading<DiskReading>) -> String<GAUGE_LABEL_LEN> {
    let mut s = String::new();
    match reading {
        Reading::Value(r) => write!(s, "Disk: {}GB ({:.1}%)", r.used_gb, r.percent).ok(),
        Reading::Placeholder => write!(s, "Disk: {GAUGE_PLACEHOLDER}").ok(),
        Reading::Hidden => s.push_str("Disk").ok(),
    };
    s
}

/// Draw the label line and the history graph filling the content region.
pub fn draw_gauge_screen<D>(
    display: &mut D,
    layout: &Layout,
    fonts: &Fonts,
    label: &str,
    history: &MetricHistory,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_label(display, layout, fonts, label);

    let area = GraphArea {
        x: 0,
        y: layout.content_y,
        height: layout.content_height,
    };
    draw_area_graph(display, area, history.iter());
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_label() {
        let label = cpu_label(&Reading::Value(CpuReading { percent: 37.5 }));
        assert_eq!(label.as_str(), "CPU Load: 37.5%");
    }

    #[test]
    fn test_cpu_label_rounds_to_one_decimal() {
        let label = cpu_label(&Reading::Value(CpuReading { percent: 4.26 }));
        assert_eq!(label.as_str(), "CPU Load: 4.3%");
    }

    #[test]
    fn test_memory_label() {
        let label = memory_label(&Reading::Value(MemoryReading {
            used_mb: 512.0,
            percent: 25.0,
        }));
        assert_eq!(label.as_str(), "Memory: 512MB (25.0%)");
    }

    #[test]
    fn test_disk_label() {
        let label = disk_label(&Reading::Value(DiskReading {
            used_gb: 20,
            percent: 45.0,
        }));
        assert_eq!(label.as_str(), "Disk: 20GB (45.0%)");
    }

    #[test]
    fn test_failed_labels() {
        assert_eq!(cpu_label(&Reading::Placeholder).as_str(), "CPU Load: --");
        assert_eq!(cpu_label(&Reading::Hidden).as_str(), "CPU Load");
        assert_eq!(memory_label(&Reading::Placeholder).as_str(), "Memory: --");
        assert_eq!(disk_label(&Reading::Hidden).as_str(), "Disk");
    }

    #[test]
    fn test_largest_values_fit_buffer() {
        let label = memory_label(&Reading::Value(MemoryReading {
            used_mb: 1_048_576.0,
            percent: 100.0,
        }));
        assert_eq!(label.as_str(), "Memory: 1048576MB (100.0%)");
    }
}
