//! OS version, last patch time and pending reboot.
//!
//! Every line is built from its own reading, so one failed probe never hides
//! the others.

use chrono::{DateTime, Local};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::PLACEHOLDER;
use crate::metrics::Reading;
use crate::styles::{Fonts, Layout};
use crate::widgets::{draw_label, draw_lines};

pub const SYSTEM_INFO_LABEL: &str = "System Info";

/// Shown when the OS description could not be read.
const OS_PLACEHOLDER: &str = "Unknown OS";

/// Patch timestamps are shown to the minute in local time.
const PATCH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The three independent system info readings.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemInfo {
    pub os_version: Reading<String>,
    pub last_patched: Reading<DateTime<Local>>,
    pub reboot_pending: Reading<bool>,
}

/// The four info lines, in display order.
pub fn system_info_lines(info: &SystemInfo) -> [String; 4] {
    let os = match &info.os_version {
        Reading::Value(os) => os.as_str(),
        Reading::Placeholder => OS_PLACEHOLDER,
        Reading::Hidden => "",
    };
    let patched = match &info.last_patched {
        Reading::Value(t) => t.format(PATCH_TIME_FORMAT).to_string(),
        Reading::Placeholder => PLACEHOLDER.to_string(),
        Reading::Hidden => String::new(),
    };
    let reboot = match info.reboot_pending {
        Reading::Value(true) => "Yes",
        Reading::Value(false) => "No",
        Reading::Placeholder => PLACEHOLDER,
        Reading::Hidden => "",
    };

    [
        format!("OS: {os}"),
        "Last Patched:".to_string(),
        patched,
        format!("Reboot Pending: {reboot}"),
    ]
}

/// Draw the label and as many info lines as fit. Returns the number drawn.
pub fn draw_system_info_screen<D>(
    display: &mut D,
    layout: &Layout,
    fonts: &Fonts,
    info: &SystemInfo,
) -> usize
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_label(display, layout, fonts, SYSTEM_INFO_LABEL);

    let lines = system_info_lines(info);
    draw_lines(
        display,
        lines.iter().map(String::as_str),
        layout.content_y,
        layout.info_line_height,
        layout.height as i32,
        fonts.label_style(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::frame::{Frame, FrameExt};

    fn patched_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 12).single().unwrap()
    }

    #[test]
    fn test_all_readings_present() {
        let info = SystemInfo {
            os_version: Reading::Value("Ubuntu 22.04.4 LTS".to_string()),
            last_patched: Reading::Value(patched_at()),
            reboot_pending: Reading::Value(true),
        };
        assert_eq!(
            system_info_lines(&info),
            ["OS: Ubuntu 22.04.4 LTS", "Last Patched:", "2024-05-01 09:30", "Reboot Pending: Yes"]
        );
    }

    #[test]
    fn test_missing_patch_log_shows_unknown() {
        let info = SystemInfo {
            os_version: Reading::Value("Debian 12".to_string()),
            last_patched: Reading::Placeholder,
            reboot_pending: Reading::Value(false),
        };
        let lines = system_info_lines(&info);
        assert_eq!(lines[1], "Last Patched:");
        assert_eq!(lines[2], "Unknown");
        assert_eq!(lines[3], "Reboot Pending: No");
    }

    #[test]
    fn test_placeholders_are_independent() {
        let info = SystemInfo {
            os_version: Reading::Placeholder,
            last_patched: Reading::Value(patched_at()),
            reboot_pending: Reading::Placeholder,
        };
        let lines = system_info_lines(&info);
        assert_eq!(lines[0], "OS: Unknown OS");
        assert_eq!(lines[2], "2024-05-01 09:30");
        assert_eq!(lines[3], "Reboot Pending: Unknown");
    }

    fn unknown_info() -> SystemInfo {
        SystemInfo {
            os_version: Reading::Placeholder,
            last_patched: Reading::Placeholder,
            reboot_pending: Reading::Placeholder,
        }
    }

    #[test]
    fn test_all_lines_fit_panel() {
        let fonts = Fonts::DEFAULT;
        let layout = Layout::new(Size::new(128, 64), &fonts);
        let mut frame = Frame::new(Size::new(128, 64));

        let drawn = draw_system_info_screen(&mut frame, &layout, &fonts, &unknown_info());
        assert_eq!(drawn, 4);
        let last_line = layout.content_y + 3 * layout.info_line_height as i32;
        assert!(frame.lit_in_rows(last_line, 64) > 0);
    }

    #[test]
    fn test_draw_stops_at_bottom_edge() {
        let fonts = Fonts::DEFAULT;
        let layout = Layout::new(Size::new(128, 50), &fonts);
        let mut frame = Frame::new(Size::new(128, 50));

        // 26 rows of content hold two 10 px lines
        let drawn = draw_system_info_screen(&mut frame, &layout, &fonts, &unknown_info());
        assert_eq!(drawn, 2);
        assert_eq!(frame.lit_in_rows(layout.content_y + 20, 50), 0);
    }
}
