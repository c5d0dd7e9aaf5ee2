//! Fonts, text styles and the font-derived screen layout.
//!
//! Region heights come from the glyph heights of the active [`Fonts`], so a
//! font swap moves every region consistently:
//!
//! ```text
//! ┌────────────────────────────────┐ title_y = 0
//! │  Scrolling title (TITLE font)  │ title_height = glyph height
//! ├────────────────────────────────┤ label_y = title_height + 1
//! │  Label: value   (LABEL font)   │ label_height = glyph height + 2
//! ├────────────────────────────────┤ content_y = label_y + label_height + 1
//! │                                │
//! │  Graph / text lines            │ content_height = height - content_y
//! │                                │
//! └────────────────────────────────┘
//! ```

use embedded_graphics::mono_font::ascii::{FONT_4X6, FONT_5X8};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_10_POINT;

use crate::config::layout::{LABEL_GAP, LABEL_PADDING, LINE_PADDING, TITLE_GAP};

// =============================================================================
// Fonts
// =============================================================================

/// The three fonts the dashboard draws with.
///
/// The defaults are sized so the four system info lines fit below the title
/// and label on a 64 px panel.
#[derive(Clone, Copy)]
pub struct Fonts {
    /// Scrolling title.
    pub title: &'static MonoFont<'static>,
    /// Label line and system info lines.
    pub label: &'static MonoFont<'static>,
    /// Container list lines.
    pub detail: &'static MonoFont<'static>,
}

impl Fonts {
    pub const DEFAULT: Self = Self {
        title: &PROFONT_10_POINT,
        label: &FONT_5X8,
        detail: &FONT_4X6,
    };

    pub const fn title_style(&self) -> MonoTextStyle<'static, BinaryColor> { MonoTextStyle::new(self.title, BinaryColor::On) }

    pub const fn label_style(&self) -> MonoTextStyle<'static, BinaryColor> { MonoTextStyle::new(self.label, BinaryColor::On) }

    pub const fn detail_style(&self) -> MonoTextStyle<'static, BinaryColor> { MonoTextStyle::new(self.detail, BinaryColor::On) }
}

impl Default for Fonts {
    fn default() -> Self { Self::DEFAULT }
}

/// 1px lit stroke for graph lines.
pub const GRAPH_STROKE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// Rendered width of `text` in `style`, in pixels.
pub fn text_width(
    text: &str,
    style: MonoTextStyle<'static, BinaryColor>,
) -> u32 {
    Text::with_baseline(text, Point::zero(), style, Baseline::Top)
        .bounding_box()
        .size
        .width
}

// =============================================================================
// Layout
// =============================================================================

/// Vertical regions of a screen, derived from the font glyph heights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub title_y: i32,
    pub title_height: u32,
    pub label_y: i32,
    pub label_height: u32,
    pub content_y: i32,
    pub content_height: u32,
    /// Line pitch for container entries.
    pub detail_line_height: u32,
    /// Line pitch for system info entries.
    pub info_line_height: u32,
}

impl Layout {
    pub fn new(
        size: Size,
        fonts: &Fonts,
    ) -> Self {
        let title_y = 0;
        let title_height = fonts.title.character_size.height;
        let label_y = title_y + title_height as i32 + TITLE_GAP;
        let label_height = fonts.label.character_size.height + LABEL_PADDING;
        let content_y = label_y + label_height as i32 + LABEL_GAP;
        let content_height = (size.height as i32 - content_y).max(0) as u32;

        Self {
            width: size.width,
            height: size.height,
            title_y,
            title_height,
            label_y,
            label_height,
            content_y,
            content_height,
            detail_line_height: fonts.detail.character_size.height + LINE_PADDING,
            info_line_height: fonts.label.character_size.height + LINE_PADDING,
        }
    }

    /// How many container lines fit in the content region.
    pub const fn max_detail_lines(&self) -> usize {
        if self.detail_line_height == 0 {
            return 0;
        }
        (self.content_height / self.detail_line_height) as usize
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_regions() {
        let fonts = Fonts::DEFAULT;
        let layout = Layout::new(Size::new(128, 64), &fonts);

        assert_eq!(layout.title_y, 0);
        assert_eq!(layout.title_height, fonts.title.character_size.height);
        assert_eq!(layout.label_y, layout.title_height as i32 + 1);
        assert_eq!(layout.label_height, fonts.label.character_size.height + 2);
        assert_eq!(layout.content_y, layout.label_y + layout.label_height as i32 + 1);
        assert_eq!(layout.content_y + layout.content_height as i32, 64);
        assert!(layout.content_height > 0, "default fonts must leave room for the graph");
    }

    #[test]
    fn test_default_layout_on_panel() {
        let layout = Layout::new(Size::new(128, 64), &Fonts::DEFAULT);
        assert_eq!(layout.title_height, 12);
        assert_eq!(layout.label_y, 13);
        assert_eq!(layout.label_height, 10);
        assert_eq!(layout.content_y, 24);
        assert_eq!(layout.content_height, 40);
        assert_eq!(layout.info_line_height, 10);
        assert_eq!(layout.detail_line_height, 8);
        assert_eq!(layout.max_detail_lines(), 5);
    }

    #[test]
    fn test_default_layout_fits_system_info() {
        let layout = Layout::new(Size::new(128, 64), &Fonts::DEFAULT);
        assert!(layout.content_y + 4 * layout.info_line_height as i32 <= 64);
    }

    #[test]
    fn test_layout_follows_font_swap() {
        let big = Fonts {
            title: &profont::PROFONT_24_POINT,
            ..Fonts::DEFAULT
        };
        let default = Layout::new(Size::new(128, 64), &Fonts::DEFAULT);
        let swapped = Layout::new(Size::new(128, 64), &big);

        let delta = big.title.character_size.height as i32 - Fonts::DEFAULT.title.character_size.height as i32;
        assert_eq!(swapped.label_y - default.label_y, delta);
        assert_eq!(swapped.content_y - default.content_y, delta);
    }

    #[test]
    fn test_layout_tiny_display_has_no_content() {
        let layout = Layout::new(Size::new(128, 10), &Fonts::DEFAULT);
        assert_eq!(layout.content_height, 0);
        assert_eq!(layout.max_detail_lines(), 0);
    }

    #[test]
    fn test_max_detail_lines() {
        let layout = Layout::new(Size::new(128, 64), &Fonts::DEFAULT);
        assert_eq!(layout.max_detail_lines(), (layout.content_height / layout.detail_line_height) as usize);
    }

    #[test]
    fn test_text_width_scales_with_length() {
        let style = Fonts::DEFAULT.title_style();
        let one = text_width("A", style);
        let ten = text_width("AAAAAAAAAA", style);
        assert!(one > 0);
        assert!(ten >= one * 10);
    }

    #[test]
    fn test_labels_fit_display_width() {
        let style = Fonts::DEFAULT.label_style();
        for label in ["CPU Load: 100.0%", "Memory: 512MB (25.0%)", "Disk: 20GB (45.0%)"] {
            assert!(text_width(label, style) <= 128, "{label} overflows");
        }
    }
}
