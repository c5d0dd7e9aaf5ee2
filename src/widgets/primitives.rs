//! Low-level text drawing shared across screens.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::styles::{Fonts, Layout};

/// Draw `text` with its top-left corner at `position`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, position, style, Baseline::Top)
        .draw(display)
        .ok();
}

/// Draw the label line of a screen.
pub fn draw_label<D>(
    display: &mut D,
    layout: &Layout,
    fonts: &Fonts,
    text: &str,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_text(display, text, Point::new(0, layout.label_y), fonts.label_style());
}

/// Draw `lines` top-down from `y`, one every `line_height` pixels.
///
/// A line is only drawn if it fits completely above `bottom`. Returns the
/// number of lines drawn.
pub fn draw_lines<'a, D, I>(
    display: &mut D,
    lines: I,
    y: i32,
    line_height: u32,
    bottom: i32,
    style: MonoTextStyle<'_, BinaryColor>,
) -> usize
where
    D: DrawTarget<Color = BinaryColor>,
    I: IntoIterator<Item = &'a str>,
{
    let mut drawn = 0;
    for (idx, line) in lines.into_iter().enumerate() {
        let line_y = y + (idx as u32 * line_height) as i32;
        if line_y + line_height as i32 > bottom {
            break;
        }
        draw_text(display, line, Point::new(0, line_y), style);
        drawn += 1;
    }
    drawn
}
