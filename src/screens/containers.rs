//! Running container list.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::PLACEHOLDER;
use crate::metrics::{ContainerInfo, Reading};
use crate::styles::{Fonts, Layout};
use crate::widgets::{draw_label, draw_lines};

pub const CONTAINERS_LABEL: &str = "Docker Containers";

/// `name: status` lines, capped at what the content region can hold.
pub fn container_lines(
    reading: &Reading<Vec<ContainerInfo>>,
    max_lines: usize,
) -> Vec<String> {
    match reading {
        Reading::Value(containers) => containers
            .iter()
            .take(max_lines)
            .map(|c| format!("{}: {}", c.name, c.status))
            .collect(),
        Reading::Placeholder if max_lines > 0 => vec![PLACEHOLDER.to_string()],
        Reading::Placeholder | Reading::Hidden => Vec::new(),
    }
}

/// Draw the label and one detail line per container. Returns the number of
/// lines drawn.
pub fn draw_containers_screen<D>(
    display: &mut D,
    layout: &Layout,
    fonts: &Fonts,
    reading: &Reading<Vec<ContainerInfo>>,
) -> usize
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_label(display, layout, fonts, CONTAINERS_LABEL);

    let lines = container_lines(reading, layout.max_detail_lines());
    draw_lines(
        display,
        lines.iter().map(String::as_str),
        layout.content_y,
        layout.detail_line_height,
        layout.height as i32,
        fonts.detail_style(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
