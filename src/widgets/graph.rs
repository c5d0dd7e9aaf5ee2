//! Area graph for percentage histories.
//!
//! Sample `i` is drawn at column `area.x + i`. Consecutive samples are joined
//! by line segments and every sample gets a vertical drop line to the floor of
//! the plot, which gives the filled look:
//!
//! ```text
//!          __
//!     ____|##|_
//!  __|#########|___
//! |################|
//! ```

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Line;

use crate::styles::GRAPH_STROKE;

/// Plot region of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphArea {
    pub x: i32,
    /// Top row of the plot (100 %).
    pub y: i32,
    pub height: u32,
}

impl GraphArea {
    /// Row that 0 % maps to.
    #[inline]
    pub const fn floor(&self) -> i32 { self.y + self.height as i32 }

    /// Screen row for a percentage value.
    #[inline]
    pub fn y_for(
        &self,
        value: f32,
    ) -> i32 {
        self.y + value_to_offset(value, self.height)
    }
}

/// Vertical offset from the top of a plot of `plot_height` rows for a value in
/// percent: `plot_height - round(value / 100 * plot_height)`.
///
/// The result is clamped to `0..=plot_height` so readings above 100 % (or
/// below 0 %) pin to the plot edge instead of drawing over the label line.
pub fn value_to_offset(
    value: f32,
    plot_height: u32,
) -> i32 {
    let h = plot_height as f32;
    let offset = h - (value / 100.0 * h).round();
    if offset.is_nan() {
        return plot_height as i32;
    }
    (offset as i32).clamp(0, plot_height as i32)
}

/// Draw `samples` (oldest first) as an area graph inside `area`.
pub fn draw_area_graph<D, I>(
    display: &mut D,
    area: GraphArea,
    samples: I,
) where
    D: DrawTarget<Color = BinaryColor>,
    I: IntoIterator<Item = f32>,
{
    let floor = area.floor();
    let mut prev: Option<Point> = None;

    for (i, value) in samples.into_iter().enumerate() {
        let point = Point::new(area.x + i as i32, area.y_for(value));

        if let Some(prev) = prev {
            Line::new(prev, point).into_styled(GRAPH_STROKE).draw(display).ok();
        }
        Line::new(point, Point::new(point.x, floor))
            .into_styled(GRAPH_STROKE)
            .draw(display)
            .ok();

        prev = Some(point);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
