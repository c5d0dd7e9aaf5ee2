//! Monochrome frame the dashboard draws into every tick.
//!
//! The frame is the simulator's in-memory display: the PNG and window sinks
//! render it as is, and the SSD1306 sink copies its lit pixels into the driver
//! buffer. Drawing outside the frame is silently clipped.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

/// Fixed-size 1-bit pixel buffer.
pub type Frame = SimulatorDisplay<BinaryColor>;

/// Pixel queries on a [`Frame`].
pub trait FrameExt {
    /// Pixel state, `false` outside the frame.
    fn is_on(
        &self,
        point: Point,
    ) -> bool;

    /// Lit pixels inside the row band `y_start..y_end`.
    fn lit_in_rows(
        &self,
        y_start: i32,
        y_end: i32,
    ) -> usize;

    /// Number of lit pixels.
    fn lit_count(&self) -> usize;

    /// Every lit pixel in row-major order.
    fn lit_points(&self) -> impl Iterator<Item = Point> + '_;
}

impl FrameExt for Frame {
    fn is_on(
        &self,
        point: Point,
    ) -> bool {
        self.bounding_box().contains(point) && self.get_pixel(point).is_on()
    }

    fn lit_in_rows(
        &self,
        y_start: i32,
        y_end: i32,
    ) -> usize {
        let Size { width, height } = self.size();
        (y_start.max(0)..y_end.min(height as i32))
            .flat_map(|y| (0..width as i32).map(move |x| Point::new(x, y)))
            .filter(|p| self.get_pixel(*p).is_on())
            .count()
    }

    fn lit_count(&self) -> usize { self.lit_in_rows(0, self.size().height as i32) }

    fn lit_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounding_box().points().filter(|p| self.get_pixel(*p).is_on())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    use super::*;

    #[test]
    fn test_new_frame_is_blank() {
        let frame = Frame::new(Size::new(128, 64));
        assert_eq!(frame.size(), Size::new(128, 64));
        assert_eq!(frame.lit_count(), 0);
    }

    #[test]
    fn test_draw_and_clear() {
        let mut frame = Frame::new(Size::new(16, 8));
        Pixel(Point::new(3, 2), BinaryColor::On).draw(&mut frame).unwrap();
        assert!(frame.is_on(Point::new(3, 2)));
        assert!(!frame.is_on(Point::new(2, 3)));
        frame.clear(BinaryColor::Off).unwrap();
        assert_eq!(frame.lit_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut frame = Frame::new(Size::new(16, 8));
        Line::new(Point::new(-5, 0), Point::new(20, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut frame)
            .unwrap();
        assert_eq!(frame.lit_count(), 16);
        assert!(!frame.is_on(Point::new(-1, 0)));
        assert!(!frame.is_on(Point::new(16, 0)));
    }

    #[test]
    fn test_lit_in_rows() {
        let mut frame = Frame::new(Size::new(8, 8));
        Pixel(Point::new(1, 1), BinaryColor::On).draw(&mut frame).unwrap();
        Pixel(Point::new(1, 5), BinaryColor::On).draw(&mut frame).unwrap();
        assert_eq!(frame.lit_in_rows(0, 4), 1);
        assert_eq!(frame.lit_in_rows(4, 8), 1);
        assert_eq!(frame.lit_in_rows(-10, 100), 2);
    }

    #[test]
    fn test_lit_points_row_major() {
        let mut frame = Frame::new(Size::new(5, 3));
        Pixel(Point::new(4, 0), BinaryColor::On).draw(&mut frame).unwrap();
        Pixel(Point::new(0, 2), BinaryColor::On).draw(&mut frame).unwrap();
        assert_eq!(frame.lit_points().collect::<Vec<_>>(), [Point::new(4, 0), Point::new(0, 2)]);
    }
}
