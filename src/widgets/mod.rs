//! Drawing components for the dashboard screens.
//!
//! All widgets are generic over `DrawTarget<Color = BinaryColor>` so they draw
//! equally into a [`Frame`](crate::frame::Frame), the SSD1306 buffer or a
//! simulator display.

mod graph;
mod primitives;

pub use graph::{GraphArea, draw_area_graph, value_to_offset};
pub use primitives::{draw_label, draw_lines, draw_text};
