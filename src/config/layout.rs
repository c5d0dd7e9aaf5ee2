//! Display geometry and layout constants.
//!
//! Region heights are not constants: they are derived from the active fonts in
//! [`crate::styles::Layout`] so swapping a font keeps the stacking consistent.
//! Only the fixed paddings between regions live here.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x64 module).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Default 7-bit I2C address of SSD1306 modules.
pub const I2C_ADDRESS: u8 = 0x3C;

/// Default Linux I2C bus device.
pub const I2C_BUS: &str = "/dev/i2c-1";

// =============================================================================
// Region Padding
// =============================================================================

/// Gap between the scrolling title and the label line.
pub const TITLE_GAP: i32 = 1;

/// Extra height added to the label font glyph to form the label line.
pub const LABEL_PADDING: u32 = 2;

/// Gap between the label line and the content region.
pub const LABEL_GAP: i32 = 1;

/// Extra height added to a content font glyph to form one text line.
pub const LINE_PADDING: u32 = 2;
