//! Display sinks the finished frame is pushed to.
//!
//! - [`Ssd1306Sink`]: SSD1306 over a Linux I2C bus (Linux only)
//! - [`PngSink`]: writes each frame to a PNG file through the simulator's
//!   output image
//! - [`WindowSink`]: SDL desktop window (`window` feature)
//!
//! Every sink receives the whole frame; there is no partial update.

mod png;
#[cfg(target_os = "linux")]
mod ssd1306;
#[cfg(feature = "window")]
mod window;

use embedded_graphics::prelude::{OriginDimensions, Size};
use tracing::info;

use crate::config::{Backend, Config};
use crate::frame::Frame;

pub use png::PngSink;
#[cfg(target_os = "linux")]
pub use self::ssd1306::Ssd1306Sink;
#[cfg(feature = "window")]
pub use window::WindowSink;

/// Errors from opening or writing to a display.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("cannot open I2C bus {bus}: {reason}")]
    Bus { bus: String, reason: String },

    #[error("display init failed: {0}")]
    Init(String),

    #[error("display flush failed: {0}")]
    Flush(String),

    #[error("cannot write snapshot {path}: {reason}")]
    Snapshot { path: String, reason: String },

    #[error("frame is {frame:?} but the display is {display:?}")]
    SizeMismatch { frame: Size, display: Size },

    #[error("preview window was closed")]
    Closed,

    #[error("{0} backend is not available in this build")]
    Unsupported(&'static str),
}

/// Receives one complete frame per tick.
pub trait DisplaySink {
    fn push(
        &mut self,
        frame: &Frame,
    ) -> Result<(), DisplayError>;
}

impl<K: DisplaySink + ?Sized> DisplaySink for Box<K> {
    fn push(
        &mut self,
        frame: &Frame,
    ) -> Result<(), DisplayError> {
        (**self).push(frame)
    }
}

/// Fail if a frame does not match the display resolution.
pub(crate) fn check_size(
    frame: &Frame,
    display: Size,
) -> Result<(), DisplayError> {
    let frame_size = frame.size();
    if frame_size != display {
        return Err(DisplayError::SizeMismatch {
            frame: frame_size,
            display,
        });
    }
    Ok(())
}

/// Open the sink selected by `config.display.backend`.
pub fn open(config: &Config) -> Result<Box<dyn DisplaySink>, DisplayError> {
    let section = &config.display;
    let size = Size::new(section.width, section.height);
    info!(backend = ?section.backend, width = size.width, height = size.height, "opening display");

    match section.backend {
        Backend::Png => Ok(Box::new(PngSink::new(size, section.preview_scale, &section.snapshot_path))),
        Backend::Ssd1306 => open_ssd1306(config, size),
        Backend::Window => open_window(config, size),
    }
}

#[cfg(target_os = "linux")]
fn open_ssd1306(
    config: &Config,
    size: Size,
) -> Result<Box<dyn DisplaySink>, DisplayError> {
    let panel = Size::new(crate::config::SCREEN_WIDTH, crate::config::SCREEN_HEIGHT);
    if size != panel {
        return Err(DisplayError::SizeMismatch {
            frame: size,
            display: panel,
        });
    }
    Ok(Box::new(Ssd1306Sink::open(&config.display.i2c_bus, config.display.i2c_address)?))
}

#[cfg(not(target_os = "linux"))]
fn open_ssd1306(
    _config: &Config,
    _size: Size,
) -> Result<Box<dyn DisplaySink>, DisplayError> {
    Err(DisplayError::Unsupported("ssd1306"))
}

#[cfg(feature = "window")]
fn open_window(
    config: &Config,
    size: Size,
) -> Result<Box<dyn DisplaySink>, DisplayError> {
    Ok(Box::new(WindowSink::new(size, config.display.preview_scale, &config.dashboard.title)))
}

#[cfg(not(feature = "window"))]
fn open_window(
    _config: &Config,
    _size: Size,
) -> Result<Box<dyn DisplaySink>, DisplayError> {
    Err(DisplayError::Unsupported("window"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size() {
        let frame = Frame::new(Size::new(128, 64));
        assert!(check_size(&frame, Size::new(128, 64)).is_ok());
        let err = check_size(&frame, Size::new(128, 32)).unwrap_err();
        assert!(matches!(err, DisplayError::SizeMismatch { .. }));
    }

    #[test]
    fn test_open_png_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.display.backend = Backend::Png;
        config.display.snapshot_path = dir.path().join("oled.png");

        let mut sink = open(&config).unwrap();
        sink.push(&Frame::new(Size::new(128, 64))).unwrap();
        assert!(config.display.snapshot_path.is_file());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_ssd1306_rejects_other_sizes() {
        let mut config = Config::default();
        config.display.height = 32;
        assert!(matches!(open(&config), Err(DisplayError::SizeMismatch { .. })));
    }

    #[cfg(not(feature = "window"))]
    #[test]
    fn test_window_needs_feature() {
        let mut config = Config::default();
        config.display.backend = Backend::Window;
        assert!(matches!(open(&config), Err(DisplayError::Unsupported("window"))));
    }
}
