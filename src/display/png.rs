//! PNG snapshot sink.
//!
//! Renders through the embedded-graphics simulator's output image without
//! opening a window, so it works headless: point an image viewer or a web page
//! at the file to watch the dashboard without hardware.

use std::path::{Path, PathBuf};

use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettings, OutputSettingsBuilder};

use super::{DisplayError, DisplaySink, check_size};
use crate::frame::Frame;

/// Writes every pushed frame to `path`, replacing the previous one.
pub struct PngSink {
    size: Size,
    settings: OutputSettings,
    path: PathBuf,
}

impl PngSink {
    pub fn new(
        size: Size,
        scale: u32,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            size,
            settings: OutputSettingsBuilder::new()
                .theme(BinaryColorTheme::OledBlue)
                .scale(scale)
                .build(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl DisplaySink for PngSink {
    fn push(
        &mut self,
        frame: &Frame,
    ) -> Result<(), DisplayError> {
        check_size(frame, self.size)?;

        frame
            .to_rgb_output_image(&self.settings)
            .save_png(&self.path)
            .map_err(|e| DisplayError::Snapshot {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
    }
}
