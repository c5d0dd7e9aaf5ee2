//! SDL preview window, the desktop stand-in for the OLED.

use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorEvent, Window};

use super::{DisplayError, DisplaySink, check_size};
use crate::frame::Frame;

pub struct WindowSink {
    size: Size,
    window: Window,
}

impl WindowSink {
    pub fn new(
        size: Size,
        scale: u32,
        title: &str,
    ) -> Self {
        let settings = OutputSettingsBuilder::new()
            .theme(BinaryColorTheme::OledBlue)
            .scale(scale)
            .build();
        Self {
            size,
            window: Window::new(title, &settings),
        }
    }
}

impl DisplaySink for WindowSink {
    fn push(
        &mut self,
        frame: &Frame,
    ) -> Result<(), DisplayError> {
        check_size(frame, self.size)?;
        self.window.update(frame);

        if self.window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return Err(DisplayError::Closed);
        }
        Ok(())
    }
}
