//! SSD1306 128x64 over `/dev/i2c-*`.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use linux_embedded_hal::I2cdev;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::size::DisplaySize128x64;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use tracing::info;

use super::{DisplayError, DisplaySink, check_size};
use crate::frame::{Frame, FrameExt};

type Oled = Ssd1306<I2CInterface<I2cdev>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered SSD1306 driver; each push redraws and flushes the whole buffer.
pub struct Ssd1306Sink {
    display: Oled,
}

impl Ssd1306Sink {
    /// Open the bus, initialise the panel and blank it.
    pub fn open(
        bus: &str,
        address: u8,
    ) -> Result<Self, DisplayError> {
        info!(bus, address = %format_args!("{address:#04x}"), "initialising SSD1306");

        let i2c = I2cdev::new(bus).map_err(|e| DisplayError::Bus {
            bus: bus.to_string(),
            reason: e.to_string(),
        })?;
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut display =
            Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();

        display.init().map_err(|e| DisplayError::Init(format!("{e:?}")))?;
        display.clear_buffer();
        display.flush().map_err(|e| DisplayError::Flush(format!("{e:?}")))?;

        info!("display initialised");
        Ok(Self { display })
    }
}

impl DisplaySink for Ssd1306Sink {
    fn push(
        &mut self,
        frame: &Frame,
    ) -> Result<(), DisplayError> {
        check_size(frame, self.display.size())?;

        self.display.clear_buffer();
        self.display
            .draw_iter(frame.lit_points().map(|p| Pixel(p, BinaryColor::On)))
            .map_err(|e| DisplayError::Flush(format!("{e:?}")))?;
        self.display.flush().map_err(|e| DisplayError::Flush(format!("{e:?}")))
    }
}
