//! The dashboard: every piece of mutable state plus the per-tick render.
//!
//! [`Dashboard::tick`] reads only the metrics the active screen needs, applies
//! the configured [`FailurePolicy`] and redraws the whole frame. It never
//! sleeps or touches the display, which is the run loop's job.

use std::time::Instant;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use tracing::{debug, info};

use crate::config::{Config, PolicySection};
use crate::frame::Frame;
use crate::metrics::{FailurePolicy, Metric, MetricError, MetricSource, Reading};
use crate::screens::{
    SystemInfo, cpu_label, disk_label, draw_containers_screen, draw_gauge_screen, draw_system_info_screen,
    memory_label,
};
use crate::state::{MetricHistory, Screen, ScreenState, ScrollState};
use crate::styles::{Fonts, Layout, text_width};
use crate::widgets::draw_text;

/// Errors that end a tick.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A read failed under [`FailurePolicy::Fatal`].
    #[error("reading {metric} failed: {source}")]
    MetricRead {
        metric: Metric,
        #[source]
        source: MetricError,
    },

    #[error(transparent)]
    Display(#[from] crate::display::DisplayError),
}

/// Owned dashboard state, advanced one tick at a time.
pub struct Dashboard {
    frame: Frame,
    layout: Layout,
    fonts: Fonts,
    title: String,
    screens: ScreenState,
    scroll: ScrollState,
    cpu: MetricHistory,
    memory: MetricHistory,
    disk: MetricHistory,
    policy: PolicySection,
    ticks: u64,
}

impl Dashboard {
    pub fn new(
        config: &Config,
        now: Instant,
    ) -> Self {
        Self::with_fonts(config, Fonts::DEFAULT, now)
    }

    pub fn with_fonts(
        config: &Config,
        fonts: Fonts,
        now: Instant,
    ) -> Self {
        let size = Size::new(config.display.width, config.display.height);
        let layout = Layout::new(size, &fonts);
        let title = config.dashboard.title.clone();
        let title_width = text_width(&title, fonts.title_style());
        let history_len = size.width as usize;

        info!(
            width = size.width,
            height = size.height,
            content_y = layout.content_y,
            content_height = layout.content_height,
            "dashboard layout"
        );

        Self {
            frame: Frame::new(size),
            layout,
            fonts,
            screens: ScreenState::new(now, config.dashboard.rotation_interval()),
            scroll: ScrollState::new(
                now,
                size.width,
                title_width,
                config.dashboard.scroll_step,
                config.dashboard.scroll_interval(),
            ),
            title,
            cpu: MetricHistory::zeroed(history_len),
            memory: MetricHistory::zeroed(history_len),
            disk: MetricHistory::zeroed(history_len),
            policy: config.policy.clone(),
            ticks: 0,
        }
    }

    // =========================================================================
    // Tick
    // =========================================================================

    /// Advance timers, read the active screen's metrics and redraw the frame.
    pub fn tick<S: MetricSource>(
        &mut self,
        now: Instant,
        source: &mut S,
    ) -> Result<&Frame, DashboardError> {
        self.ticks += 1;

        if self.scroll.advance(now) {
            debug!("title wrapped");
        }

        self.frame.clear(BinaryColor::Off).ok();
        draw_text(
            &mut self.frame,
            &self.title,
            Point::new(self.scroll.offset(), self.layout.title_y),
            self.fonts.title_style(),
        );

        if self.screens.advance(now) {
            debug!(screen = self.screens.current().name(), "switched screen");
        }

        match self.screens.current() {
            Screen::Cpu => {
                let reading = read(Metric::Cpu, self.policy.cpu, source.cpu())?;
                if let Some(r) = reading.value() {
                    self.cpu.push(r.percent);
                }
                draw_gauge_screen(&mut self.frame, &self.layout, &self.fonts, &cpu_label(&reading), &self.cpu);
            }
            Screen::Memory => {
                let reading = read(Metric::Memory, self.policy.memory, source.memory())?;
                if let Some(r) = reading.value() {
                    self.memory.push(r.percent);
                }
                draw_gauge_screen(
                    &mut self.frame,
                    &self.layout,
                    &self.fonts,
                    &memory_label(&reading),
                    &self.memory,
                );
            }
            Screen::Disk => {
                let reading = read(Metric::Disk, self.policy.disk, source.disk())?;
                if let Some(r) = reading.value() {
                    self.disk.push(r.percent);
                }
                draw_gauge_screen(&mut self.frame, &self.layout, &self.fonts, &disk_label(&reading), &self.disk);
            }
            Screen::Containers => {
                let reading = read(Metric::Containers, self.policy.containers, source.containers())?;
                draw_containers_screen(&mut self.frame, &self.layout, &self.fonts, &reading);
            }
            Screen::SystemInfo => {
                let info = SystemInfo {
                    os_version: read(Metric::OsVersion, self.policy.os_version, source.os_version())?,
                    last_patched: read(Metric::LastPatched, self.policy.last_patched, source.last_patched())?,
                    reboot_pending: read(
                        Metric::RebootPending,
                        self.policy.reboot_pending,
                        source.reboot_pending(),
                    )?,
                };
                draw_system_info_screen(&mut self.frame, &self.layout, &self.fonts, &info);
            }
        }

        Ok(&self.frame)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn frame(&self) -> &Frame { &self.frame }

    #[inline]
    pub const fn layout(&self) -> &Layout { &self.layout }

    #[inline]
    pub const fn current_screen(&self) -> Screen { self.screens.current() }

    #[inline]
    pub const fn scroll_offset(&self) -> i32 { self.scroll.offset() }

    #[inline]
    pub const fn ticks(&self) -> u64 { self.ticks }

    /// Graph history for a gauge metric, `None` for the others.
    pub const fn history(
        &self,
        metric: Metric,
    ) -> Option<&MetricHistory> {
        match metric {
            Metric::Cpu => Some(&self.cpu),
            Metric::Memory => Some(&self.memory),
            Metric::Disk => Some(&self.disk),
            Metric::Containers | Metric::OsVersion | Metric::LastPatched | Metric::RebootPending => None,
        }
    }
}

fn read<T>(
    metric: Metric,
    policy: FailurePolicy,
    result: Result<T, MetricError>,
) -> Result<Reading<T>, DashboardError> {
    policy
        .apply(metric, result)
        .map_err(|source| DashboardError::MetricRead { metric, source })
}

// =============================================================================
// Unit Tests
// =============================================================================
