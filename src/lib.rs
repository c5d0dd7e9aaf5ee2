// Crate-level lints: pixel math casts between u32, i32 and f32 are intentional
#![allow(clippy::cast_possible_truncation)] // f32->i32 graph offsets, u128->u64 millis
#![allow(clippy::cast_precision_loss)] // u32->f32 plot heights
#![allow(clippy::cast_possible_wrap)] // u32->i32 display coordinates
#![allow(clippy::cast_sign_loss)] // i32->u32 where the value is clamped non-negative

//! Host metrics dashboard for SSD1306 128x64 OLED displays.
//!
//! A scrolling title sits above one of five rotating screens:
//! - CPU load, memory and root disk usage, each with a rolling area graph
//! - Running Docker containers
//! - OS version, last patch time and pending reboot
//!
//! # Structure
//!
//! - [`config`]: Compile-time defaults and the TOML runtime configuration
//! - [`metrics`]: [`MetricSource`](metrics::MetricSource) trait, command runner,
//!   output parsers and per-metric failure policy
//! - [`state`]: Metric histories, screen rotation and title scroll
//! - [`styles`]: Fonts and the font-derived [`Layout`](styles::Layout)
//! - [`widgets`] / [`screens`]: Drawing, generic over any `BinaryColor` target
//! - [`frame`]: The in-memory framebuffer every tick draws into
//! - [`dashboard`]: Owned state plus [`Dashboard::tick`](dashboard::Dashboard::tick)
//! - [`display`]: SSD1306, PNG and window sinks
//! - [`run`] / [`stop`]: Blocking loop and its stop signal
//!
//! Rendering never touches hardware: `tick` draws into a [`Frame`](frame::Frame)
//! and the run loop hands that frame to a [`DisplaySink`](display::DisplaySink).

pub mod config;
pub mod dashboard;
pub mod display;
pub mod frame;
pub mod metrics;
pub mod run;
pub mod screens;
pub mod state;
pub mod stop;
pub mod styles;
pub mod widgets;

pub use dashboard::{Dashboard, DashboardError};
pub use run::{RunOptions, run};
pub use stop::{StopSignal, StopTrigger};
