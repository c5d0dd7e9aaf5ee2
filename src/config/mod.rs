//! Application configuration.
//!
//! - `layout`: Display geometry and region padding constants
//! - `timing`: Tick, rotation, scroll and command timeout defaults
//!
//! [`Config`] is the runtime view: every field defaults to the constants above
//! and can be overridden from a TOML file loaded with [`load_from_file`].
//!
//! ```toml
//! [dashboard]
//! title = "nas-01"
//! rotation_ms = 5000
//!
//! [display]
//! backend = "png"
//! snapshot_path = "/tmp/oled.png"
//!
//! [policy]
//! cpu = "placeholder"
//! ```

pub mod layout;
pub mod timing;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::metrics::FailurePolicy;

pub use layout::{I2C_ADDRESS, I2C_BUS, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use timing::{COMMAND_TIMEOUT, ROTATION_INTERVAL, SCROLL_INTERVAL, SCROLL_STEP, TICK_INTERVAL};

// =============================================================================
// Errors
// =============================================================================

/// Errors arising from configuration loading or validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("IO error reading {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    /// A field has an out-of-range value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

// =============================================================================
// Sections
// =============================================================================

/// Display sink selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// SSD1306 over a Linux I2C bus.
    #[default]
    Ssd1306,
    /// Write every frame to a PNG file.
    Png,
    /// SDL desktop window (requires the `window` feature).
    Window,
}

/// Runtime configuration, every section optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dashboard: DashboardSection,
    pub display: DisplaySection,
    pub commands: CommandSection,
    pub policy: PolicySection,
}

/// Loop pacing and title text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardSection {
    /// Text scrolled across the top of the display.
    pub title: String,
    pub tick_ms: u64,
    pub rotation_ms: u64,
    pub scroll_ms: u64,
    pub scroll_step: i32,
    pub command_timeout_ms: u64,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            title: "Your hostname here".to_string(),
            tick_ms: TICK_INTERVAL.as_millis() as u64,
            rotation_ms: ROTATION_INTERVAL.as_millis() as u64,
            scroll_ms: SCROLL_INTERVAL.as_millis() as u64,
            scroll_step: SCROLL_STEP,
            command_timeout_ms: COMMAND_TIMEOUT.as_millis() as u64,
        }
    }
}

impl DashboardSection {
    pub const fn tick_interval(&self) -> Duration { Duration::from_millis(self.tick_ms) }

    pub const fn rotation_interval(&self) -> Duration { Duration::from_millis(self.rotation_ms) }

    pub const fn scroll_interval(&self) -> Duration { Duration::from_millis(self.scroll_ms) }

    pub const fn command_timeout(&self) -> Duration { Duration::from_millis(self.command_timeout_ms) }
}

/// Display geometry and sink settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub backend: Backend,
    pub width: u32,
    pub height: u32,
    pub i2c_bus: String,
    pub i2c_address: u8,
    /// Output file for the `png` backend.
    pub snapshot_path: PathBuf,
    /// Pixel scale for the `png` and `window` backends.
    pub preview_scale: u32,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            i2c_bus: I2C_BUS.to_string(),
            i2c_address: I2C_ADDRESS,
            snapshot_path: PathBuf::from("oled-sysmon.png"),
            preview_scale: 4,
        }
    }
}

/// Command lines and paths used by the host metric source.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandSection {
    pub cpu: String,
    pub memory: String,
    pub disk: String,
    pub containers: String,
    pub os_version: String,
    /// File whose modification time is the last patch time.
    pub patch_log: PathBuf,
    /// File whose existence means a reboot is pending.
    pub reboot_sentinel: PathBuf,
}

impl Default for CommandSection {
    fn default() -> Self {
        Self {
            cpu: "top -bn1 | grep 'Cpu(s)' | awk '{print $2 + $4}'".to_string(),
            memory: "free -m | awk 'NR==2{printf \"%s %s\", $3,$3*100/$2 }'".to_string(),
            disk: "df -BG / | awk 'NR==2{printf \"%d %s\", $3,$5}' | tr -d \"%\"".to_string(),
            containers: "docker ps --format '{{.Names}}|{{.CreatedAt}}|{{.Status}}'".to_string(),
            os_version: "lsb_release -ds".to_string(),
            patch_log: PathBuf::from("/var/log/apt/history.log"),
            reboot_sentinel: PathBuf::from("/var/run/reboot-required"),
        }
    }
}

/// Per-metric failure policy.
///
/// Defaults keep the historical behaviour: gauges are fatal, the container list
/// goes silently empty and system info falls back to placeholders.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicySection {
    pub cpu: FailurePolicy,
    pub memory: FailurePolicy,
    pub disk: FailurePolicy,
    pub containers: FailurePolicy,
    pub os_version: FailurePolicy,
    pub last_patched: FailurePolicy,
    pub reboot_pending: FailurePolicy,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            cpu: FailurePolicy::Fatal,
            memory: FailurePolicy::Fatal,
            disk: FailurePolicy::Fatal,
            containers: FailurePolicy::Silent,
            os_version: FailurePolicy::Placeholder,
            last_patched: FailurePolicy::Placeholder,
            reboot_pending: FailurePolicy::Placeholder,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load and validate a [`Config`] from a TOML file.
pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: path.display().to_string(),
        source: e,
    })?;

    load_from_str(&content, &path.display().to_string())
}

/// Load and validate a [`Config`] from a TOML string.
///
/// `source_name` only appears in error messages.
pub fn load_from_str(
    content: &str,
    source_name: &str,
) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
        file: source_name.to_string(),
        source: e,
    })?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Check range constraints the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.dashboard;
        nonzero("dashboard.tick_ms", d.tick_ms)?;
        nonzero("dashboard.rotation_ms", d.rotation_ms)?;
        nonzero("dashboard.scroll_ms", d.scroll_ms)?;
        nonzero("dashboard.command_timeout_ms", d.command_timeout_ms)?;
        if d.scroll_step <= 0 {
            return Err(ConfigError::InvalidField {
                field: "dashboard.scroll_step",
                value: d.scroll_step.to_string(),
                reason: "must be a positive pixel count",
            });
        }

        let disp = &self.display;
        nonzero("display.width", u64::from(disp.width))?;
        nonzero("display.height", u64::from(disp.height))?;
        nonzero("display.preview_scale", u64::from(disp.preview_scale))?;
        if disp.i2c_address > 0x7F {
            return Err(ConfigError::InvalidField {
                field: "display.i2c_address",
                value: format!("{:#04x}", disp.i2c_address),
                reason: "must be a 7-bit address",
            });
        }
        Ok(())
    }
}

fn nonzero(
    field: &'static str,
    value: u64,
) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidField {
            field,
            value: value.to_string(),
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
