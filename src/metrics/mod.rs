//! Metric readings and the sources that produce them.
//!
//! The dashboard never touches processes or the filesystem directly. It asks a
//! [`MetricSource`] for one reading at a time and decides what to do with a
//! failure through the [`FailurePolicy`] configured for that metric.
//!
//! - [`parse`]: pure parsers for command output
//! - [`runner`]: [`CommandRunner`] trait and the timeout-bounded shell runner
//! - [`host`]: [`HostMetrics`], the production source built on a runner

pub mod host;
pub mod parse;
pub mod runner;

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Deserialize;
use tracing::warn;

pub use host::HostMetrics;
pub use runner::{CommandRunner, ShellRunner};

// =============================================================================
// Readings
// =============================================================================

/// CPU utilisation in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CpuReading {
    pub percent: f32,
}

/// Memory usage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryReading {
    pub used_mb: f32,
    pub percent: f32,
}

/// Root filesystem usage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskReading {
    pub used_gb: u64,
    pub percent: f32,
}

/// One running container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerInfo {
    pub name: String,
    pub created_at: String,
    pub status: String,
}

// =============================================================================
// Metric Identity
// =============================================================================

/// Every value the dashboard reads, used in errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
    Containers,
    OsVersion,
    LastPatched,
    RebootPending,
}

impl Metric {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Disk => "disk",
            Self::Containers => "containers",
            Self::OsVersion => "os_version",
            Self::LastPatched => "last_patched",
            Self::RebootPending => "reboot_pending",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Errors and Policy
// =============================================================================

/// Why a single metric read failed.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    ExitStatus { command: String, status: std::process::ExitStatus },

    #[error("`{command}` did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("unexpected output {output:?}: {reason}")]
    Parse { output: String, reason: &'static str },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MetricError {
    pub(crate) fn parse(
        output: &str,
        reason: &'static str,
    ) -> Self {
        Self::Parse {
            output: output.to_string(),
            reason,
        }
    }
}

/// What the dashboard does when a read fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the tick with an error; the run loop stops.
    Fatal,
    /// Draw nothing for the value.
    Silent,
    /// Draw a visible placeholder for the value.
    #[default]
    Placeholder,
}

/// Outcome of a read after its [`FailurePolicy`] has been applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Reading<T> {
    /// The read succeeded.
    Value(T),
    /// The read failed under [`FailurePolicy::Silent`].
    Hidden,
    /// The read failed under [`FailurePolicy::Placeholder`].
    Placeholder,
}

impl<T> Reading<T> {
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Hidden | Self::Placeholder => None,
        }
    }
}

impl FailurePolicy {
    /// Turn a raw read result into a [`Reading`], or hand the error back when
    /// the policy is [`FailurePolicy::Fatal`].
    pub fn apply<T>(
        self,
        metric: Metric,
        result: Result<T, MetricError>,
    ) -> Result<Reading<T>, MetricError> {
        match (result, self) {
            (Ok(value), _) => Ok(Reading::Value(value)),
            (Err(err), Self::Fatal) => Err(err),
            (Err(err), Self::Silent) => {
                warn!(%metric, error = %err, "read failed, hiding value");
                Ok(Reading::Hidden)
            }
            (Err(err), Self::Placeholder) => {
                warn!(%metric, error = %err, "read failed, showing placeholder");
                Ok(Reading::Placeholder)
            }
        }
    }
}

// =============================================================================
// Source Trait
// =============================================================================

/// Capability the dashboard reads metrics through.
///
/// Each call blocks until the reading is available or fails. Implementations
/// bound the wait themselves (see [`ShellRunner`]).
pub trait MetricSource {
    fn cpu(&mut self) -> Result<CpuReading, MetricError>;

    fn memory(&mut self) -> Result<MemoryReading, MetricError>;

    fn disk(&mut self) -> Result<DiskReading, MetricError>;

    fn containers(&mut self) -> Result<Vec<ContainerInfo>, MetricError>;

    fn os_version(&mut self) -> Result<String, MetricError>;

    fn last_patched(&mut self) -> Result<DateTime<Local>, MetricError>;

    fn reboot_pending(&mut self) -> Result<bool, MetricError>;
}

impl<S: MetricSource + ?Sized> MetricSource for &mut S {
    fn cpu(&mut self) -> Result<CpuReading, MetricError> { (**self).cpu() }

    fn memory(&mut self) -> Result<MemoryReading, MetricError> { (**self).memory() }

    fn disk(&mut self) -> Result<DiskReading, MetricError> { (**self).disk() }

    fn containers(&mut self) -> Result<Vec<ContainerInfo>, MetricError> { (**self).containers() }

    fn os_version(&mut self) -> Result<String, MetricError> { (**self).os_version() }

    fn last_patched(&mut self) -> Result<DateTime<Local>, MetricError> { (**self).last_patched() }

    fn reboot_pending(&mut self) -> Result<bool, MetricError> { (**self).reboot_pending() }
}
