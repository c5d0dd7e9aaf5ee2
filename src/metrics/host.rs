//! Production metric source: shell commands plus two filesystem probes.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::parse::{parse_containers, parse_cpu, parse_disk, parse_memory, parse_os_version};
use super::{ContainerInfo, CpuReading, DiskReading, MemoryReading, MetricError, MetricSource};
use super::runner::CommandRunner;
use crate::config::CommandSection;

/// Reads host metrics by running the configured command lines.
pub struct HostMetrics<R> {
    runner: R,
    commands: CommandSection,
    timeout: Duration,
}

impl<R: CommandRunner> HostMetrics<R> {
    pub fn new(
        runner: R,
        commands: CommandSection,
        timeout: Duration,
    ) -> Self {
        Self {
            runner,
            commands,
            timeout,
        }
    }
}

impl<R: CommandRunner> MetricSource for HostMetrics<R> {
    fn cpu(&mut self) -> Result<CpuReading, MetricError> {
        parse_cpu(&self.runner.run(&self.commands.cpu, self.timeout)?)
    }

    fn memory(&mut self) -> Result<MemoryReading, MetricError> {
        parse_memory(&self.runner.run(&self.commands.memory, self.timeout)?)
    }

    fn disk(&mut self) -> Result<DiskReading, MetricError> {
        parse_disk(&self.runner.run(&self.commands.disk, self.timeout)?)
    }

    fn containers(&mut self) -> Result<Vec<ContainerInfo>, MetricError> {
        Ok(parse_containers(&self.runner.run(&self.commands.containers, self.timeout)?))
    }

    fn os_version(&mut self) -> Result<String, MetricError> {
        parse_os_version(&self.runner.run(&self.commands.os_version, self.timeout)?)
    }

    fn last_patched(&mut self) -> Result<DateTime<Local>, MetricError> {
        modified_time(&self.commands.patch_log)
    }

    fn reboot_pending(&mut self) -> Result<bool, MetricError> { Ok(self.commands.reboot_sentinel.is_file()) }
}

fn modified_time(path: &Path) -> Result<DateTime<Local>, MetricError> {
    let io_err = |source| MetricError::Io {
        path: path.display().to_string(),
        source,
    };
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).map_err(io_err)?;
    Ok(DateTime::<Local>::from(modified))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    /// Replays canned output keyed by command line.
    #[derive(Default)]
    struct CannedRunner {
        outputs: HashMap<String, String>,
        calls: Vec<(String, Duration)>,
    }

    impl CannedRunner {
        fn with(
            mut self,
            command: &str,
            output: &str,
        ) -> Self {
            self.outputs.insert(command.to_string(), output.to_string());
            self
        }
    }

    impl CommandRunner for CannedRunner {
        fn run(
            &mut self,
            command: &str,
            timeout: Duration,
        ) -> Result<String, MetricError> {
            self.calls.push((command.to_string(), timeout));
            self.outputs.get(command).cloned().ok_or_else(|| MetricError::Timeout {
                command: command.to_string(),
                timeout,
            })
        }
    }

    fn commands() -> CommandSection {
        CommandSection {
            cpu: "cpu".into(),
            memory: "mem".into(),
            disk: "disk".into(),
            containers: "ps".into(),
            os_version: "os".into(),
            patch_log: PathBuf::from("/nonexistent/history.log"),
            reboot_sentinel: PathBuf::from("/nonexistent/reboot-required"),
        }
    }

    #[test]
    fn test_reads_go_through_runner_with_timeout() {
        let runner = CannedRunner::default().with("cpu", "37.5\n").with("mem", "512 25.0");
        let mut host = HostMetrics::new(runner, commands(), Duration::from_millis(750));

        assert_eq!(host.cpu().unwrap().percent, 37.5);
        assert_eq!(host.memory().unwrap().used_mb, 512.0);
        assert_eq!(host.runner.calls.len(), 2);
        assert!(host.runner.calls.iter().all(|(_, t)| *t == Duration::from_millis(750)));
    }

    #[test]
    fn test_runner_failure_propagates() {
        let mut host = HostMetrics::new(CannedRunner::default(), commands(), Duration::from_secs(1));
        assert!(matches!(host.disk(), Err(MetricError::Timeout { .. })));
    }

    #[test]
    fn test_missing_patch_log_is_io_error() {
        let mut host = HostMetrics::new(CannedRunner::default(), commands(), Duration::from_secs(1));
        assert!(matches!(host.last_patched(), Err(MetricError::Io { .. })));
    }

    #[test]
    fn test_patch_log_mtime() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut cmds = commands();
        cmds.patch_log = file.path().to_path_buf();
        let mut host = HostMetrics::new(CannedRunner::default(), cmds, Duration::from_secs(1));

        let patched = host.last_patched().unwrap();
        let age = Local::now().signed_duration_since(patched);
        assert!(age.num_seconds().abs() < 60);
    }

    #[test]
    fn test_reboot_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let sentinel = dir.path().join("reboot-required");
        let mut cmds = commands();
        cmds.reboot_sentinel = sentinel.clone();
        let mut host = HostMetrics::new(CannedRunner::default(), cmds, Duration::from_secs(1));

        assert!(!host.reboot_pending().unwrap());
        std::fs::write(&sentinel, "").unwrap();
        assert!(host.reboot_pending().unwrap());
    }
}
