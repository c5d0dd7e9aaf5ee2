//! Command execution with a hard per-call timeout.
//!
//! A hung `docker ps` or `top` would otherwise stall the whole dashboard. The
//! runner polls the child until it exits or the timeout passes, then kills it.
//! On Unix every command runs in its own process group and the whole group is
//! killed, so no pipeline member outlives the timeout. Stdout is drained on a
//! helper thread so a chatty command cannot block on a full pipe while we wait.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::MetricError;

/// Poll interval while waiting for a child to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Runs a command line and returns its captured stdout.
pub trait CommandRunner {
    fn run(
        &mut self,
        command: &str,
        timeout: Duration,
    ) -> Result<String, MetricError>;
}

/// Runs command lines through `sh -c`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(
        &mut self,
        command: &str,
        timeout: Duration,
    ) -> Result<String, MetricError> {
        let started = Instant::now();
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        #[cfg(unix)]
        std::os::unix::process::CommandExt::process_group(&mut cmd, 0);

        let mut child = cmd
            .spawn()
            .map_err(|source| MetricError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let reader = child.stdout.take().map(|mut stdout| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                stdout.read_to_end(&mut buf).map(|_| buf)
            })
        });

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if started.elapsed() >= timeout => {
                    warn!(command, ?timeout, "command timed out, killing");
                    kill_tree(&mut child);
                    child.wait().ok();
                    return Err(MetricError::Timeout {
                        command: command.to_string(),
                        timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    return Err(MetricError::Spawn {
                        command: command.to_string(),
                        source,
                    });
                }
            }
        };

        let stdout = reader.map_or_else(|| Ok(Vec::new()), collect_stdout)?;

        debug!(command, elapsed = ?started.elapsed(), %status, "command finished");

        if !status.success() {
            return Err(MetricError::ExitStatus {
                command: command.to_string(),
                status,
            });
        }
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

type StdoutReader = thread::JoinHandle<std::io::Result<Vec<u8>>>;

/// Join the stdout drain thread. A failed read or a panicked reader is an
/// I/O error rather than empty output.
fn collect_stdout(reader: StdoutReader) -> Result<Vec<u8>, MetricError> {
    let io_err = |source| MetricError::Io {
        path: "stdout".to_string(),
        source,
    };
    match reader.join() {
        Ok(result) => result.map_err(io_err),
        Err(_) => Err(io_err(std::io::Error::other("stdout reader panicked"))),
    }
}

/// Kill the child and everything it spawned.
#[cfg(unix)]
fn kill_tree(child: &mut Child) {
    if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
        // SAFETY: `pgid` is the id of a child we spawned with `process_group(0)`
        // and have not reaped yet, so the group still exists and is ours.
        // killpg only sends a signal and touches no memory.
        unsafe {
            libc::killpg(pgid, libc::SIGKILL);
        }
    }
    child.kill().ok();
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) { child.kill().ok(); }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_panicked_reader_is_io_error() {
        let reader: StdoutReader = thread::spawn(|| panic!("reader blew up"));
        let err = collect_stdout(reader).unwrap_err();
        assert!(matches!(err, MetricError::Io { .. }));
        assert!(err.to_string().contains("panicked"));
    }

    #[test]
    fn test_run_captures_stdout() {
        let output = ShellRunner.run("echo '512 25.0'", TIMEOUT).unwrap();
        assert_eq!(output, "512 25.0\n");
    }

    #[test]
    fn test_run_pipeline() {
        let output = ShellRunner.run("printf 'a b\\n' | awk '{print $2}'", TIMEOUT).unwrap();
        assert_eq!(output.trim(), "b");
    }

    #[test]
    fn test_run_nonzero_exit() {
        let err = ShellRunner.run("exit 3", TIMEOUT).unwrap_err();
        assert!(matches!(err, MetricError::ExitStatus { .. }));
    }

    #[test]
    fn test_run_missing_tool() {
        let err = ShellRunner.run("definitely-not-a-real-tool-7f3a", TIMEOUT).unwrap_err();
        assert!(matches!(err, MetricError::ExitStatus { .. }), "sh reports 127 for unknown commands");
    }

    /// Pids of live processes whose command line contains `needle`.
    fn live_pids(needle: &str) -> Vec<String> {
        let output = Command::new("ps").args(["-eo", "pid=,stat=,args="]).output().unwrap();
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| line.contains(needle) && !line.contains("ps -eo"))
            .filter(|line| line.split_whitespace().nth(1).is_some_and(|stat| !stat.starts_with('Z')))
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_timeout_kills_whole_pipeline() {
        let err = ShellRunner.run("sleep 7.43 | cat", Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, MetricError::Timeout { .. }));

        thread::sleep(Duration::from_millis(300));
        assert!(live_pids("sleep 7.43").is_empty(), "pipeline member survived the timeout");
    }

    #[test]
    fn test_run_times_out() {
        let started = Instant::now();
        let err = ShellRunner.run("sleep 5", Duration::from_millis(100)).unwrap_err();
        assert!(matches!(err, MetricError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(3), "child should be killed promptly");
    }
}
