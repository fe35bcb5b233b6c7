//! Process runner backed by `std::process`
//!
//! Children never inherit our terminal: stdin, stdout and stderr are all
//! attached to the null device. The compiler writes its diagnostics to its
//! own log file anyway, and an unread pipe could fill up and stall it.

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::domain::ports::process_runner::{CommandLine, ProcessOutcome, ProcessRunner};
use crate::error::{TexwatchError, TexwatchResult};

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn spawn(command: &CommandLine) -> TexwatchResult<ChildGuard> {
        Command::new(command.program())
            .args(command.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(ChildGuard::new)
            .map_err(|source| TexwatchError::Spawn {
                program: command.program().to_string_lossy().into_owned(),
                source,
            })
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandLine) -> TexwatchResult<()> {
        let mut child = Self::spawn(command)?;
        child.wait();
        Ok(())
    }

    fn run_with_timeout(
        &self,
        command: &CommandLine,
        timeout: Duration,
        poll: Duration,
    ) -> TexwatchResult<ProcessOutcome> {
        let mut child = Self::spawn(command)?;
        let start = Instant::now();

        loop {
            if child.has_exited() {
                return Ok(ProcessOutcome::Completed {
                    elapsed: start.elapsed(),
                });
            }

            let elapsed = start.elapsed();
            if elapsed > timeout {
                child.kill();
                return Ok(ProcessOutcome::TimedOut { elapsed });
            }

            std::thread::sleep(poll);
        }
    }
}

/// Owns a child and makes sure it is dead and reaped when dropped.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn has_exited(&mut self) -> bool {
        // A failing try_wait counts as still running; the timeout bounds it.
        if let Ok(Some(_)) = self.child.try_wait() {
            self.reaped = true;
        }
        self.reaped
    }

    fn wait(&mut self) {
        let _ = self.child.wait();
        self.reaped = true;
    }

    /// Kill failures (already exited) are ignored.
    fn kill(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            self.wait();
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        self.kill();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn run_waits_for_completion() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join("ran");
        let cmd = CommandLine::new("sh")
            .arg("-c")
            .arg(format!("sleep 0.1; touch '{}'", marker.display()));

        SystemProcessRunner::new().run(&cmd).unwrap();
        assert!(marker.exists());
    }

    #[test]
    fn run_ignores_exit_status() {
        let cmd = CommandLine::new("sh").arg("-c").arg("exit 3");
        assert!(SystemProcessRunner::new().run(&cmd).is_ok());
    }

    #[test]
    fn run_reports_missing_program() {
        let cmd = CommandLine::new("texwatch-definitely-not-a-program");
        let err = SystemProcessRunner::new().run(&cmd).unwrap_err();
        assert!(matches!(err, TexwatchError::Spawn { .. }));
    }

    #[test]
    fn run_with_timeout_completes_fast_process() {
        let cmd = CommandLine::new("true");
        let outcome = SystemProcessRunner::new()
            .run_with_timeout(&cmd, Duration::from_secs(5), Duration::from_millis(10))
            .unwrap();
        assert!(matches!(outcome, ProcessOutcome::Completed { .. }));
    }

    #[test]
    fn run_with_timeout_kills_hung_process() {
        let cmd = CommandLine::new("sleep").arg("30");
        let start = Instant::now();
        let outcome = SystemProcessRunner::new()
            .run_with_timeout(&cmd, Duration::from_millis(200), Duration::from_millis(20))
            .unwrap();

        match outcome {
            ProcessOutcome::TimedOut { elapsed } => assert!(elapsed >= Duration::from_millis(200)),
            other => panic!("expected timeout, got {other:?}"),
        }
        assert!(start.elapsed() < Duration::from_secs(10));
    }
}
