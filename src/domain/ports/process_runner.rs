//! ProcessRunner port - running the external TeX tools
//!
//! Standard streams are always discarded and exit codes are never
//! interpreted: the only thing the loop cares about is whether the process
//! finished in time.

use std::ffi::OsString;
use std::fmt;
use std::time::Duration;

use crate::error::{TexwatchError, TexwatchResult};

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Build from a configured argv (`["pdflatex"]`, `["sh", "fake.sh"]`)
    pub fn from_argv(argv: &[String], what: &'static str) -> TexwatchResult<Self> {
        let (program, rest) = argv
            .split_first()
            .ok_or(TexwatchError::EmptyCommand { what })?;
        Ok(Self::new(program).args(rest))
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a bounded run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The process exited on its own (status ignored)
    Completed { elapsed: Duration },
    /// The ceiling was hit and the process was killed
    TimedOut { elapsed: Duration },
}

/// Abstract process launcher
pub trait ProcessRunner {
    /// Run to completion with no time limit
    fn run(&self, command: &CommandLine) -> TexwatchResult<()>;

    /// Run, checking for exit every `poll`; kill once `timeout` has elapsed
    fn run_with_timeout(
        &self,
        command: &CommandLine,
        timeout: Duration,
        poll: Duration,
    ) -> TexwatchResult<ProcessOutcome>;
}
