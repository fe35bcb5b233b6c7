//! One build attempt
//!
//! Runs the bibliography processor over every aux file from earlier passes,
//! then the compiler under a wall-clock ceiling. Nothing here decides whether
//! the build worked; the publisher looks for the artifact afterwards.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::domain::ports::{CommandLine, FileSystem, ProcessOutcome, ProcessRunner};
use crate::error::TexwatchResult;

use super::layout::ArtifactLayout;
use super::watch::event::{display_path, millis};
use super::watch::LoopEvent;

/// Compiler flags: write the recorder manifest, never stop for input, and
/// put every generated file in the output directory.
const RECORDER_FLAG: &str = "-recorder";
const NONSTOP_FLAG: &str = "-interaction=nonstopmode";
const OUTPUT_DIR_FLAG: &str = "-output-directory";

/// Commands and limits for a build
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub compiler: Vec<String>,
    pub bibliography: Vec<String>,
    pub timeout: Duration,
    pub poll: Duration,
}

impl BuildSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            compiler: config.build.compiler.clone(),
            bibliography: config.build.bibliography.clone(),
            timeout: config.compile_timeout(),
            poll: config.compile_poll(),
        }
    }
}

/// Runs the external tools for one build
#[derive(Debug)]
pub struct BuildExecutor<F, R> {
    fs: F,
    runner: R,
    output_dir: PathBuf,
    compile: CommandLine,
    bibliography: CommandLine,
    timeout: Duration,
    poll: Duration,
}

impl<F: FileSystem, R: ProcessRunner> BuildExecutor<F, R> {
    /// Fails only when a configured command is empty.
    pub fn new(
        fs: F,
        runner: R,
        layout: &ArtifactLayout,
        settings: &BuildSettings,
    ) -> TexwatchResult<Self> {
        let compile = CommandLine::from_argv(&settings.compiler, "compiler")?
            .arg(RECORDER_FLAG)
            .arg(NONSTOP_FLAG)
            .arg(OUTPUT_DIR_FLAG)
            .arg(layout.output_dir())
            .arg(layout.source());
        let bibliography = CommandLine::from_argv(&settings.bibliography, "bibliography")?;

        Ok(Self {
            fs,
            runner,
            output_dir: layout.output_dir().to_path_buf(),
            compile,
            bibliography,
            timeout: settings.timeout,
            poll: settings.poll,
        })
    }

    pub fn compile_command(&self) -> &CommandLine {
        &self.compile
    }

    /// Perform one attempt. Failures are reported, never returned.
    pub fn build(&self, on_event: &impl Fn(LoopEvent)) {
        on_event(LoopEvent::BuildStarted);
        self.run_bibliography(on_event);
        self.run_compiler(on_event);
    }

    /// `<outputdir>/<stem>` for every `*.aux` in the output directory
    pub fn bibliography_targets(&self) -> Vec<PathBuf> {
        self.fs
            .list_files(&self.output_dir)
            .unwrap_or_default()
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "aux"))
            .map(|p| p.with_extension(""))
            .collect()
    }

    fn run_bibliography(&self, on_event: &impl Fn(LoopEvent)) {
        for target in self.bibliography_targets() {
            // Exit status is irrelevant: documents without citations fail here.
            let command = self.bibliography.clone().arg(&target);
            match self.runner.run(&command) {
                Ok(()) => on_event(LoopEvent::BibliographyRan {
                    target: display_path(&target),
                }),
                Err(e) => on_event(LoopEvent::BibliographyFailed {
                    target: display_path(&target),
                    message: e.to_string(),
                }),
            }
        }
    }

    fn run_compiler(&self, on_event: &impl Fn(LoopEvent)) {
        match self
            .runner
            .run_with_timeout(&self.compile, self.timeout, self.poll)
        {
            Ok(ProcessOutcome::Completed { elapsed }) => on_event(LoopEvent::BuildFinished {
                elapsed_ms: millis(elapsed),
            }),
            Ok(ProcessOutcome::TimedOut { elapsed }) => on_event(LoopEvent::BuildTimedOut {
                elapsed_ms: millis(elapsed),
                command: self.compile.to_string(),
            }),
            Err(e) => on_event(LoopEvent::Error {
                message: e.to_string(),
            }),
        }
    }
}
