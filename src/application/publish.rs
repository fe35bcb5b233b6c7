//! Publishing the last good build
//!
//! Viewers keep the published PDF open by path. Replacing it with
//! delete-then-copy rather than truncating in place gives them a clean
//! "file replaced" signal.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsResult};

use super::layout::ArtifactLayout;
use super::watch::event::display_path;
use super::watch::LoopEvent;

/// Result of a publish attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The published copy now matches the artifact
    Published,
    /// No artifact; the previous published copy is untouched
    ArtifactMissing,
}

/// Copies build output to its stable location
#[derive(Debug)]
pub struct ArtifactPublisher<F> {
    fs: F,
    artifact: PathBuf,
    published: PathBuf,
    log: PathBuf,
    published_log: PathBuf,
}

impl<F: FileSystem> ArtifactPublisher<F> {
    pub fn new(fs: F, layout: &ArtifactLayout) -> Self {
        Self {
            fs,
            artifact: layout.artifact(),
            published: layout.published(),
            log: layout.log(),
            published_log: layout.published_log(),
        }
    }

    /// Replace the published copy with the artifact, if there is one.
    pub fn publish(&self) -> FsResult<PublishOutcome> {
        if !self.fs.exists(&self.artifact) {
            return Ok(PublishOutcome::ArtifactMissing);
        }
        self.replace(&self.artifact, &self.published)?;
        Ok(PublishOutcome::Published)
    }

    /// Keep a copy of the compiler log that only changes between builds.
    ///
    /// Runs after failed builds too; that log is the one worth reading.
    pub fn preserve_log(&self) -> FsResult<bool> {
        if !self.fs.exists(&self.log) {
            return Ok(false);
        }
        self.replace(&self.log, &self.published_log)?;
        Ok(true)
    }

    /// Publish and preserve the log, reporting instead of returning errors.
    pub fn publish_reporting(&self, on_event: &impl Fn(LoopEvent)) -> Option<PublishOutcome> {
        let outcome = match self.publish() {
            Ok(PublishOutcome::Published) => {
                on_event(LoopEvent::Published {
                    artifact: display_path(&self.artifact),
                    published: display_path(&self.published),
                });
                Some(PublishOutcome::Published)
            }
            Ok(PublishOutcome::ArtifactMissing) => {
                on_event(LoopEvent::PublishSkipped {
                    artifact: display_path(&self.artifact),
                });
                Some(PublishOutcome::ArtifactMissing)
            }
            Err(e) => {
                on_event(LoopEvent::Error {
                    message: format!("publish failed: {e}"),
                });
                None
            }
        };

        match self.preserve_log() {
            Ok(true) => on_event(LoopEvent::LogPreserved {
                log: display_path(&self.log),
                preserved: display_path(&self.published_log),
            }),
            Ok(false) => {}
            Err(e) => on_event(LoopEvent::Error {
                message: format!("log copy failed: {e}"),
            }),
        }

        outcome
    }

    fn replace(&self, from: &Path, to: &Path) -> FsResult<()> {
        // Source named like the published copy: already in place.
        if from == to {
            return Ok(());
        }
        if self.fs.exists(to) {
            self.fs.remove(to)?;
        }
        self.fs.copy(from, to)
    }
}
