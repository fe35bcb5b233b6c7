//! Polling change detector

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::entities::DependencySet;
use crate::domain::ports::FileSystem;

use super::cache::FingerprintStore;
use super::event::{display_path, LoopEvent};

/// Polling interval that grows while nothing happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    initial: Duration,
    step: Duration,
    current: Duration,
}

impl Backoff {
    pub fn new(initial: Duration, step: Duration) -> Self {
        Self {
            initial,
            step,
            current: initial,
        }
    }

    pub fn current(&self) -> Duration {
        self.current
    }

    /// Called after every quiet poll
    pub fn advance(&mut self) {
        self.current = self.current.saturating_add(self.step);
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

/// What one pass over the dependency set found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Content hash differs from the recorded one
    pub changed: Vec<PathBuf>,
    /// Timestamp advanced but content is identical
    pub touched: Vec<PathBuf>,
    /// Timestamp or content could not be read
    pub unreadable: Vec<PathBuf>,
    pub artifact_missing: bool,
}

impl PollReport {
    pub fn should_build(&self) -> bool {
        !self.changed.is_empty() || !self.unreadable.is_empty() || self.artifact_missing
    }
}

/// Blocks until the document needs rebuilding
#[derive(Debug)]
pub struct ChangeDetector<F> {
    fs: F,
    backoff: Backoff,
}

impl<F: FileSystem> ChangeDetector<F> {
    pub fn new(fs: F, backoff: Backoff) -> Self {
        Self { fs, backoff }
    }

    pub fn backoff(&self) -> &Backoff {
        &self.backoff
    }

    /// Sleep, poll, repeat with a longer sleep, until a poll says build.
    ///
    /// The interval starts from scratch on every call, so responsiveness after
    /// a build does not depend on how long the build took.
    pub fn wait_for_change(
        &mut self,
        store: &mut FingerprintStore,
        deps: &DependencySet,
        artifact: &Path,
        on_event: &impl Fn(LoopEvent),
    ) -> PollReport {
        self.backoff.reset();
        loop {
            std::thread::sleep(self.backoff.current());
            let report = self.poll_once(store, deps, artifact, on_event);
            if report.should_build() {
                return report;
            }
            self.backoff.advance();
        }
    }

    /// One pass over every watched file plus the artifact check.
    pub fn poll_once(
        &self,
        store: &mut FingerprintStore,
        deps: &DependencySet,
        artifact: &Path,
        on_event: &impl Fn(LoopEvent),
    ) -> PollReport {
        let mut report = PollReport::default();

        for path in deps.iter() {
            let modified = match self.fs.modified(path) {
                Ok(modified) => modified,
                Err(e) => {
                    on_event(LoopEvent::TimestampError {
                        path: display_path(path),
                        message: e.to_string(),
                    });
                    report.unreadable.push(path.to_path_buf());
                    continue;
                }
            };

            let tracked = store.entry(path);
            // Record the new time before hashing so the same timestamp is
            // never hashed twice.
            if !tracked.advance_timestamp(modified) {
                continue;
            }

            match self.fs.hash(path) {
                Ok(hash) if tracked.update_hash(hash) => report.changed.push(path.to_path_buf()),
                Ok(_) => report.touched.push(path.to_path_buf()),
                Err(e) => {
                    on_event(LoopEvent::HashError {
                        path: display_path(path),
                        message: e.to_string(),
                    });
                    report.unreadable.push(path.to_path_buf());
                }
            }
        }

        if !report.changed.is_empty() {
            on_event(LoopEvent::FilesChanged {
                paths: report.changed.iter().map(|p| display_path(p)).collect(),
            });
        } else if !report.touched.is_empty() {
            on_event(LoopEvent::FilesTouched {
                paths: report.touched.iter().map(|p| display_path(p)).collect(),
            });
        }

        if !self.fs.exists(artifact) {
            on_event(LoopEvent::ArtifactMissing {
                path: display_path(artifact),
            });
            report.artifact_missing = true;
        }

        report
    }
}
