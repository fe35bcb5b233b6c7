//! Progress events

use std::path::Path;
use std::time::Duration;

/// Everything the loop reports while it runs
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LoopEvent {
    WatchStarted {
        source: String,
        output_dir: String,
    },
    ManifestMissing {
        path: String,
    },
    DependenciesResolved {
        count: usize,
    },
    FilesChanged {
        paths: Vec<String>,
    },
    FilesTouched {
        paths: Vec<String>,
    },
    TimestampError {
        path: String,
        message: String,
    },
    HashError {
        path: String,
        message: String,
    },
    ArtifactMissing {
        path: String,
    },
    BuildStarted,
    BibliographyRan {
        target: String,
    },
    BibliographyFailed {
        target: String,
        message: String,
    },
    BuildFinished {
        elapsed_ms: u64,
    },
    BuildTimedOut {
        elapsed_ms: u64,
        command: String,
    },
    Published {
        artifact: String,
        published: String,
    },
    PublishSkipped {
        artifact: String,
    },
    LogPreserved {
        log: String,
        preserved: String,
    },
    Error {
        message: String,
    },
}

impl LoopEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Events that belong on stderr
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            LoopEvent::TimestampError { .. }
                | LoopEvent::HashError { .. }
                | LoopEvent::BibliographyFailed { .. }
                | LoopEvent::BuildTimedOut { .. }
                | LoopEvent::Error { .. }
        )
    }
}

pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}

pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
