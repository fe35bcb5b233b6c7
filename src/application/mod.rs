//! Application Layer
//!
//! The rebuild loop and its stages:
//!
//! - `manifest` - which files the last build read
//! - `watch` - fingerprints, change detection, progress events
//! - `build` - bibliography + compiler under a timeout
//! - `publish` - stable copy of the last good PDF and its log
//! - `driver` - ties them into a loop that never ends

pub mod build;
pub mod driver;
pub mod layout;
pub mod manifest;
pub mod publish;
pub mod watch;

pub use build::{BuildExecutor, BuildSettings};
pub use driver::{Iteration, LoopDriver};
pub use layout::ArtifactLayout;
pub use manifest::{parse_manifest, DependencyDiscoverer};
pub use publish::{ArtifactPublisher, PublishOutcome};
pub use watch::{Backoff, ChangeDetector, FingerprintStore, LoopEvent, PollReport};
