//! texwatch - continuous LaTeX rebuilds
//!
//! Watches the files a document depends on, rebuilds it when their content
//! actually changes, and publishes the resulting PDF under a stable name only
//! after a build produced one. Viewers pointed at the published copy always
//! see the last complete build.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::{ArtifactLayout, LoopDriver, LoopEvent};
pub use config::Config;
pub use error::{TexwatchError, TexwatchResult};
pub use infrastructure::{LocalFs, SystemProcessRunner};
