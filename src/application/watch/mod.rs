//! Change detection
//!
//! Decides when the document needs rebuilding:
//! - `FingerprintStore` - (mtime, hash) per path, kept for the process lifetime
//! - `ChangeDetector` - polls the dependency set with an adaptive backoff
//! - `LoopEvent` - progress events emitted by every stage of the loop
//!
//! A rebuild is warranted when a watched file's content hash changes, when a
//! watched file cannot be read, or when the output artifact is missing.
//! Timestamp-only changes (a `touch`) never trigger a build.

mod cache;
mod detector;
pub(crate) mod event;


pub use cache::FingerprintStore;
pub use detector::{Backoff, ChangeDetector, PollReport};
pub use event::LoopEvent;
