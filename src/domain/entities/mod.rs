//! Domain Entities
//!
//! - `TrackedFile` - last-seen fingerprint of a watched path
//! - `DependencySet` - the inputs one build read

mod dependency_set;
mod tracked_file;

pub use dependency_set::DependencySet;
pub use tracked_file::TrackedFile;
