//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system
//! - `process/` - external process execution

pub mod fs;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::SystemProcessRunner;
