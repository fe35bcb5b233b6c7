//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod process_runner;

pub use file_system::{FileSystem, FsError, FsResult};
pub use process_runner::{CommandLine, ProcessOutcome, ProcessRunner};
