//! Process Implementations
//!
//! Concrete implementations of the ProcessRunner port.

mod system;

pub use system::SystemProcessRunner;
