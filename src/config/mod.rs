//! Configuration module for texwatch
//!
//! Configuration hierarchy:
//! 1. Environment variables (TEXWATCH_*)
//! 2. Project config (./texwatch.toml)
//! 3. User config (<config dir>/texwatch/config.toml)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, OutputFormat, PathsConfig, WatchConfig};
