//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TexwatchResult;

use super::loader::{self, ConfigWarning};

/// Where build artifacts land and what the published copy is called
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    #[serde(rename = "outputdir")]
    pub output_dir: PathBuf,

    #[serde(rename = "outputfilebasename")]
    pub output_file_basename: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            output_file_basename: "build".to_string(),
        }
    }
}

/// External tools and the compile ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Compiler argv prefix; recorder/interaction/output flags are appended
    pub compiler: Vec<String>,

    /// Bibliography processor argv prefix; the aux target is appended
    pub bibliography: Vec<String>,

    pub compile_timeout_secs: u64,

    pub compile_poll_ms: u64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: vec!["pdflatex".to_string()],
            bibliography: vec!["bibtex".to_string()],
            compile_timeout_secs: 30,
            compile_poll_ms: 200,
        }
    }
}

/// Polling backoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub initial_interval_ms: u64,
    pub backoff_step_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 50,
            backoff_step_ms: 1,
        }
    }
}

/// Progress output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub build: BuildConfig,
    pub watch: WatchConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TexwatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TexwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply the
    /// environment.
    pub fn load_layered(project_root: &Path) -> TexwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root)
    }

    /// Apply environment variable overrides (TEXWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn compile_timeout(&self) -> Duration {
        Duration::from_secs(self.build.compile_timeout_secs)
    }

    pub fn compile_poll(&self) -> Duration {
        Duration::from_millis(self.build.compile_poll_ms)
    }

    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.watch.initial_interval_ms)
    }

    pub fn backoff_step(&self) -> Duration {
        Duration::from_millis(self.watch.backoff_step_ms)
    }
}
