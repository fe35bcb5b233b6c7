//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TexwatchError, TexwatchResult};

use super::types::{ColorMode, Config, OutputFormat};

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "texwatch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TexwatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TexwatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config if present, otherwise user config, otherwise defaults.
///
/// A config file that exists but does not parse is an error.
pub fn load_layered(project_root: &Path) -> TexwatchResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|d| d.join("texwatch").join("config.toml")),
    ];

    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (TEXWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(dir) = get_env("TEXWATCH_OUTPUT_DIR").filter(|v| !v.is_empty()) {
        config.paths.output_dir = PathBuf::from(dir);
    }

    if let Some(name) = get_env("TEXWATCH_OUTPUT_BASENAME").filter(|v| !v.is_empty()) {
        config.paths.output_file_basename = name;
    }

    if let Some(argv) = get_env("TEXWATCH_COMPILER").and_then(|v| split_command(&v)) {
        config.build.compiler = argv;
    }

    if let Some(argv) = get_env("TEXWATCH_BIBLIOGRAPHY").and_then(|v| split_command(&v)) {
        config.build.bibliography = argv;
    }

    if let Some(secs) = get_env("TEXWATCH_COMPILE_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok())
    {
        config.build.compile_timeout_secs = secs;
    }

    if let Some(format) = get_env("TEXWATCH_FORMAT") {
        config.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    if get_env("NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

/// Whitespace-split command line; `None` when blank
fn split_command(value: &str) -> Option<Vec<String>> {
    let argv: Vec<String> = value.split_whitespace().map(str::to_string).collect();
    (!argv.is_empty()).then_some(argv)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "outputdir",
        "outputfilebasename",
        "build",
        "compiler",
        "bibliography",
        "compile_timeout_secs",
        "compile_poll_ms",
        "watch",
        "initial_interval_ms",
        "backoff_step_ms",
        "output",
        "format",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
