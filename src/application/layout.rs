//! Where every file of a build lives

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{TexwatchError, TexwatchResult};

/// Paths derived from the source file and the configured output directory.
///
/// The compiler names everything after the source's base name, so these are
/// fully determined before the first build runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    source: PathBuf,
    base: String,
    output_dir: PathBuf,
    published_basename: String,
}

impl ArtifactLayout {
    pub fn new(
        source: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        published_basename: impl Into<String>,
    ) -> TexwatchResult<Self> {
        let source = source.into();
        let base = source
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TexwatchError::InvalidSourceName {
                path: source.clone(),
            })?
            .to_string();

        Ok(Self {
            source,
            base,
            output_dir: output_dir.into(),
            published_basename: published_basename.into(),
        })
    }

    pub fn from_config(source: impl Into<PathBuf>, config: &Config) -> TexwatchResult<Self> {
        Self::new(
            source,
            &config.paths.output_dir,
            &config.paths.output_file_basename,
        )
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Source file name without directory or extension
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<outputdir>/<base>.fls`, written by the compiler's recorder
    pub fn manifest(&self) -> PathBuf {
        self.generated("fls")
    }

    /// `<outputdir>/<base>.pdf`
    pub fn artifact(&self) -> PathBuf {
        self.generated("pdf")
    }

    /// `<outputdir>/<base>.log`
    pub fn log(&self) -> PathBuf {
        self.generated("log")
    }

    /// `<outputdir>/<outputfilebasename>.pdf`
    pub fn published(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.pdf", self.published_basename))
    }

    /// `<outputdir>/<outputfilebasename>.log`
    pub fn published_log(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.log", self.published_basename))
    }

    fn generated(&self, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", self.base, extension))
    }
}
