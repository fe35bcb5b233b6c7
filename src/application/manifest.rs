//! Dependency discovery from the compiler's recorder file
//!
//! With `-recorder`, the compiler writes `<base>.fls` listing every file it
//! opened, one record per line:
//!
//! ```text
//! PWD /home/me/thesis
//! INPUT /usr/share/texmf/tex/latex/base/article.cls
//! INPUT ./chapter1.tex
//! OUTPUT output/thesis.aux
//! ```
//!
//! Only relative `INPUT` records matter. Absolute paths are system and
//! package files, which should not cause rebuilds.

use std::path::{Path, PathBuf};

use crate::domain::entities::DependencySet;
use crate::domain::ports::FileSystem;

use super::watch::LoopEvent;

const INPUT_MARKER: &str = "INPUT";

/// Extract the relative input references from manifest text
pub fn parse_manifest(content: &str) -> DependencySet {
    content
        .lines()
        .filter_map(|line| line.trim_end().split_once(' '))
        .filter(|(tag, path)| *tag == INPUT_MARKER && !path.is_empty() && !is_absolute(path))
        .map(|(_, path)| path)
        .collect()
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || Path::new(path).is_absolute()
}

/// Reads the manifest left behind by the previous build
#[derive(Debug)]
pub struct DependencyDiscoverer<F> {
    fs: F,
    manifest: PathBuf,
}

impl<F: FileSystem> DependencyDiscoverer<F> {
    pub fn new(fs: F, manifest: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            manifest: manifest.into(),
        }
    }

    /// Inputs of the last build, or an empty set if that is unknown.
    ///
    /// Never cached: every build rewrites the manifest.
    pub fn discover(&self, on_event: &impl Fn(LoopEvent)) -> DependencySet {
        match self.fs.read_to_string(&self.manifest) {
            Ok(content) => parse_manifest(&content),
            Err(_) => {
                on_event(LoopEvent::ManifestMissing {
                    path: self.manifest.display().to_string(),
                });
                DependencySet::new()
            }
        }
    }
}
