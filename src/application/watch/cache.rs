//! Fingerprint store

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::TrackedFile;

/// Last-seen fingerprint for every path ever watched.
///
/// Entries are never removed. A path that drops out of the dependency set
/// keeps its fingerprint and is validated against it again if it returns.
#[derive(Debug, Default)]
pub struct FingerprintStore {
    files: HashMap<PathBuf, TrackedFile>,
}

impl FingerprintStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn get(&self, path: &Path) -> Option<&TrackedFile> {
        self.files.get(path)
    }

    /// Fingerprint for `path`, created empty on first use
    pub fn entry(&mut self, path: &Path) -> &mut TrackedFile {
        self.files.entry(path.to_path_buf()).or_default()
    }
}
