//! The set of files a build depends on

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Input files recorded by the last build.
///
/// Paths are kept exactly as the compiler wrote them (relative to the
/// working directory the compiler ran in).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    paths: BTreeSet<PathBuf>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        self.paths.insert(path.into())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// An empty set means dependency information is incomplete; widen it to
    /// the primary source so there is always something to watch.
    pub fn or_primary(self, primary: &Path) -> Self {
        if self.is_empty() {
            std::iter::once(primary.to_path_buf()).collect()
        } else {
            self
        }
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for DependencySet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}
