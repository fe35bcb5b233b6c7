//! Test doubles for the domain ports
//!
//! Both share state through `Arc<Mutex<_>>` so a clone handed to the code
//! under test and the clone kept by the test see the same files.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::ports::process_runner::{CommandLine, ProcessOutcome, ProcessRunner};
use crate::domain::value_objects::ContentHash;
use crate::error::TexwatchResult;

#[derive(Debug, Clone)]
struct MockFile {
    content: Vec<u8>,
    modified: SystemTime,
}

#[derive(Debug, Default)]
struct MockState {
    files: BTreeMap<PathBuf, MockFile>,
    clock: u64,
    broken: HashSet<PathBuf>,
    unhashable: HashSet<PathBuf>,
    operations: Vec<String>,
}

impl MockState {
    /// Every mutation gets a strictly later timestamp
    fn tick(&mut self) -> SystemTime {
        self.clock += 1;
        SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000 + self.clock)
    }
}

/// In-memory file system with a logical clock for timestamps
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a file, advancing its timestamp
    pub fn write(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let mut state = self.state.lock().unwrap();
        let modified = state.tick();
        state.files.insert(
            path.as_ref().to_path_buf(),
            MockFile {
                content: content.as_ref().to_vec(),
                modified,
            },
        );
    }

    /// Advance the timestamp without changing content
    pub fn touch(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        let modified = state.tick();
        if let Some(file) = state.files.get_mut(path.as_ref()) {
            file.modified = modified;
        }
    }

    /// Make metadata reads for `path` fail with a generic I/O error
    pub fn break_metadata(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        state.broken.insert(path.as_ref().to_path_buf());
    }

    /// Make only content reads for `path` fail; its timestamp stays readable
    pub fn break_hash(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        state.unhashable.insert(path.as_ref().to_path_buf());
    }

    /// `remove` and `copy` calls, in order
    pub fn operations(&self) -> Vec<String> {
        self.state.lock().unwrap().operations.clone()
    }

    pub fn delete(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().files.remove(path.as_ref());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let state = self.state.lock().unwrap();
        state.files.get(path.as_ref()).map(|f| f.content.clone())
    }

    pub fn modified_at(&self, path: impl AsRef<Path>) -> Option<SystemTime> {
        let state = self.state.lock().unwrap();
        state.files.get(path.as_ref()).map(|f| f.modified)
    }

    fn file(&self, path: &Path) -> FsResult<MockFile> {
        let state = self.state.lock().unwrap();
        if state.broken.contains(path) {
            return Err(FsError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other("device not ready"),
            });
        }
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let file = self.file(path)?;
        String::from_utf8(file.content).map_err(|e| FsError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        self.file(path).map(|f| f.modified)
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        if self.state.lock().unwrap().unhashable.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.file(path).map(|f| ContentHash::from_bytes(&f.content))
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.lock().unwrap();
        state.operations.push(format!("remove {}", path.display()));
        state
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let file = self.file(from)?;
        self.state
            .lock()
            .unwrap()
            .operations
            .push(format!("copy {} -> {}", from.display(), to.display()));
        self.write(to, file.content);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }
}

/// What the fake compiler does when invoked
#[derive(Debug, Clone, Default)]
pub struct FakeCompile {
    /// Files to write into the mock file system
    pub writes: Vec<(PathBuf, Vec<u8>)>,
    pub timed_out: bool,
}

/// Records commands and simulates compiler side effects
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    fs: MockFileSystem,
    compile: Arc<Mutex<FakeCompile>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeRunner {
    pub fn new(fs: MockFileSystem) -> Self {
        Self {
            fs,
            ..Self::default()
        }
    }

    pub fn on_compile(&self, compile: FakeCompile) {
        *self.compile.lock().unwrap() = compile;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, command: &CommandLine) -> TexwatchResult<()> {
        self.calls.lock().unwrap().push(command.to_string());
        Ok(())
    }

    fn run_with_timeout(
        &self,
        command: &CommandLine,
        timeout: Duration,
        _poll: Duration,
    ) -> TexwatchResult<ProcessOutcome> {
        self.calls.lock().unwrap().push(command.to_string());
        let compile = self.compile.lock().unwrap().clone();
        for (path, content) in &compile.writes {
            self.fs.write(path, content);
        }
        if compile.timed_out {
            Ok(ProcessOutcome::TimedOut { elapsed: timeout })
        } else {
            Ok(ProcessOutcome::Completed {
                elapsed: Duration::from_millis(5),
            })
        }
    }
}
