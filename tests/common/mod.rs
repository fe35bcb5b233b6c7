//! Isolated environment for texwatch CLI tests.
//!
//! Every test gets its own project directory and HOME so neither the user's
//! config nor a real TeX installation leaks in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_texwatch"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("TEXWATCH_OUTPUT_DIR")
            .env_remove("TEXWATCH_OUTPUT_BASENAME")
            .env_remove("TEXWATCH_COMPILER")
            .env_remove("TEXWATCH_BIBLIOGRAPHY")
            .env_remove("TEXWATCH_FORMAT");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run to completion; only useful for invocations that fail at startup.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("failed to execute texwatch")
    }

    /// Start the watcher in the background.
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to start texwatch")
    }
}

/// Kill a running watcher and collect what it printed.
pub fn stop(mut child: Child) -> (String, String) {
    let _ = child.kill();
    let output = child.wait_with_output().expect("failed to collect output");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// Poll until `path` holds exactly `expected`.
pub fn wait_for_content(path: &Path, expected: &str, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if std::fs::read_to_string(path).is_ok_and(|c| c == expected) {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    false
}

/// A stand-in for pdflatex: copies the source to `<out>/<base>.pdf`, records
/// it in `<out>/<base>.fls` and writes a log.
///
/// Invoked as `sh <script> -recorder -interaction=nonstopmode -output-directory <out> <src>`.
pub const FAKE_COMPILER: &str = r#"out="$4"
src="$5"
base=$(basename "$src" .tex)
cp "$src" "$out/$base.pdf"
printf 'PWD %s\nINPUT %s\nOUTPUT %s/%s.pdf\n' "$(pwd)" "$src" "$out" "$base" > "$out/$base.fls"
echo "compiled $src" > "$out/$base.log"
"#;
