//! Common test utilities for plasma-compose integration tests.
//!
//! `TestEnv` owns an isolated project directory with a package cache and
//! runs the CLI against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
            .collect()
    }
}

/// Isolated project with a `.compose/packages` cache
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("create project dir");
        fs::create_dir_all(project_root.path().join(".compose/packages"))
            .expect("create package cache");
        Self { project_root }
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn packages_root(&self) -> PathBuf {
        self.root().join(".compose/packages")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join(".plasma/compose/image/src")
    }

    pub fn package_root(&self, name: &str, target: &str) -> PathBuf {
        self.packages_root().join(name).join(target)
    }

    /// Write a file relative to a package's root (`<name>/<target>/<rel>`)
    pub fn write_package_file(&self, name: &str, target: &str, rel: &str, content: &str) {
        let path = self.package_root(name, target).join(rel);
        fs::create_dir_all(path.parent().expect("file has parent")).expect("create dirs");
        fs::write(path, content).expect("write package file");
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join("compose.toml"), content).expect("write compose.toml");
    }

    pub fn read_output(&self, rel: &str) -> String {
        fs::read_to_string(self.output_dir().join(rel)).expect("read output file")
    }

    pub fn output_exists(&self, rel: &str) -> bool {
        self.output_dir().join(rel).exists()
    }

    /// Run the CLI with `--project-root` pointing at this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_plasma-compose"));
        cmd.arg("--project-root").arg(self.root());
        cmd.args(args);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("PLASMA_COMPOSE_PACKAGES_DIR");
        cmd.env_remove("PLASMA_COMPOSE_OUTPUT_DIR");
        cmd.env_remove("PLASMA_COMPOSE_CLEAN");
        cmd.env("NO_COLOR", "1");

        let output = cmd.output().expect("run plasma-compose");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Sorted `/`-joined relative paths of every file under `root`
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .expect("entry under root")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}
