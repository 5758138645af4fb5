//! Test environment builder for isolated s3publish testing.
//!
//! Provides `TestEnv` - temp directories for both the project and home, plus
//! helpers to run the s3publish binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the caller's shell never leaks in.
const CONFIG_VARS: &[&str] = &[
    "APP_NAME",
    "REACT_APP_NAME",
    "REACT_APP_S3_BUCKET",
    "AWS_REGION",
    "S3PUBLISH_ENDPOINT",
    "RUST_LOG",
];

/// Result of running an s3publish command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the binary runs in
    pub project_root: TempDir,
    /// Directory used as HOME
    pub home_dir: TempDir,
    vars: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
            vars: Vec::new(),
        }
    }

    /// Environment with `APP_NAME=myapp`, a bucket, and a valid credentials file
    pub fn configured() -> Self {
        Self::new()
            .with_var("APP_NAME", "myapp")
            .with_var("REACT_APP_S3_BUCKET", "assets")
            .with_credentials(r#"{"key": "AKIATEST", "secret": "s3cr3t"}"#)
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.push((name.to_string(), value.to_string()));
        self
    }

    /// Write `~/.aws-creds.json`
    pub fn with_credentials(self, content: &str) -> Self {
        std::fs::write(self.home_path(".aws-creds.json"), content).expect("write credentials");
        self
    }

    /// Write a file under `build/static`
    pub fn with_asset(self, relative: &str, content: &str) -> Self {
        let path = self.project_path("build/static").join(relative);
        std::fs::create_dir_all(path.parent().expect("asset has a parent"))
            .expect("create asset dir");
        std::fs::write(path, content).expect("write asset");
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run s3publish from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_s3publish"));
        cmd.current_dir(cwd)
            .args(args)
            .env("S3PUBLISH_TEST_HOME", self.home_dir.path());

        for name in CONFIG_VARS {
            cmd.env_remove(name);
        }
        for (name, value) in &self.vars {
            cmd.env(name, value);
        }

        let output = cmd.output().expect("Failed to execute s3publish");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
