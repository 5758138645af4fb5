//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the system API rather than
//! environment variables, so setting `HOME` for a child process has no
//! effect there. `S3PUBLISH_TEST_HOME` takes precedence on every platform.

use std::path::PathBuf;

/// Overrides the home directory used to locate `~/.aws-creds.json`.
pub const TEST_HOME_VAR: &str = "S3PUBLISH_TEST_HOME";

/// Home directory used to locate the credentials file, if known
pub fn home_dir() -> Option<PathBuf> {
    resolve_home(std::env::var(TEST_HOME_VAR).ok())
}

fn resolve_home(override_dir: Option<String>) -> Option<PathBuf> {
    override_dir
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
