//! Configuration resolution
//!
//! Merges the `--env` flag, process environment variables and the
//! credentials file into a [`DeployConfig`]. Checks run in a fixed order so
//! the first missing value is the one reported.

use std::path::{Path, PathBuf};

use super::types::{ConfigError, CredentialsFile, DeployConfig, DEFAULT_REGION};
use crate::infrastructure::fs::home_dir;

/// Name of the credentials file in the home directory
pub const CREDENTIALS_FILE_NAME: &str = ".aws-creds.json";

/// Application name variable (preferred)
pub const APP_NAME_VAR: &str = "APP_NAME";
/// Application name variable used by create-react-app style `.env` files
pub const REACT_APP_NAME_VAR: &str = "REACT_APP_NAME";
/// Bucket name variable; takes precedence over the credentials file
pub const BUCKET_VAR: &str = "REACT_APP_S3_BUCKET";
pub const REGION_VAR: &str = "AWS_REGION";
/// Custom endpoint for S3-compatible stores (MinIO, R2, ...)
pub const ENDPOINT_VAR: &str = "S3PUBLISH_ENDPOINT";

/// Location of `~/.aws-creds.json`, if the home directory is known
pub fn credentials_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CREDENTIALS_FILE_NAME))
}

/// Resolve configuration from the real process environment
pub fn from_process_env(deploy_env: Option<&str>) -> Result<DeployConfig, ConfigError> {
    resolve(
        deploy_env,
        |name| std::env::var(name).ok(),
        credentials_path().as_deref(),
    )
}

/// Resolve configuration from explicit inputs
///
/// `lookup` stands in for `std::env::var` so tests never touch the process
/// environment. `credentials_path` is `None` when no home directory exists.
pub fn resolve<F>(
    deploy_env: Option<&str>,
    lookup: F,
    credentials_path: Option<&Path>,
) -> Result<DeployConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup_non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let deploy_env = deploy_env
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingDeployEnv)?;

    let app_name = lookup_non_empty(APP_NAME_VAR)
        .or_else(|| lookup_non_empty(REACT_APP_NAME_VAR))
        .ok_or(ConfigError::MissingAppName)?;

    let path = credentials_path.ok_or(ConfigError::HomeDirUnavailable)?;
    let credentials = load_credentials(path)?;

    let key = credentials.key.unwrap_or_default();
    let secret = credentials.secret.unwrap_or_default();
    let bucket = lookup_non_empty(BUCKET_VAR)
        .or(credentials.bucket)
        .unwrap_or_default();

    let region = credentials
        .region
        .filter(|v| !v.trim().is_empty())
        .or_else(|| lookup_non_empty(REGION_VAR))
        .unwrap_or_else(|| DEFAULT_REGION.to_string());
    let endpoint = credentials
        .endpoint
        .filter(|v| !v.trim().is_empty())
        .or_else(|| lookup_non_empty(ENDPOINT_VAR));

    let config = DeployConfig::new(app_name, deploy_env, bucket, key, secret, path)?
        .with_region(region)
        .with_endpoint(endpoint);

    tracing::debug!(
        app = config.application_name(),
        env = config.deploy_environment(),
        bucket = config.bucket_name(),
        region = config.region(),
        "configuration resolved"
    );

    Ok(config)
}

/// Read and parse the credentials file
pub fn load_credentials(path: &Path) -> Result<CredentialsFile, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|_| ConfigError::CredentialsFileMissing {
            path: path.to_path_buf(),
        })?;

    CredentialsFile::parse(&content).map_err(|e| ConfigError::CredentialsFileMalformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
