//! Configuration for s3publish
//!
//! Configuration is read once at process entry:
//! - `--env` flag (deploy environment)
//! - `APP_NAME` / `REACT_APP_NAME`, `REACT_APP_S3_BUCKET`, `AWS_REGION`
//! - `~/.aws-creds.json` (`key`, `secret`, optional `bucket`, `region`, `endpoint`)
//!
//! The result is an immutable [`DeployConfig`] passed to the pipeline.

mod loader;
mod types;

pub use loader::{
    credentials_path, from_process_env, load_credentials, resolve, APP_NAME_VAR, BUCKET_VAR,
    CREDENTIALS_FILE_NAME, ENDPOINT_VAR, REACT_APP_NAME_VAR, REGION_VAR,
};
pub use types::{ConfigError, CredentialsFile, DeployConfig, DEFAULT_REGION};
