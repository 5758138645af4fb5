//! Configuration types

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Region used when neither the credentials file nor `AWS_REGION` names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Errors raised while resolving configuration
///
/// All of these are fatal and are raised before any storage client exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Must specify a deploy env (--env=<deploy_env>).")]
    MissingDeployEnv,

    #[error("Must set APP_NAME (or REACT_APP_NAME) variable.")]
    MissingAppName,

    #[error("Must set REACT_APP_S3_BUCKET variable or a \"bucket\" field in {path}.")]
    MissingBucket { path: PathBuf },

    #[error("Could not determine user home directory.")]
    HomeDirUnavailable,

    #[error("Must have a .aws-creds.json file in your home dir ({path}).")]
    CredentialsFileMissing { path: PathBuf },

    #[error("Must have a properly formatted .aws-creds.json file in your home dir ({path}): {message}")]
    CredentialsFileMalformed { path: PathBuf, message: String },

    #[error("Missing \"{field}\" field in {path}.")]
    MissingCredentialField { field: &'static str, path: PathBuf },
}

/// Raw contents of `~/.aws-creds.json`
///
/// Every field is optional at the parse stage so that a missing field is
/// reported by name rather than as a generic JSON error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CredentialsFile {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl CredentialsFile {
    /// Parse the credentials file contents
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Resolved, validated deploy configuration
///
/// Built once at process entry and passed by reference to the pipeline.
/// The five core fields are guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct DeployConfig {
    application_name: String,
    deploy_environment: String,
    bucket_name: String,
    access_key_id: String,
    secret_access_key: String,
    region: String,
    endpoint: Option<String>,
}

impl DeployConfig {
    /// Create a config, rejecting empty values
    ///
    /// `credentials_path` is only used to make the error messages point at
    /// the file the value should have come from.
    pub fn new(
        application_name: impl Into<String>,
        deploy_environment: impl Into<String>,
        bucket_name: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        credentials_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let path = credentials_path.into();
        let deploy_environment =
            non_empty(deploy_environment.into()).ok_or(ConfigError::MissingDeployEnv)?;
        let application_name =
            non_empty(application_name.into()).ok_or(ConfigError::MissingAppName)?;
        let access_key_id =
            non_empty(access_key_id.into()).ok_or_else(|| ConfigError::MissingCredentialField {
                field: "key",
                path: path.clone(),
            })?;
        let secret_access_key = non_empty(secret_access_key.into()).ok_or_else(|| {
            ConfigError::MissingCredentialField {
                field: "secret",
                path: path.clone(),
            }
        })?;
        let bucket_name =
            non_empty(bucket_name.into()).ok_or(ConfigError::MissingBucket { path })?;

        Ok(Self {
            application_name,
            deploy_environment,
            bucket_name,
            access_key_id,
            secret_access_key,
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
        })
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        if let Some(region) = non_empty(region.into()) {
            self.region = region;
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint.and_then(non_empty);
        self
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn deploy_environment(&self) -> &str {
        &self.deploy_environment
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Key prefix every object is published under: `{app}/{env}/`
    pub fn destination_prefix(&self) -> String {
        format!("{}/{}/", self.application_name, self.deploy_environment)
    }
}

impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("application_name", &self.application_name)
            .field("deploy_environment", &self.deploy_environment)
            .field("bucket_name", &self.bucket_name)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
