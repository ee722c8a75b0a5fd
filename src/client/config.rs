//! Client configuration support
//!
//! Handles parsing of `.studio-sync.toml` configuration files and
//! environment variable overrides. Environment always wins over the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ClientError;
use crate::validation::input::{validate_api_key, validate_project, validate_region};

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".studio-sync.toml";

/// Environment variable for the platform API key
pub const ENV_API_KEY: &str = "RELEVANCE_API_KEY";

/// Environment variable for the project identifier
pub const ENV_PROJECT: &str = "RELEVANCE_PROJECT";

/// Environment variable for the platform region
pub const ENV_REGION: &str = "RELEVANCE_REGION";

/// Credentials and region for the platform API.
///
/// Loaded from the environment, optionally layered on top of a
/// `.studio-sync.toml` file. All three fields are required; [`validate`]
/// rejects empty or malformed values before any request is built.
///
/// [`validate`]: ClientConfig::validate
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    /// Platform API key
    #[serde(default)]
    pub api_key: String,

    /// Project identifier
    #[serde(default)]
    pub project: String,

    /// Region the project lives in (selects the API host)
    #[serde(default)]
    pub region: String,
}

impl ClientConfig {
    /// Create a configuration from explicit values
    pub fn new(
        api_key: impl Into<String>,
        project: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            project: project.into(),
            region: region.into(),
        }
    }

    /// Load configuration from the environment only
    pub fn from_env() -> Result<Self, ClientError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory
    ///
    /// Looks for `.studio-sync.toml` in the directory, falls back to empty
    /// defaults if not found, then applies environment overrides and
    /// validates the result.
    pub fn load(dir: &Path) -> Result<Self, ClientError> {
        let config_path = dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ClientError::ConfigError(format!("Failed to read config: {}", e)))?;
            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ClientError> {
        toml::from_str(content)
            .map_err(|e| ClientError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(ENV_API_KEY) {
            self.api_key = api_key;
        }
        if let Ok(project) = std::env::var(ENV_PROJECT) {
            self.project = project;
        }
        if let Ok(region) = std::env::var(ENV_REGION) {
            self.region = region;
        }
    }

    /// Validate all fields, failing fast before any HTTP request
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_api_key(&self.api_key)?;
        validate_project(&self.project)?;
        validate_region(&self.region)?;
        Ok(())
    }

    /// Base host for the region, e.g. `https://api-f1db6c.stack.tryrelevance.com`
    pub fn api_host(&self) -> String {
        format!("https://api-{}.stack.tryrelevance.com", self.region)
    }

    /// Value for the `Authorization` header: `project:api_key`
    pub fn authorization(&self) -> String {
        format!("{}:{}", self.project, self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
api_key = "sk-test"
project = "proj-1"
region = "f1db6c"
"#;
        let config = ClientConfig::parse(toml).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.project, "proj-1");
        assert_eq!(config.region, "f1db6c");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config_fails_validation() {
        let config = ClientConfig::parse("project = \"proj-1\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_host() {
        let config = ClientConfig::new("k", "p", "us-east-1");
        assert_eq!(
            config.api_host(),
            "https://api-us-east-1.stack.tryrelevance.com"
        );
    }

    #[test]
    fn test_authorization_header_value() {
        let config = ClientConfig::new("secret", "proj", "f1db6c");
        assert_eq!(config.authorization(), "proj:secret");
    }

    #[test]
    fn test_validate_rejects_bad_region() {
        let config = ClientConfig::new("k", "p", "Not A Region");
        assert!(config.validate().is_err());
    }
}
