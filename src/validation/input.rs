//! Input validation for client configuration values.
//!
//! These checks run before any request is built so that a bad credential or
//! region fails fast with a clear message instead of a confusing HTTP error.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum length for identifiers (project ids, regions, suffixes)
pub const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Region identifiers: lowercase alphanumeric with interior hyphens
static REGION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("Invalid regex"));

/// Errors that can occur during input validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Input is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Input exceeds maximum allowed length
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Input has invalid format
    #[error("{0}: {1}")]
    InvalidFormat(&'static str, String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate an API key: non-empty, no whitespace.
pub fn validate_api_key(api_key: &str) -> ValidationResult<()> {
    if api_key.is_empty() {
        return Err(ValidationError::Empty("api key"));
    }
    if api_key.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat(
            "api key",
            "must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate a project identifier: non-empty, length-bounded, no `:` (it
/// would corrupt the `project:api_key` authorization header).
pub fn validate_project(project: &str) -> ValidationResult<()> {
    if project.is_empty() {
        return Err(ValidationError::Empty("project"));
    }
    if project.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            field: "project",
            max: MAX_IDENTIFIER_LENGTH,
            actual: project.len(),
        });
    }
    if project.contains(':') {
        return Err(ValidationError::InvalidFormat(
            "project",
            "must not contain ':'".to_string(),
        ));
    }
    Ok(())
}

/// Validate a region identifier against the host naming rules.
pub fn validate_region(region: &str) -> ValidationResult<()> {
    if region.is_empty() {
        return Err(ValidationError::Empty("region"));
    }
    if region.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            field: "region",
            max: MAX_IDENTIFIER_LENGTH,
            actual: region.len(),
        });
    }
    if !REGION_RE.is_match(region) {
        return Err(ValidationError::InvalidFormat(
            "region",
            format!(
                "'{}' must be lowercase alphanumeric with optional hyphens",
                region
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("sk-abc123").is_ok());
        assert_eq!(validate_api_key(""), Err(ValidationError::Empty("api key")));
        assert!(validate_api_key("has space").is_err());
    }

    #[test]
    fn test_validate_project() {
        assert!(validate_project("my-project").is_ok());
        assert!(validate_project("").is_err());
        assert!(validate_project("bad:project").is_err());
        assert!(validate_project(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_region() {
        assert!(validate_region("f1db6c").is_ok());
        assert!(validate_region("us-east-1").is_ok());
        assert!(validate_region("").is_err());
        assert!(validate_region("US-EAST").is_err());
        assert!(validate_region("-leading").is_err());
        assert!(validate_region("bad.region").is_err());
    }
}
