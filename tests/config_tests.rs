//! Client configuration integration tests

use studio_sync_sdk::client::ClientConfig;
use studio_sync_sdk::client::config::{CONFIG_FILENAME, ENV_API_KEY};
use tempfile::tempdir;

// File load and env override share the process environment, so they run
// sequentially inside one test.
#[test]
fn test_config_precedence() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILENAME),
        r#"
api_key = "file-key"
project = "file-project"
region = "f1db6c"
"#,
    )
    .unwrap();

    // File values only.
    let config = ClientConfig::load(dir.path()).unwrap();
    assert_eq!(config.api_key, "file-key");
    assert_eq!(config.project, "file-project");
    assert_eq!(config.region, "f1db6c");

    // Environment wins over the file.
    unsafe { std::env::set_var(ENV_API_KEY, "env-key") };
    let config = ClientConfig::load(dir.path()).unwrap();
    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.project, "file-project");
    unsafe { std::env::remove_var(ENV_API_KEY) };
}

#[test]
fn test_missing_config_fails_validation() {
    let dir = tempdir().unwrap();
    // No file, no env vars for project/region: validation rejects it.
    let result = ClientConfig::load(dir.path());
    assert!(result.is_err());
}

#[test]
fn test_host_and_authorization() {
    let config = ClientConfig::new("secret-key", "my-project", "bcbe5a");
    assert_eq!(config.api_host(), "https://api-bcbe5a.stack.tryrelevance.com");
    assert_eq!(config.authorization(), "my-project:secret-key");
}
