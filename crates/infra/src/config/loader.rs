//! Configuration loader
//!
//! Settings come from `GOTOSYNC_*` environment variables first; when the
//! required variables are incomplete the loader probes a list of config file
//! locations instead. Files may be JSON or TOML, detected by extension.
//!
//! ## Environment Variables
//! - `GOTOSYNC_GOTO_API_URL`: Base URL of the GoTo REST API
//! - `GOTOSYNC_GOTO_ACCESS_TOKEN`: Bearer token for the GoTo API
//! - `GOTOSYNC_GOTO_ORGANIZER_KEY`: Organizer whose events are synced
//! - `GOTOSYNC_GOTO_PRODUCTS`: Comma-separated enabled products (optional)
//! - `GOTOSYNC_CRM_API_URL`: Base URL of the CRM endpoint
//! - `GOTOSYNC_CRM_API_TOKEN`: Bearer token for the CRM endpoint
//! - `GOTOSYNC_HTTP_TIMEOUT_SECS`: Request timeout in seconds (optional)
//! - `GOTOSYNC_MAX_RETRIES`: Retries after the first attempt (optional)
//! - `GOTOSYNC_RETRY_BASE_DELAY_MS`: Base backoff delay (optional)
//! - `GOTOSYNC_STATE_DIR`: Directory for run lock files (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./gotosync.json` or `./gotosync.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use gotosync_domain::{Config, CrmConfig, GotoConfig, GotoSyncError, Result, SyncSettings};
use url::Url;

/// Load configuration, preferring environment variables over files.
///
/// # Errors
/// Returns `GotoSyncError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, probing for a config file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `GotoSyncError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let goto_api_url = env_var("GOTOSYNC_GOTO_API_URL")?;
    let goto_access_token = env_var("GOTOSYNC_GOTO_ACCESS_TOKEN")?;
    let goto_organizer_key = env_var("GOTOSYNC_GOTO_ORGANIZER_KEY")?;
    let enabled_products = env_list("GOTOSYNC_GOTO_PRODUCTS");

    let crm_api_url = env_var("GOTOSYNC_CRM_API_URL")?;
    let crm_api_token = env_var("GOTOSYNC_CRM_API_TOKEN")?;

    let defaults = SyncSettings::default();
    let http_timeout_secs = env_parse("GOTOSYNC_HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?;
    let max_retries = env_parse("GOTOSYNC_MAX_RETRIES", defaults.max_retries)?;
    let retry_base_delay_ms =
        env_parse("GOTOSYNC_RETRY_BASE_DELAY_MS", defaults.retry_base_delay_ms)?;
    let state_dir = std::env::var("GOTOSYNC_STATE_DIR").ok();

    validate(Config {
        goto: GotoConfig {
            api_url: goto_api_url,
            access_token: goto_access_token,
            organizer_key: goto_organizer_key,
            enabled_products,
        },
        crm: CrmConfig { api_url: crm_api_url, api_token: crm_api_token },
        sync: SyncSettings { http_timeout_secs, max_retries, retry_base_delay_ms, state_dir },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `GotoSyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(GotoSyncError::Config(format!("Config file not found: {}", p.display())))
        }
        None => probe_config_paths().ok_or_else(|| {
            GotoSyncError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GotoSyncError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `GotoSyncError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GotoSyncError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| GotoSyncError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(GotoSyncError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    validate(config)
}

/// Check URL fields and normalize them for the adapters.
///
/// Base URLs lose their trailing slash so that adapters can append
/// endpoint paths without producing double slashes.
fn validate(mut config: Config) -> Result<Config> {
    config.goto.api_url = normalize_url("goto.api_url", &config.goto.api_url)?;
    config.crm.api_url = normalize_url("crm.api_url", &config.crm.api_url)?;
    Ok(config)
}

fn normalize_url(field: &str, value: &str) -> Result<String> {
    let parsed = Url::parse(value)
        .map_err(|e| GotoSyncError::Config(format!("Invalid URL in {}: {}", field, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(GotoSyncError::Config(format!(
            "Unsupported URL scheme in {}: {}",
            field,
            parsed.scheme()
        )));
    }

    Ok(value.trim_end_matches('/').to_string())
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./gotosync.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.json", "config.toml", "gotosync.json", "gotosync.toml"];
    const PARENTS: [&str; 2] = ["..", "../.."];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    let mut candidates = Vec::new();
    for root in roots {
        for name in NAMES {
            candidates.push(root.join(name));
        }
        // only the generic names are probed in parent directories
        for parent in PARENTS {
            candidates.push(root.join(parent).join("config.json"));
            candidates.push(root.join(parent).join("config.toml"));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `GotoSyncError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        GotoSyncError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse a comma-separated environment variable into a list
///
/// Entries are trimmed and empty entries are dropped. Returns an empty
/// list when the variable is not set.
fn env_list(key: &str) -> Vec<String> {
    std::env::var(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an optional environment variable, keeping the default when unset
///
/// # Errors
/// Returns `GotoSyncError::Config` if the variable is set but does not
/// parse as the expected type.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| GotoSyncError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const REQUIRED_VARS: [&str; 6] = [
        "GOTOSYNC_GOTO_API_URL",
        "GOTOSYNC_GOTO_ACCESS_TOKEN",
        "GOTOSYNC_GOTO_ORGANIZER_KEY",
        "GOTOSYNC_CRM_API_URL",
        "GOTOSYNC_CRM_API_TOKEN",
        "GOTOSYNC_GOTO_PRODUCTS",
    ];

    const OPTIONAL_VARS: [&str; 4] = [
        "GOTOSYNC_HTTP_TIMEOUT_SECS",
        "GOTOSYNC_MAX_RETRIES",
        "GOTOSYNC_RETRY_BASE_DELAY_MS",
        "GOTOSYNC_STATE_DIR",
    ];

    fn clear_gotosync_env() {
        for key in REQUIRED_VARS.iter().chain(OPTIONAL_VARS.iter()) {
            std::env::remove_var(key);
        }
    }

    fn set_required_env() {
        std::env::set_var("GOTOSYNC_GOTO_API_URL", "https://api.getgo.com");
        std::env::set_var("GOTOSYNC_GOTO_ACCESS_TOKEN", "goto-token");
        std::env::set_var("GOTOSYNC_GOTO_ORGANIZER_KEY", "org-42");
        std::env::set_var("GOTOSYNC_CRM_API_URL", "https://crm.example.com");
        std::env::set_var("GOTOSYNC_CRM_API_TOKEN", "crm-token");
    }

    #[test]
    fn test_env_list_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("TEST_LIST_PRODUCTS", "webinar, meeting ,training");
        assert_eq!(env_list("TEST_LIST_PRODUCTS"), vec!["webinar", "meeting", "training"]);

        std::env::set_var("TEST_LIST_PRODUCTS", "webinar,,");
        assert_eq!(env_list("TEST_LIST_PRODUCTS"), vec!["webinar"]);

        std::env::set_var("TEST_LIST_PRODUCTS", "");
        assert!(env_list("TEST_LIST_PRODUCTS").is_empty());

        std::env::remove_var("TEST_LIST_PRODUCTS");
        assert!(env_list("TEST_LIST_PRODUCTS").is_empty());
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_gotosync_env();

        set_required_env();
        std::env::set_var("GOTOSYNC_GOTO_PRODUCTS", "webinar,meeting");
        std::env::set_var("GOTOSYNC_HTTP_TIMEOUT_SECS", "10");
        std::env::set_var("GOTOSYNC_MAX_RETRIES", "5");
        std::env::set_var("GOTOSYNC_RETRY_BASE_DELAY_MS", "100");
        std::env::set_var("GOTOSYNC_STATE_DIR", "/tmp/gotosync-state");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.goto.api_url, "https://api.getgo.com");
        assert_eq!(config.goto.access_token, "goto-token");
        assert_eq!(config.goto.organizer_key, "org-42");
        assert_eq!(config.goto.enabled_products, vec!["webinar", "meeting"]);
        assert_eq!(config.crm.api_url, "https://crm.example.com");
        assert_eq!(config.crm.api_token, "crm-token");
        assert_eq!(config.sync.http_timeout_secs, 10);
        assert_eq!(config.sync.max_retries, 5);
        assert_eq!(config.sync.retry_base_delay_ms, 100);
        assert_eq!(config.sync.state_dir, Some("/tmp/gotosync-state".to_string()));

        clear_gotosync_env();
    }

    #[test]
    fn test_load_from_env_defaults_for_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_gotosync_env();

        set_required_env();

        let config = load_from_env().expect("config");
        let defaults = SyncSettings::default();
        assert!(config.goto.enabled_products.is_empty());
        assert_eq!(config.sync.http_timeout_secs, defaults.http_timeout_secs);
        assert_eq!(config.sync.max_retries, defaults.max_retries);
        assert!(config.sync.state_dir.is_none());

        clear_gotosync_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_gotosync_env();

        set_required_env();
        std::env::remove_var("GOTOSYNC_CRM_API_TOKEN");

        let result = load_from_env();
        assert!(result.is_err(), "Should fail with missing env var");

        let err = result.unwrap_err();
        assert!(matches!(err, GotoSyncError::Config(_)), "Should be a Config error");

        clear_gotosync_env();
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_gotosync_env();

        set_required_env();
        std::env::set_var("GOTOSYNC_MAX_RETRIES", "not-a-number");

        let result = load_from_env();
        assert!(result.is_err(), "Should fail with invalid retry count");

        let err = result.unwrap_err();
        assert!(matches!(err, GotoSyncError::Config(_)), "Should be a Config error");

        clear_gotosync_env();
    }

    #[test]
    fn test_load_from_env_rejects_invalid_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_gotosync_env();

        set_required_env();
        std::env::set_var("GOTOSYNC_GOTO_API_URL", "not a url");

        let result = load_from_env();
        assert!(result.is_err(), "Should reject an unparseable URL");

        clear_gotosync_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "goto": {
                "api_url": "https://api.getgo.com",
                "access_token": "file-token",
                "organizer_key": "org-7",
                "enabled_products": ["webinar"]
            },
            "crm": {
                "api_url": "https://crm.example.com",
                "api_token": "crm-secret"
            },
            "sync": {
                "max_retries": 2
            }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from JSON file");

        let config = result.unwrap();
        assert_eq!(config.goto.organizer_key, "org-7");
        assert_eq!(config.goto.enabled_products, vec!["webinar"]);
        assert_eq!(config.sync.max_retries, 2);

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[goto]
api_url = "https://api.getgo.com"
access_token = "file-token"
organizer_key = "org-9"
enabled_products = ["webinar", "training"]

[crm]
api_url = "https://crm.example.com"
api_token = "crm-secret"

[sync]
http_timeout_secs = 15
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from TOML file");

        let config = result.unwrap();
        assert_eq!(config.goto.organizer_key, "org-9");
        assert_eq!(config.goto.enabled_products, vec!["webinar", "training"]);
        assert_eq!(config.sync.http_timeout_secs, 15);

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(result.is_err(), "Should fail when file not found");

        let err = result.unwrap_err();
        assert!(matches!(err, GotoSyncError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let invalid_json = r#"{ "this is": "not valid json" "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_json.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_trims_trailing_slash() {
        let json_content = r#"{
            "goto": {
                "api_url": "https://api.getgo.com/",
                "access_token": "token",
                "organizer_key": "org-1"
            },
            "crm": {
                "api_url": "https://crm.example.com/",
                "api_token": "secret"
            }
        }"#;

        let path = PathBuf::from("test.json");
        let config = parse_config(json_content, &path).expect("config");
        assert_eq!(config.goto.api_url, "https://api.getgo.com");
        assert_eq!(config.crm.api_url, "https://crm.example.com");
    }

    #[test]
    fn test_parse_config_rejects_unknown_scheme() {
        let json_content = r#"{
            "goto": {
                "api_url": "ftp://api.getgo.com",
                "access_token": "token",
                "organizer_key": "org-1"
            },
            "crm": {
                "api_url": "https://crm.example.com",
                "api_token": "secret"
            }
        }"#;

        let path = PathBuf::from("test.json");
        let result = parse_config(json_content, &path);
        assert!(result.is_err(), "Should reject non-http schemes");
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let content = "some content";
        let path = PathBuf::from("test.yaml");
        let result = parse_config(content, &path);
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
