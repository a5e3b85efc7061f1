//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.interview-exp/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::filter::DEFAULT_COMPANIES;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub list_path: Option<String>,
    pub timeout_secs: Option<u64>,
    pub session_cookie: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FiltersConfig {
    pub companies: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LIST_PATH: &str = "/api/v1/getInteviewExp";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_URL: &str = "INTERVIEW_EXP_URL";
pub const ENV_COOKIE: &str = "INTERVIEW_EXP_COOKIE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Full URL of the list endpoint.
    pub endpoint_url: String,
    pub timeout: Duration,
    pub session_cookie: Option<String>,
    pub companies: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.interview-exp/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".interview-exp").join("config.toml"))
}

/// Load config from an explicit path, or from `~/.interview-exp/config.toml`.
///
/// An explicit path must exist. The default path is generated with
/// commented-out settings when missing, and `AppConfig::default()` is
/// returned. A malformed file returns `ConfigError::Parse` either way.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(AppConfig::default());
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AppConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# interview-exp configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:3000"       # Or set INTERVIEW_EXP_URL (full endpoint URL)
# list_path = "/api/v1/getInteviewExp"
# timeout_secs = 30
# session_cookie = "token=..."             # Or set INTERVIEW_EXP_COOKIE

# [filters]
# companies = ["Google", "Microsoft", "Amazon", "Meta", "Netflix"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_url` is the `--url` flag (None = not specified).
pub fn resolve(config: &AppConfig, cli_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_url, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with environment lookups supplied by the caller.
pub fn resolve_with_env<F>(config: &AppConfig, cli_url: Option<&str>, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Endpoint: CLI → env → config (base_url + list_path) → default
    let endpoint_url = cli_url
        .map(|s| s.to_string())
        .or_else(|| env(ENV_URL))
        .unwrap_or_else(|| {
            let base = config.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
            let path = config.api.list_path.as_deref().unwrap_or(DEFAULT_LIST_PATH);
            join_url(base, path)
        });

    // Cookie: env → config
    let session_cookie = env(ENV_COOKIE)
        .or_else(|| config.api.session_cookie.clone())
        .filter(|c| !c.trim().is_empty());

    let timeout_secs = match config.api.timeout_secs {
        Some(0) => {
            warn!("timeout_secs = 0 is not allowed, using {}s", DEFAULT_TIMEOUT_SECS);
            DEFAULT_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let companies = config
        .filters
        .companies
        .clone()
        .unwrap_or_else(|| DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect());

    ResolvedConfig {
        endpoint_url,
        timeout: Duration::from_secs(timeout_secs),
        session_cookie,
        companies,
    }
}

/// Joins a base URL and a path with exactly one slash between them.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
