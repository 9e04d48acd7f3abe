use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_STORAGE_PATH: &str = "jobboard-storage.json";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the job-board client core.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every API path is appended to.
    pub api_base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Bearer token sent with every request, when logged in.
    pub auth_token: Option<String>,
    /// Command buffer of each slice.
    pub slice_buffer: usize,
    /// JSON file backing the durable notification list.
    pub storage_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            auth_token: None,
            slice_buffer: 32,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl AppConfig {
    /// Reads overrides from `JOBBOARD_*` environment variables.
    ///
    /// | variable | field |
    /// |---|---|
    /// | `JOBBOARD_API_URL` | `api_base_url` |
    /// | `JOBBOARD_TIMEOUT_SECS` | `request_timeout` |
    /// | `JOBBOARD_TOKEN` | `auth_token` |
    /// | `JOBBOARD_SLICE_BUFFER` | `slice_buffer` |
    /// | `JOBBOARD_STORAGE_PATH` | `storage_path` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("JOBBOARD_API_URL") {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = get("JOBBOARD_TIMEOUT_SECS") {
            let secs = parse_positive("JOBBOARD_TIMEOUT_SECS", &raw)?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(token) = get("JOBBOARD_TOKEN") {
            config.auth_token = Some(token.trim().to_string());
        }
        if let Some(raw) = get("JOBBOARD_SLICE_BUFFER") {
            let buffer = parse_positive("JOBBOARD_SLICE_BUFFER", &raw)?;
            config.slice_buffer = usize::try_from(buffer).map_err(|e| ConfigError::Invalid {
                key: "JOBBOARD_SLICE_BUFFER",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(path) = get("JOBBOARD_STORAGE_PATH") {
            config.storage_path = PathBuf::from(path.trim());
        }
        Ok(config)
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason,
    };
    let value: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if value == 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(value)
}
