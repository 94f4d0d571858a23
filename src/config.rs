use config::{Config, ConfigError, Environment, File};
use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors raised while resolving configuration at startup
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API base URL is not configured (set API_BASE or SHORTLIST__API__BASE_URL)")]
    MissingApiBase,

    #[error("Invalid API base URL '{0}': {1}")]
    InvalidApiBase(String, String),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSettings {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

/// Validated base URL of the shortlisting API.
///
/// Always absolute http(s) and never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(SettingsError::MissingApiBase);
        }

        let url = Url::parse(trimmed)
            .map_err(|e| SettingsError::InvalidApiBase(trimmed.to_string(), e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SettingsError::InvalidApiBase(
                trimmed.to_string(),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an absolute path (`/stats`) onto the base
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    /// `{base}/resumes/{id}/download`, with the id encoded as one path segment
    pub fn resume_download(&self, resume_id: &str) -> String {
        self.join(&format!("/resumes/{}/download", urlencoding::encode(resume_id)))
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default, config/local)
    /// 3. Environment variables (prefixed with SHORTLIST__)
    /// 4. The bare API_BASE variable
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SHORTLIST__API__BASE_URL -> api.base_url
            .add_source(
                Environment::with_prefix("SHORTLIST")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Resolve the API base, failing fast when it is absent or blank
    pub fn api_base(&self) -> Result<ApiBase, SettingsError> {
        match self.api.base_url.as_deref() {
            Some(raw) => ApiBase::parse(raw),
            None => Err(SettingsError::MissingApiBase),
        }
    }
}

/// Apply the un-prefixed `API_BASE` variable on top of the layered config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_base) = std::env::var("API_BASE") {
        builder = builder.set_override("api.base_url", api_base)?;
    }

    builder.build()
}
