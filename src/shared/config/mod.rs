//! Application configuration module
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables. Only the backend base URL is mandatory;
//! [`AppConfigBuilder::build`] refuses to produce a config without it.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::shared::messages::Locale;

/// Firebase Identity Toolkit endpoint
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";
/// Firebase Secure Token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://securetoken.googleapis.com";

pub const ENV_API_BASE: &str = "DAILYSAFE_API_BASE";
pub const ENV_FIREBASE_API_KEY: &str = "DAILYSAFE_FIREBASE_API_KEY";
pub const ENV_AUTH_URL: &str = "DAILYSAFE_AUTH_URL";
pub const ENV_TOKEN_URL: &str = "DAILYSAFE_TOKEN_URL";
pub const ENV_LOCALE: &str = "DAILYSAFE_LOCALE";
pub const ENV_PERSIST_SESSION: &str = "DAILYSAFE_PERSIST_SESSION";
pub const ENV_FONT: &str = "DAILYSAFE_FONT";
pub const ENV_CONFIG: &str = "DAILYSAFE_CONFIG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, `/status` and `/checkin` hang off it
    pub api_base: String,
    /// Firebase web API key
    pub firebase_api_key: Option<String>,
    /// Identity Toolkit base URL
    pub identity_url: String,
    /// Secure Token base URL
    pub token_url: String,
    /// Display language
    pub locale: Locale,
    /// Keep the signed-in session across restarts
    pub persist_session: bool,
    /// CJK-capable font to load into egui
    pub font_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.api_base)?;
        validate_url(&self.identity_url)?;
        validate_url(&self.token_url)?;
        Ok(())
    }
}

fn validate_url(raw: &str) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{scheme}'"
        ))),
    }
}

/// On-disk configuration, every key optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_base: Option<String>,
    pub locale: Option<Locale>,
    pub persist_session: Option<bool>,
    pub font_path: Option<PathBuf>,
    pub firebase: FirebaseFileConfig,
}

/// `[firebase]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FirebaseFileConfig {
    pub api_key: Option<String>,
    pub identity_url: Option<String>,
    pub token_url: Option<String>,
}

impl FileConfig {
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `path`, `Ok(None)` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_base: Option<String>,
    firebase_api_key: Option<String>,
    identity_url: Option<String>,
    token_url: Option<String>,
    locale: Option<Locale>,
    persist_session: Option<bool>,
    font_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the backend base URL
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    pub fn firebase_api_key(mut self, key: impl Into<String>) -> Self {
        self.firebase_api_key = Some(key.into());
        self
    }

    pub fn identity_url(mut self, url: impl Into<String>) -> Self {
        self.identity_url = Some(url.into());
        self
    }

    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn persist_session(mut self, persist: bool) -> Self {
        self.persist_session = Some(persist);
        self
    }

    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Layer a config file over what is already set
    pub fn file(mut self, file: FileConfig) -> Self {
        self.api_base = file.api_base.or(self.api_base);
        self.locale = file.locale.or(self.locale);
        self.persist_session = file.persist_session.or(self.persist_session);
        self.font_path = file.font_path.or(self.font_path);
        self.firebase_api_key = file.firebase.api_key.or(self.firebase_api_key);
        self.identity_url = file.firebase.identity_url.or(self.identity_url);
        self.token_url = file.firebase.token_url.or(self.token_url);
        self
    }

    /// Layer environment variables over what is already set.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`. Empty values count
    /// as unset.
    pub fn env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_API_BASE) {
            self.api_base = Some(v);
        }
        if let Some(v) = get(ENV_FIREBASE_API_KEY) {
            self.firebase_api_key = Some(v);
        }
        if let Some(v) = get(ENV_AUTH_URL) {
            self.identity_url = Some(v);
        }
        if let Some(v) = get(ENV_TOKEN_URL) {
            self.token_url = Some(v);
        }
        if let Some(v) = get(ENV_LOCALE) {
            self.locale = Some(v.parse()?);
        }
        if let Some(v) = get(ENV_PERSIST_SESSION) {
            self.persist_session = Some(parse_flag(ENV_PERSIST_SESSION, &v)?);
        }
        if let Some(v) = get(ENV_FONT) {
            self.font_path = Some(PathBuf::from(v));
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_base = self
            .api_base
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingValue(ENV_API_BASE))?;

        let config = AppConfig {
            api_base: api_base.trim().to_string(),
            firebase_api_key: self.firebase_api_key,
            identity_url: self
                .identity_url
                .unwrap_or_else(|| DEFAULT_IDENTITY_URL.to_string()),
            token_url: self
                .token_url
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            locale: self.locale.unwrap_or_default(),
            persist_session: self.persist_session.unwrap_or(true),
            font_path: self.font_path,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0} is not set")]
    MissingValue(&'static str),
    #[error("unsupported locale: {0}")]
    InvalidLocale(String),
    #[error("invalid value for {key}: {value}")]
    InvalidFlag { key: &'static str, value: String },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
