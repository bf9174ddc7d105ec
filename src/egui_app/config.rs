use std::path::PathBuf;

use crate::shared::config::{AppConfig, ConfigError, FileConfig, ENV_CONFIG};
use crate::shared::messages::{Locale, Messages};

const APP_DIR: &str = "dailysafe";
const SESSION_FILE: &str = "session.json";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    pub fn new(app: AppConfig) -> Self {
        Self { app }
    }

    /// Resolve the configuration from the config file, `.env` and the
    /// process environment. Fails when the backend base URL is missing.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = AppConfig::builder();
        if let Some(path) = config_file_path() {
            if let Some(file) = FileConfig::load(&path)? {
                tracing::debug!("[STARTUP] Loaded config file {}", path.display());
                builder = builder.file(file);
            }
        }
        let app = builder.env(|key| std::env::var(key).ok())?.build()?;
        Ok(Self { app })
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.app.api_base.trim_end_matches('/'), path)
    }

    pub fn status_url(&self) -> String {
        self.api_url("/status")
    }

    pub fn checkin_url(&self) -> String {
        self.api_url("/checkin")
    }

    pub fn locale(&self) -> Locale {
        self.app.locale
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.app.locale)
    }

    /// Where the auth provider keeps the signed-in session, `None` when
    /// persistence is off or the platform has no data directory
    pub fn session_file(&self) -> Option<PathBuf> {
        if !self.app.persist_session {
            return None;
        }
        dirs::data_dir().map(|dir| dir.join(APP_DIR).join(SESSION_FILE))
    }

    pub fn font_path(&self) -> Option<&PathBuf> {
        self.app.font_path.as_ref()
    }
}

fn config_file_path() -> Option<PathBuf> {
    match std::env::var(ENV_CONFIG) {
        Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
        _ => dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml")),
    }
}
