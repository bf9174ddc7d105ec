//! Shared Module
//!
//! Platform-agnostic types: the check-in status model, the notice slot, user
//! facing text, configuration and error types. Nothing in here touches the
//! UI toolkit.

/// Check-in status and backend body interpretation
pub mod status;

/// Single-slot user message
pub mod notice;

/// Localized user-facing text
pub mod messages;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{ApiError, AuthError};
pub use messages::{Locale, Messages};
pub use notice::{Notice, NoticeKind};
pub use status::CheckinStatus;
