//! egui Native Desktop App Module
//!
//! The daily check-in client: an egui window over a UI-independent action
//! layer.
//!
//! # Architecture
//!
//! - **`config`** - Resolved configuration and endpoint URLs
//! - **`auth`** - `AuthProvider` seam and the `Session` holder
//! - **`firebase`** - Firebase Authentication over its REST API
//! - **`api`** - `/checkin` and `/status` client
//! - **`actions`** - signup, login, logout, checkin, status, session watcher
//! - **`state`** - Shared store and the per-window `AppState`
//! - **`views`** - egui rendering
//! - **`theme`** - Colors, fonts and frames
//! - **`main`** - Binary entry point
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dailysafe::egui_app::{Actions, CheckinApi, Config, FirebaseAuth, FirebaseSettings, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let auth = FirebaseAuth::new(FirebaseSettings::from(config.app()), None);
//! let actions = Actions::new(
//!     Session::new(Arc::new(auth)),
//!     CheckinApi::new(config.clone()),
//!     config.messages(),
//! );
//! tokio::spawn(actions.clone().watch_session());
//! actions.checkin().await;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod api;
pub mod auth;
pub mod config;
pub mod firebase;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use actions::Actions;
pub use api::CheckinApi;
pub use auth::{AuthProvider, Session, SessionUser};
pub use config::Config;
pub use firebase::{FirebaseAuth, FirebaseSettings, SessionFile};
pub use state::{AppState, Snapshot, StateStore};
