//! dailysafe - Daily Check-in Client
//!
//! A user signs in, confirms once a day that they are safe, and can look up
//! whether today is already confirmed. The authoritative state lives on a
//! backend exposing `/checkin` and `/status`; identity comes from Firebase
//! Authentication.
//!
//! # Module Structure
//!
//! - **`shared`** - Toolkit-independent types
//!   - Check-in status and backend body interpretation
//!   - Notice slot, localized text, configuration, error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Auth provider seam and Firebase implementation
//!   - Backend client and action dispatchers
//!   - Views and theme
//!
//! # Configuration
//!
//! `DAILYSAFE_API_BASE` must point at the backend; the binary refuses to start
//! without it. See `shared::config` for the full list of settings.
//!
//! # Thread Safety
//!
//! Actions run on a tokio runtime and write to a shared `StateStore`; the egui
//! thread reads a snapshot of it every frame. Concurrent actions are neither
//! debounced nor sequenced, so the last write wins.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
