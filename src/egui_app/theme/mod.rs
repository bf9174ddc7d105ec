//! Theme Module
//!
//! Colors, global visuals, font installation and frame builders.
//!
//! # Usage
//!
//! ```rust,no_run
//! use dailysafe::egui_app::theme::styles;
//!
//! # fn setup(ctx: &eframe::egui::Context) {
//! styles::apply_global_theme(ctx);
//! styles::install_fonts(ctx, None);
//! # }
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
