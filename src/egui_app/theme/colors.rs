//! Color Constants
//!
//! A light, plain page: dark text on white, with the notice box tinted by
//! severity.

use eframe::egui::Color32;

/// Page background
pub const PAGE_BG: Color32 = Color32::WHITE;

/// Body text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Secondary text (hints, status line)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);

/// Notice box border
pub const NOTICE_BORDER: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

/// Info notice text
pub const NOTICE_INFO_TEXT: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Info notice background
pub const NOTICE_INFO_BG: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);

/// Error notice text
pub const NOTICE_ERROR_TEXT: Color32 = Color32::from_rgb(0xB0, 0x00, 0x20);

/// Error notice background
pub const NOTICE_ERROR_BG: Color32 = Color32::from_rgb(0xFF, 0xEC, 0xEC);

/// Check-in button once today is confirmed
pub const BUTTON_CONFIRMED: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);
