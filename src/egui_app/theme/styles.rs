//! Theme Styling Functions

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui::{self, CornerRadius, FontData, FontDefinitions, FontFamily, Stroke};

use super::colors;
use crate::shared::notice::{Notice, NoticeKind};

const CJK_FONT: &str = "cjk";

/// Common install locations of a CJK-capable font
const SYSTEM_CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = colors::PAGE_BG;
    style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    ctx.set_style(style);
}

/// Add a CJK font as a fallback behind egui's defaults.
///
/// `configured` wins over the system list. Returns the font that was loaded.
pub fn install_fonts(ctx: &egui::Context, configured: Option<&Path>) -> Option<PathBuf> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_CJK_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert(CJK_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(CJK_FONT.to_owned());
        }
        ctx.set_fonts(fonts);
        return Some(path);
    }
    None
}

/// Frame for the notice box, tinted by kind
pub fn notice_frame(notice: &Notice) -> egui::Frame {
    let fill = match notice.kind {
        NoticeKind::Info => colors::NOTICE_INFO_BG,
        NoticeKind::Error => colors::NOTICE_ERROR_BG,
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::NOTICE_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
}

pub fn notice_text_color(notice: &Notice) -> egui::Color32 {
    match notice.kind {
        NoticeKind::Info => colors::NOTICE_INFO_TEXT,
        NoticeKind::Error => colors::NOTICE_ERROR_TEXT,
    }
}
