use eframe::egui;

use crate::egui_app::state::{AppState, Snapshot};
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod checkin_view;

/// Width of the single centered column
const COLUMN_WIDTH: f32 = 420.0;

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let snapshot = state.snapshot();
    let frame = egui::Frame::default()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::symmetric(16, 40));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(COLUMN_WIDTH);
            ui.heading(egui::RichText::new(state.messages().title()).size(28.0).strong());
            ui.add_space(16.0);

            match snapshot.user {
                None => auth_view::render(ui, state),
                Some(ref user) => checkin_view::render(ui, state, user, &snapshot),
            }

            render_notice(ui, &snapshot);
        });
    });
}

fn render_notice(ui: &mut egui::Ui, snapshot: &Snapshot) {
    let Some(ref notice) = snapshot.notice else {
        return;
    };
    ui.add_space(16.0);
    styles::notice_frame(notice).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(styles::notice_text_color(notice), &notice.text);
    });
}
