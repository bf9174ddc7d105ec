use chrono::Local;
use eframe::egui;

use crate::egui_app::auth::SessionUser;
use crate::egui_app::state::{AppState, Snapshot};
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, user: &SessionUser, snapshot: &Snapshot) {
    let messages = state.messages();
    let enabled = snapshot.checkin_enabled();

    ui.label(messages.logged_in_as(user.display_name()));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let mut checkin = egui::Button::new(
            egui::RichText::new(messages.checkin_button(!enabled)).size(18.0),
        )
        .min_size(egui::vec2(0.0, 44.0));
        if !enabled {
            checkin = checkin.fill(colors::BUTTON_CONFIRMED);
        }
        let response = ui.add_enabled(enabled, checkin);
        if response.clicked() {
            state.handle_checkin();
        }

        if ui.button(messages.status_button()).clicked() {
            state.handle_status();
        }
        if ui.button(messages.logout_button()).clicked() {
            state.handle_logout();
        }
    });

    if let Some(checked) = snapshot.status.checked() {
        let when = snapshot
            .status
            .checked_at()
            .map(|raw| messages.format_timestamp(raw, &Local));
        ui.add_space(8.0);
        ui.colored_label(colors::TEXT_SECONDARY, messages.status_line(checked, when.as_deref()));
    }
}
