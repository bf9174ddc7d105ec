use eframe::egui;

use crate::egui_app::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let messages = state.messages();

    ui.add(
        egui::TextEdit::singleline(&mut state.email_input)
            .hint_text(messages.email_hint())
            .desired_width(f32::INFINITY),
    );
    ui.add(
        egui::TextEdit::singleline(&mut state.password_input)
            .hint_text(messages.password_hint())
            .password(true)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button(messages.login_button()).clicked() {
            state.handle_login();
        }
        if ui.button(messages.signup_button()).clicked() {
            state.handle_signup();
        }
    });
}
