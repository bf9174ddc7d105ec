/**
 * dailysafe - Main Entry Point
 *
 * Loads configuration (failing fast without a backend URL), wires the
 * Firebase session into the action layer, starts the session watcher and
 * hands the window to eframe.
 */
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use dailysafe::egui_app::theme::styles;
use dailysafe::egui_app::{
    views, Actions, AppState, CheckinApi, Config, FirebaseAuth, FirebaseSettings, Session,
    SessionFile,
};

/// How often to redraw while idle so background results show up
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

fn init_tracing() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,dailysafe=debug".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    tracing::info!("[STARTUP] Backend at {}", config.app().api_base);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("dailysafe-io")
        .build()?;

    let auth = FirebaseAuth::new(
        FirebaseSettings::from(config.app()),
        config.session_file().map(SessionFile::new),
    );
    let actions = Actions::new(
        Session::new(Arc::new(auth)),
        CheckinApi::new(config.clone()),
        config.messages(),
    );
    runtime.spawn(actions.clone().watch_session());

    let state = AppState::new(actions, runtime.handle().clone());
    let font_path = config.font_path().cloned();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 420.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "dailysafe",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            match styles::install_fonts(&cc.egui_ctx, font_path.as_deref()) {
                Some(path) => tracing::debug!("[STARTUP] Loaded font {}", path.display()),
                None => tracing::warn!("[STARTUP] No CJK font found, set DAILYSAFE_FONT"),
            }
            Ok(Box::new(CheckinApp { state }))
        }),
    )?;

    Ok(())
}

/// Main application state
struct CheckinApp {
    state: AppState,
}

impl eframe::App for CheckinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_main_panel(ctx, &mut self.state);
        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
