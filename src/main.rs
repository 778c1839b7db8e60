//! Cubic-Bezier Curve Editor.
//!
//! Desktop-Editor für CSS `cubic-bezier(...)` Timing-Kurven mit egui.

use bezier_curve_editor::{CurveGeneratorApp, EditorOptions};
use eframe::egui;

/// Initiale Fenstergröße (Breite reicht für das 400 px Canvas).
const INITIAL_WINDOW_SIZE: [f32; 2] = [460.0, 520.0];

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Cubic-Bezier Curve Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(INITIAL_WINDOW_SIZE)
                .with_title("Cubic-Bezier Curve Editor"),
            renderer: eframe::Renderer::Wgpu,
            ..Default::default()
        };

        eframe::run_native(
            "Cubic-Bezier Curve Editor",
            options,
            Box::new(move |_cc| {
                let app = CurveGeneratorApp::new(editor_options, INITIAL_WINDOW_SIZE[0])?;
                Ok(Box::new(app))
            }),
        )
    }
}
