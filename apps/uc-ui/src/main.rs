#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::ConverterApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = app::startup_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 320.0])
            .with_title("Unit Converter"),
        ..Default::default()
    };

    eframe::run_native(
        "Unit Converter",
        options,
        Box::new(move |cc| Ok(Box::new(ConverterApp::new(cc, &settings)))),
    )
}
