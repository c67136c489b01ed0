//! Video to MP3 Converter
//!
//! Main entry point for the application.

use video2mp3::ConverterApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!(
        "Starting Video to MP3 Converter v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 550.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("Video to MP3 Converter"),
        vsync: true,
        ..Default::default()
    };

    // Run the app
    eframe::run_native(
        "Video to MP3 Converter",
        native_options,
        Box::new(|cc| Box::new(ConverterApp::new(cc))),
    )
}
