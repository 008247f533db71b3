mod app;
mod config;
mod upload;
mod utils;

use anyhow::Result;
use app::CartoonUploader;
use config::ClientConfig;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let config = ClientConfig::from_env()?;
    tracing::info!(endpoint = %config.upload_endpoint(), "upload endpoint configured");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 520.0])
            .with_min_inner_size([400.0, 420.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Video Cartoonizer",
        options,
        Box::new(move |cc| Box::new(CartoonUploader::new(cc, config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start window: {}", e))
}
