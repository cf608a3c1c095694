//! FactLens - Fake News Detector
//!
//! A desktop front end that sends statements to the analysis backend and
//! renders its verdict.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use factlens::app::App;
use factlens::storage::init_storage;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("factlens=info")))
        .init();

    info!("Starting FactLens v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = init_storage() {
        tracing::warn!("Settings will not persist: {}", e);
    }

    // Launch Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("FactLens")
                    .with_inner_size(LogicalSize::new(1000.0, 800.0)),
            ),
        )
        .launch(App);
}
