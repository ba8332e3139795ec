//! Quitados Dashboard - settlement report viewer.

use anyhow::{anyhow, Context};
use eframe::egui;
use quitados_dashboard::config::DashboardConfig;
use quitados_dashboard::data;
use quitados_dashboard::gui::DashboardApp;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DashboardConfig::load()?;

    // A report that fails to load never opens the window
    let records = data::load_records(&config.csv_path)
        .inspect_err(|e| error!(error = %e, "failed to load settlement report"))
        .with_context(|| format!("loading {}", config.csv_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([1000.0, 650.0])
            .with_title(format!("Quitados - {}", config.period_label)),
        ..Default::default()
    };

    eframe::run_native(
        "Quitados Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config, records)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
