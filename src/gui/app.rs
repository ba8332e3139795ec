//! Quitados Dashboard Main Application
//! Main window with the filter panel and the metrics/chart viewer.

use crate::charts::StaticChartRenderer;
use crate::config::DashboardConfig;
use crate::data::{self, Record};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::{Aggregator, FilterColumn, FilterOptions};
use egui::SidePanel;
use tracing::{debug, error, info};

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    records: Vec<Record>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: DashboardConfig,
        records: Vec<Record>,
    ) -> Self {
        let options = FilterOptions::from_records(&records);
        let mut app = Self {
            control_panel: ControlPanel::new(config.csv_path.clone(), options),
            chart_viewer: ChartViewer::new(),
            config,
            records,
        };
        app.control_panel
            .set_status(&format!("{} linhas carregadas", app.records.len()));
        app.refresh();
        app
    }

    /// Re-run filter and aggregation for the current selection.
    fn refresh(&mut self) {
        let selection = &self.control_panel.selection;
        let summary = Aggregator::compute(&self.records, selection);
        debug!(
            ?selection,
            rows = summary.row_count,
            contratos = summary.total_contratos,
            "recomputed summary"
        );

        self.chart_viewer.set_summary(
            &summary,
            selection.get(FilterColumn::Diretor),
            &self.config.period_label,
        );
        self.control_panel.export_enabled = !self.chart_viewer.charts.is_empty();
    }

    /// Re-read the report from disk. On failure the current table is kept.
    fn handle_reload(&mut self) {
        match data::load_records(&self.config.csv_path) {
            Ok(records) => {
                info!(rows = records.len(), "reloaded settlement report");
                let options = FilterOptions::from_records(&records);
                self.records = records;
                if self.control_panel.update_options(options) {
                    debug!("selections no longer available were reset");
                }
                self.control_panel
                    .set_status(&format!("{} linhas carregadas", self.records.len()));
                self.refresh();
            }
            Err(e) => {
                error!(error = %e, "reload failed");
                self.control_panel.set_status(&format!("Erro: {}", e));
            }
        }
    }

    /// Write the displayed charts as PNG files into a chosen folder.
    fn handle_export_charts(&mut self) {
        let Some(dir) = rfd::FileDialog::new()
            .set_title("Exportar gráficos")
            .pick_folder()
        else {
            return;
        };

        match StaticChartRenderer::export_all(&self.chart_viewer.charts, &dir) {
            Ok(paths) => {
                self.control_panel.set_status(&format!(
                    "{} gráficos exportados para {}",
                    paths.len(),
                    dir.display()
                ));
            }
            Err(e) => {
                error!(error = %e, "chart export failed");
                self.control_panel.set_status(&format!("Erro: {}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::SelectionChanged => self.refresh(),
                        ControlPanelAction::Reload => self.handle_reload(),
                        ControlPanelAction::ExportCharts => self.handle_export_charts(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
