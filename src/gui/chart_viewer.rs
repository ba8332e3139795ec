//! Chart Viewer Widget
//! Central panel: four metric cards, then the two bar charts or a "no data" note.

use crate::charts::{ChartData, ChartPlotter};
use crate::data::format_brl;
use crate::stats::Summary;
use egui::{Color32, RichText, ScrollArea};

pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado para os filtros selecionados.";

const CHART_HEIGHT: f32 = 380.0;
const CHART_SPACING: f32 = 15.0;

/// A labeled value shown as a metric card.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// The four headline metrics for a summary.
pub fn metrics(summary: &Summary) -> [Metric; 4] {
    [
        Metric {
            label: "Total de Contratos",
            value: summary.total_contratos.to_string(),
        },
        Metric {
            label: "Total de Descontos",
            value: format_brl(summary.total_descontos),
        },
        Metric {
            label: "Total de Saldo Devedor",
            value: format_brl(summary.total_saldo_devedor),
        },
        Metric {
            label: "Total de Economia",
            value: format_brl(summary.total_economia),
        },
    ]
}

/// Metrics and charts for the current filter selection.
#[derive(Default)]
pub struct ChartViewer {
    pub metrics: Option<[Metric; 4]>,
    pub charts: Vec<ChartData>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild metrics and charts from a fresh summary.
    pub fn set_summary(&mut self, summary: &Summary, diretor: &str, period: &str) {
        self.metrics = Some(metrics(summary));
        self.charts = ChartData::for_summary(summary, diretor, period);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if let Some(metrics) = &self.metrics {
            ui.columns(metrics.len(), |columns| {
                for (col, metric) in columns.iter_mut().zip(metrics.iter()) {
                    Self::draw_metric_card(col, metric);
                }
            });
        }

        ui.add_space(CHART_SPACING);
        ui.separator();

        if self.charts.is_empty() {
            ui.add_space(CHART_SPACING);
            ui.label(RichText::new(NO_DATA_MESSAGE).size(16.0));
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for chart in &self.charts {
                    ui.add_space(CHART_SPACING);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(&chart.title).size(16.0).strong());
                    });
                    ui.add_space(6.0);
                    ChartPlotter::draw_bar_chart(ui, chart, CHART_HEIGHT);
                }
            });
    }

    fn draw_metric_card(ui: &mut egui::Ui, metric: &Metric) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(90)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(metric.label).size(14.0).color(Color32::GRAY));
                ui.label(RichText::new(&metric.value).size(18.0).strong());
            });
    }
}
