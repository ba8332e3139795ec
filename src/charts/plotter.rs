//! Chart Plotter Module
//! Interactive bar charts of contract counts using egui_plot.

use crate::stats::Summary;
use egui::{Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotPoint, Text};
use std::collections::BTreeMap;

pub const BAR_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

pub const Y_LABEL: &str = "Quantidade de CTT";

/// Data for one bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Stable id, also used as the export file stem.
    pub id: &'static str,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// (category, count) in display order.
    pub bars: Vec<(String, usize)>,
}

impl ChartData {
    fn from_counts(
        id: &'static str,
        title: String,
        x_label: &'static str,
        counts: &BTreeMap<String, usize>,
    ) -> Self {
        Self {
            id,
            title,
            x_label,
            y_label: Y_LABEL,
            bars: counts.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        }
    }

    /// Contracts per responsible person; the title names the selected director.
    pub fn by_responsavel(summary: &Summary, diretor: &str, period: &str) -> Self {
        Self::from_counts(
            "ctt_por_responsavel",
            format!("Quantidade de CTT por Responsável - {period} (Diretor: {diretor})"),
            "RESPONSAVEL",
            &summary.ctt_by_responsavel,
        )
    }

    /// Contracts per bank.
    pub fn by_banco(summary: &Summary, period: &str) -> Self {
        Self::from_counts(
            "ctt_por_banco",
            format!("Quantidade de CTT por Banco - {period}"),
            "BANCO",
            &summary.ctt_by_banco,
        )
    }

    /// Both dashboard charts, or none when the subset is empty.
    pub fn for_summary(summary: &Summary, diretor: &str, period: &str) -> Vec<Self> {
        if summary.is_empty() {
            return Vec::new();
        }
        vec![
            Self::by_responsavel(summary, diretor, period),
            Self::by_banco(summary, period),
        ]
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }

    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|(label, _)| label.clone()).collect()
    }
}

/// Draws bar charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Vertical bar chart, each bar annotated with its exact count.
    pub fn draw_bar_chart(ui: &mut egui::Ui, data: &ChartData, height: f32) {
        let labels = data.labels();
        let n = labels.len();
        let headroom = (data.max_count() as f64 * 1.15).max(1.0);

        let bars: Vec<Bar> = data
            .bars
            .iter()
            .enumerate()
            .map(|(i, (label, count))| {
                Bar::new(i as f64, *count as f64)
                    .name(label)
                    .fill(BAR_COLOR)
            })
            .collect();

        Plot::new(format!("bar_{}", data.id))
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_grid(false)
            .x_axis_label(data.x_label)
            .y_axis_label(data.y_label)
            .include_x(-0.5)
            .include_x(n as f64 - 0.5)
            .include_y(0.0)
            .include_y(headroom)
            .x_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).width(0.6).color(BAR_COLOR));

                for (i, (_, count)) in data.bars.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, *count as f64),
                            RichText::new(count.to_string()).size(12.0),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}
