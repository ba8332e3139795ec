//! Static Chart Renderer
//! Writes the dashboard bar charts to PNG files with plotters.
//!
//! Layout matches the on-screen charts: title on top, one bar per category in
//! ascending key order, the exact count printed above each bar.

use crate::charts::ChartData;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const EXPORT_WIDTH: u32 = 1350;
pub const EXPORT_HEIGHT: u32 = 900;

const BAR_FILL: RGBColor = RGBColor(31, 119, 180);

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to prepare output folder: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render {chart}: {message}")]
    Render { chart: String, message: String },
    #[error("No charts to export")]
    NothingToExport,
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render every chart into `dir` as `<id>.png`.
    pub fn export_all(charts: &[ChartData], dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        if charts.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(charts.len());
        for chart in charts {
            let path = dir.join(format!("{}.png", chart.id));
            Self::render_bar_chart(chart, &path, EXPORT_WIDTH, EXPORT_HEIGHT)?;
            written.push(path);
        }

        info!(count = written.len(), dir = %dir.display(), "exported charts");
        Ok(written)
    }

    /// Render one bar chart to a PNG file.
    pub fn render_bar_chart(
        data: &ChartData,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), ExportError> {
        let render_err = |e: &dyn std::fmt::Display| ExportError::Render {
            chart: data.id.to_string(),
            message: e.to_string(),
        };

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| render_err(&e))?;

        let n = data.bars.len().max(1) as u32;
        let max = data.max_count() as u32;
        let y_max = max + max / 10 + 1;
        let labels = data.labels();

        let mut chart = ChartBuilder::on(&root)
            .caption(&data.title, ("sans-serif", 22))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max)
            .map_err(|e| render_err(&e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .x_desc(data.x_label)
            .y_desc(data.y_label)
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(|e| render_err(&e))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_FILL.filled())
                    .margin(12)
                    .data(
                        data.bars
                            .iter()
                            .enumerate()
                            .map(|(i, (_, count))| (i as u32, *count as u32)),
                    ),
            )
            .map_err(|e| render_err(&e))?;

        let annotation = TextStyle::from(("sans-serif", 16).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(data.bars.iter().enumerate().map(|(i, (_, count))| {
                Text::new(
                    count.to_string(),
                    (SegmentValue::CenterOf(i as u32), *count as u32),
                    annotation.clone(),
                )
            }))
            .map_err(|e| render_err(&e))?;

        root.present().map_err(|e| render_err(&e))?;
        Ok(())
    }
}
