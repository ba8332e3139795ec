//! Control Panel Widget
//! Left side panel with the five filter dropdowns and the report actions.

use crate::stats::{FilterColumn, FilterOptions, FilterSelection};
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Left side panel with data source info and filter controls.
pub struct ControlPanel {
    pub csv_path: PathBuf,
    pub options: FilterOptions,
    pub selection: FilterSelection,
    pub status: String,
    pub export_enabled: bool,
}

impl ControlPanel {
    pub fn new(csv_path: PathBuf, options: FilterOptions) -> Self {
        Self {
            csv_path,
            options,
            selection: FilterSelection::default(),
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }

    /// Replace the options after a reload, dropping selections that vanished.
    pub fn update_options(&mut self, options: FilterOptions) -> bool {
        self.options = options;
        self.selection.retain_available(&self.options)
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Quitados")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Relatório").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let file_name = self
                        .csv_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    ui.label(RichText::new(file_name).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🔄 Recarregar").clicked() {
                            action = ControlPanelAction::Reload;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Filters =====
        ui.label(RichText::new("🔧 Filtros").size(14.0).strong());
        ui.add_space(8.0);

        for column in FilterColumn::ALL {
            let mut current = self.selection.get(column).to_string();

            ui.label(column.label());
            ComboBox::from_id_salt(column.label())
                .width(ui.available_width() - 10.0)
                .selected_text(&current)
                .show_ui(ui, |ui| {
                    for option in self.options.options(column) {
                        ui.selectable_value(&mut current, option.clone(), option);
                    }
                });

            if current != self.selection.get(column) {
                self.selection.set(column, current);
                action = ControlPanelAction::SelectionChanged;
            }
            ui.add_space(6.0);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Exportar gráficos").size(14.0))
                    .min_size(egui::vec2(180.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportCharts;
                }
            });
        });

        ui.add_space(15.0);

        let status_color = if self.status.starts_with("Erro") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
    Reload,
    ExportCharts,
}
