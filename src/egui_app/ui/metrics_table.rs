use eframe::egui::{self, RichText, Ui};

use super::style;
use crate::egui_app::view_model::MetricsTableView;

/// Striped grid with column maxima on a light-green background.
pub(super) fn render_metrics_table(ui: &mut Ui, table: &MetricsTableView) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::Grid::new("model_metrics_table")
            .num_columns(table.headers.len())
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for header in &table.headers {
                    ui.label(RichText::new(*header).strong());
                }
                ui.end_row();
                for row in &table.rows {
                    ui.label(row.model);
                    for cell in &row.cells {
                        let mut text = RichText::new(&cell.text).monospace();
                        if cell.highlighted {
                            text = text
                                .background_color(style::highlight_fill())
                                .color(style::highlight_text());
                        }
                        ui.label(text);
                    }
                    ui.end_row();
                }
            });
    });
}
