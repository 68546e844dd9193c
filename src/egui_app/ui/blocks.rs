use eframe::egui::{self, RichText, Ui};

use super::metrics_chart::render_bar_chart;
use super::metrics_table::render_metrics_table;
use super::style;
use super::textures::TextureCache;
use crate::assets::AssetSource;
use crate::egui_app::view_model::{Block, StatePickerView, TextRun};

/// User input collected while painting, applied after the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum UiAction {
    SelectState(&'static str),
}

/// Paints view blocks top to bottom.
pub(super) struct BlockPainter<'a> {
    pub textures: &'a mut TextureCache,
    pub assets: &'a dyn AssetSource,
    pub actions: Vec<UiAction>,
}

impl BlockPainter<'_> {
    pub fn paint(&mut self, ui: &mut Ui, blocks: &[Block]) {
        for block in blocks {
            self.paint_block(ui, block);
        }
    }

    fn paint_block(&mut self, ui: &mut Ui, block: &Block) {
        match block {
            Block::Header(text) => {
                ui.heading(text);
            }
            Block::Subheader(text) => {
                ui.add_space(6.0);
                ui.label(RichText::new(text).size(18.0).strong());
            }
            Block::Paragraph(runs) => {
                let job = rich_text(ui, runs);
                ui.label(job);
            }
            Block::Strong(text) => {
                ui.label(RichText::new(text).strong());
            }
            Block::Note(text) => {
                ui.label(RichText::new(text).italics().color(style::muted_text()));
            }
            Block::Bullets(items) => {
                for item in items {
                    list_item(ui, "•", item);
                }
            }
            Block::Numbered(items) => {
                for (idx, item) in items.iter().enumerate() {
                    list_item(ui, &format!("{}.", idx + 1), item);
                }
            }
            Block::Image { path, caption } => self.paint_image(ui, path, caption),
            Block::Error(message) => {
                egui::Frame::new()
                    .fill(style::error_fill())
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(message).color(style::error_text()));
                    });
            }
            Block::Divider => {
                ui.separator();
            }
            Block::Columns(columns) => {
                ui.columns(columns.len(), |column_uis| {
                    for (column_ui, blocks) in column_uis.iter_mut().zip(columns) {
                        self.paint(column_ui, blocks);
                    }
                });
            }
            Block::Expander { title, open, body } => {
                egui::CollapsingHeader::new(title)
                    .default_open(*open)
                    .show(ui, |ui| self.paint(ui, body));
            }
            Block::StatePicker(picker) => self.paint_state_picker(ui, picker),
            Block::MetricsTable(table) => render_metrics_table(ui, table),
            Block::BarChart(chart) => render_bar_chart(ui, chart),
        }
    }

    fn paint_image(&mut self, ui: &mut Ui, path: &str, caption: &str) {
        let ctx = ui.ctx().clone();
        match self.textures.get(&ctx, self.assets, path) {
            Ok(texture) => {
                let width = ui.available_width();
                ui.add(egui::Image::new(texture).max_width(width));
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(caption).small().color(style::muted_text()));
                });
            }
            Err(_) => {
                ui.label(
                    RichText::new(format!("🖼 {path} unavailable"))
                        .small()
                        .color(style::muted_text()),
                );
            }
        }
    }

    fn paint_state_picker(&mut self, ui: &mut Ui, picker: &StatePickerView) {
        let mut selected = picker.selected;
        ui.label(RichText::new(&picker.prompt).strong());
        egui::ComboBox::from_id_salt("sankey_state_picker")
            .selected_text(selected)
            .width(240.0)
            .show_ui(ui, |ui| {
                for option in &picker.options {
                    ui.selectable_value(&mut selected, *option, *option);
                }
            });
        if selected != picker.selected {
            self.actions.push(UiAction::SelectState(selected));
        }
    }
}

fn list_item(ui: &mut Ui, marker: &str, runs: &[TextRun]) {
    ui.horizontal_wrapped(|ui| {
        ui.add_space(8.0);
        ui.label(marker);
        let job = rich_text(ui, runs);
        ui.label(job);
    });
}

fn rich_text(ui: &Ui, runs: &[TextRun]) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    for run in runs {
        let mut text = RichText::new(&run.text);
        if run.strong {
            text = text.strong();
        }
        if run.italic {
            text = text.italics();
        }
        text.append_to(
            &mut job,
            ui.style(),
            egui::FontSelection::Default,
            egui::Align::Min,
        );
    }
    job
}
