use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};

use super::style;
use crate::dashboard::metrics::format_bar_label;
use crate::egui_app::view_model::BarChartView;

const CHART_HEIGHT: f32 = 360.0;
const BAR_WIDTH: f64 = 0.6;

/// One colored bar per model with its formatted value above it.
pub(super) fn render_bar_chart(ui: &mut Ui, chart: &BarChartView) {
    ui.label(RichText::new(&chart.title).strong());
    let names: Vec<String> = chart.bars.iter().map(|bar| bar.model.to_string()).collect();
    let top = chart
        .bars
        .iter()
        .map(|bar| bar.value)
        .fold(0.0_f64, f64::max);

    Plot::new("f1_comparison_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .include_y(0.0)
        .include_y(top * 1.1)
        .include_x(-0.5)
        .include_x(chart.bars.len() as f64 - 0.5)
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (idx, bar) in chart.bars.iter().enumerate() {
                let color = style::series_color(idx);
                let x = idx as f64;
                let bars = vec![
                    Bar::new(x, bar.value)
                        .name(bar.model)
                        .width(BAR_WIDTH)
                        .fill(color),
                ];
                plot_ui.bar_chart(
                    BarChart::new(bar.model, bars)
                        .color(color)
                        .element_formatter(Box::new(|item: &Bar, _: &BarChart| {
                            format_bar_label(item.value)
                        })),
                );
                plot_ui.text(
                    Text::new(
                        format!("{}_label", bar.model),
                        PlotPoint::new(x, bar.value),
                        RichText::new(&bar.label).strong(),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
    ui.add_space(4.0);
}
