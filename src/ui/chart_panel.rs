//! Bottom panel UI: companion bar chart of the displayed dataset.

use crate::state::AppState;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

pub fn render_chart_panel(ctx: &egui::Context, state: &mut AppState) {
    if !state.chart_state.visible {
        return;
    }

    egui::TopBottomPanel::bottom("chart_panel")
        .exact_height(state.chart_state.height)
        .show(ctx, |ui| {
            if state.dataset.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No dataset loaded");
                });
                return;
            }

            let bars: Vec<Bar> = state
                .dataset
                .records
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    Bar::new(index as f64, record.metric)
                        .name(&record.name)
                        .width(0.7)
                })
                .collect();

            let chart = BarChart::new(state.dataset_state.source.metric_label(), bars)
                .color(egui::Color32::from_rgb(54, 162, 235));

            // Bar positions are record indices; label the axis with
            // the country names instead of the raw index.
            let names: Vec<String> = state
                .dataset
                .records
                .iter()
                .map(|record| record.name.clone())
                .collect();

            Plot::new("metric_chart")
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show_grid(true)
                .x_axis_formatter(move |mark, _range| {
                    let index = mark.value.round() as usize;
                    if (mark.value - index as f64).abs() < 0.01 {
                        names.get(index).cloned().unwrap_or_default()
                    } else {
                        String::new()
                    }
                })
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(chart);
                });
        });
}
