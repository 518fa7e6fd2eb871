//! Right panel UI: globe, marker, and dataset controls.

use crate::state::AppState;
use eframe::egui::{self, RichText, ScrollArea};

pub fn render_right_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("right_panel")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .max_width(350.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Controls");
                ui.separator();

                render_rotation_section(ui, state);
                ui.add_space(5.0);

                render_markers_section(ui, state);
                ui.add_space(5.0);

                render_layers_section(ui, state);
                ui.add_space(5.0);

                render_dataset_section(ui, state);
            });
        });
}

fn render_rotation_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Rotation").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.checkbox(&mut state.viz_state.spin_enabled, "Auto-spin");

            if state.viz_state.spin_enabled {
                ui.indent("spin_indent", |ui| {
                    ui.add(
                        egui::Slider::new(&mut state.viz_state.spin_speed, 0.0001..=0.01)
                            .logarithmic(true)
                            .text("Speed"),
                    );
                });
            }

            if ui.button("Reset view").clicked() {
                state.viz_state.reset_view();
            }
        });
}

fn render_markers_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Markers").strong())
        .default_open(true)
        .show(ui, |ui| {
            // Each slider's range is capped by the other, so the
            // scale range stays well-ordered without moving the
            // slider the user isn't dragging
            let min_cap = state.viz_state.max_marker_scale;
            ui.add(
                egui::Slider::new(&mut state.viz_state.min_marker_scale, 0.01..=min_cap)
                    .text("Min scale"),
            );
            let max_floor = state.viz_state.min_marker_scale;
            ui.add(
                egui::Slider::new(&mut state.viz_state.max_marker_scale, max_floor..=2.0)
                    .text("Max scale"),
            );
            ui.add(
                egui::Slider::new(&mut state.viz_state.marker_base_size, 0.1..=2.0)
                    .text("Base size"),
            );
        });
}

fn render_layers_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Layers").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.checkbox(&mut state.viz_state.show_graticule, "Graticule");
            ui.checkbox(&mut state.viz_state.show_labels, "Labels");
            ui.checkbox(&mut state.chart_state.visible, "Chart Panel");
        });
}

fn render_dataset_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Dataset").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!(
                    "{} records, {} range {:.0}..{:.0}",
                    state.dataset.len(),
                    state.dataset_state.source.metric_label(),
                    state.dataset.min_metric,
                    state.dataset.max_metric
                ))
                .small(),
            );

            let reload = ui.add_enabled(
                !state.dataset_state.loading,
                egui::Button::new("Reload"),
            );
            if reload.clicked() {
                state.dataset_state.reload_requested = true;
            }
        });
}
