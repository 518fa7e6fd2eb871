//! Top bar UI: app title, dataset source, and status.

use crate::state::{AppState, DataSource};
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Globe Workbench")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                ui.label(RichText::new("Dataset:").size(12.0).color(Color32::GRAY));
                egui::ComboBox::from_id_salt("dataset_source")
                    .selected_text(state.dataset_state.source.label())
                    .width(200.0)
                    .show_ui(ui, |ui| {
                        for source in DataSource::all() {
                            let response = ui.selectable_value(
                                &mut state.dataset_state.source,
                                *source,
                                source.label(),
                            );
                            if response.changed() {
                                state.dataset_state.reload_requested = true;
                            }
                        }
                    });

                ui.separator();

                // Status text
                let status_color = if state.dataset_state.last_error.is_some() {
                    Color32::from_rgb(230, 120, 100)
                } else {
                    Color32::GRAY
                };
                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(status_color),
                );

                if state.dataset_state.loading {
                    ui.spinner();
                }
            });
        });
}
