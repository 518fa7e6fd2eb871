//! Central canvas UI: the globe visualization area.

use crate::globe::{self, MarkerStyle, OrbitCamera};
use crate::state::AppState;
use eframe::egui::{self, Color32, Rect, RichText, Sense, Vec2};

/// Radians of rotation per dragged pixel.
const DRAG_SENSITIVITY: f32 = 0.005;

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();

        // Allocate the full available space for the canvas
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        // Draw background
        painter.rect_filled(rect, 0.0, Color32::from_rgb(26, 26, 26));

        // Build the camera for this frame from view state
        let mut camera = OrbitCamera::new(state.viz_state.yaw, state.viz_state.pitch);
        camera.update(state.viz_state.zoom, state.viz_state.view_extent(), rect);

        globe::render_globe(&painter, &camera, state.viz_state.globe_radius);

        if state.viz_state.show_graticule {
            globe::render_graticule(&painter, &camera, state.viz_state.globe_radius);
        }

        let marker_style = MarkerStyle {
            base_size: state.viz_state.marker_base_size,
            min_scale: state.viz_state.min_marker_scale,
            max_scale: state.viz_state.max_marker_scale,
            show_labels: state.viz_state.show_labels,
        };
        globe::render_markers(
            &painter,
            &camera,
            &state.dataset,
            state.viz_state.marker_radius,
            &marker_style,
        );

        draw_overlay_info(ui, &rect, state);

        handle_canvas_interaction(&response, state);

        // Keep the spin animating while enabled
        if state.viz_state.spin_enabled {
            ctx.request_repaint();
        }
    });
}

/// Dataset summary in the top-left corner of the canvas.
fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(220.0, 50.0));

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!(
                    "{}: {} countries",
                    state.dataset_state.source.metric_label(),
                    state.dataset.len()
                ))
                .monospace()
                .size(12.0)
                .color(Color32::from_rgb(200, 200, 220)),
            );
            if let Some(ref error) = state.dataset_state.last_error {
                ui.label(
                    RichText::new(error)
                        .monospace()
                        .size(12.0)
                        .color(Color32::from_rgb(230, 120, 100)),
                );
            }
        });
    });
}

fn handle_canvas_interaction(response: &egui::Response, state: &mut AppState) {
    // Handle dragging for orbiting
    if response.dragged() {
        let delta = response.drag_delta();
        state.viz_state.yaw += delta.x * DRAG_SENSITIVITY;
        state.viz_state.pitch =
            OrbitCamera::clamp_pitch(state.viz_state.pitch + delta.y * DRAG_SENSITIVITY);
    }

    // Handle scroll for zooming
    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let zoom_factor = 1.0 + scroll_delta.y * 0.001;
            state.viz_state.zoom = (state.viz_state.zoom * zoom_factor).clamp(0.1, 10.0);
        }
    }

    // Reset view on double-click
    if response.double_clicked() {
        state.viz_state.reset_view();
    }
}
