//! Globe drawing: disc, graticule, and data markers.
//!
//! Everything here paints through the egui painter; the world-to-screen
//! math lives in [`OrbitCamera`] and the marker placement math in
//! `crate::geo`.

use eframe::egui::{self, Color32, Painter, Rect, Stroke, StrokeKind, Vec2};

use super::camera::OrbitCamera;
use crate::data::PreparedDataset;
use crate::geo::{project_to_sphere, GeoPoint};

/// Visual configuration for data markers.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    /// Marker edge length in world units before metric scaling
    pub base_size: f32,
    /// Smallest visual scale factor in the dataset
    pub min_scale: f32,
    /// Largest visual scale factor in the dataset
    pub max_scale: f32,
    /// Draw country names next to markers
    pub show_labels: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            base_size: 0.6,
            min_scale: 0.1,
            max_scale: 1.0,
            show_labels: true,
        }
    }
}

/// Graticule spacing in degrees.
const GRATICULE_STEP_DEG: f64 = 30.0;
/// Sampling step along graticule lines in degrees.
const GRATICULE_SAMPLE_DEG: f64 = 5.0;

/// Draws the globe disc and limb.
pub fn render_globe(painter: &Painter, camera: &OrbitCamera, globe_radius: f32) {
    let center = camera.screen_rect.center();
    let radius_px = globe_radius * camera.pixels_per_unit();

    painter.circle_filled(center, radius_px, Color32::from_rgb(18, 32, 56));
    painter.circle_stroke(
        center,
        radius_px,
        Stroke::new(1.5, Color32::from_rgb(70, 95, 135)),
    );
}

/// Draws parallels and meridians over the front hemisphere.
pub fn render_graticule(painter: &Painter, camera: &OrbitCamera, globe_radius: f32) {
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(90, 115, 150, 90));

    // Parallels (skip the poles, they degenerate to points)
    let mut latitude = -90.0 + GRATICULE_STEP_DEG;
    while latitude < 90.0 {
        let mut longitude = -180.0;
        while longitude < 180.0 {
            draw_arc_segment(
                painter,
                camera,
                globe_radius,
                GeoPoint::new(latitude, longitude),
                GeoPoint::new(latitude, longitude + GRATICULE_SAMPLE_DEG),
                stroke,
            );
            longitude += GRATICULE_SAMPLE_DEG;
        }
        latitude += GRATICULE_STEP_DEG;
    }

    // Meridians
    let mut longitude = -180.0;
    while longitude < 180.0 {
        let mut latitude = -90.0;
        while latitude < 90.0 {
            draw_arc_segment(
                painter,
                camera,
                globe_radius,
                GeoPoint::new(latitude, longitude),
                GeoPoint::new(latitude + GRATICULE_SAMPLE_DEG, longitude),
                stroke,
            );
            latitude += GRATICULE_SAMPLE_DEG;
        }
        longitude += GRATICULE_STEP_DEG;
    }
}

/// Draws one graticule segment if both endpoints face the viewer.
fn draw_arc_segment(
    painter: &Painter,
    camera: &OrbitCamera,
    globe_radius: f32,
    from: GeoPoint,
    to: GeoPoint,
    stroke: Stroke,
) {
    let world_from = project_to_sphere(from, globe_radius as f64);
    let world_to = project_to_sphere(to, globe_radius as f64);

    if !camera.is_front_facing(world_from) || !camera.is_front_facing(world_to) {
        return;
    }

    let (screen_from, _) = camera.world_to_screen(world_from);
    let (screen_to, _) = camera.world_to_screen(world_to);
    painter.line_segment([screen_from, screen_to], stroke);
}

/// Draws one marker per dataset record, sized by its metric.
///
/// Markers sit at `marker_radius`, slightly above the globe surface,
/// and far-hemisphere markers are culled by view-space depth.
pub fn render_markers(
    painter: &Painter,
    camera: &OrbitCamera,
    dataset: &PreparedDataset,
    marker_radius: f32,
    style: &MarkerStyle,
) {
    let fill = Color32::from_rgb(220, 60, 60);
    let outline = Stroke::new(1.0, Color32::from_rgb(130, 25, 25));
    let label_color = Color32::from_rgb(225, 225, 240);

    for record in &dataset.records {
        let world = project_to_sphere(record.location, marker_radius as f64);
        let (screen, depth) = camera.world_to_screen(world);
        if depth < 0.0 {
            continue;
        }

        let scale = dataset.scale_for(record.metric, style.min_scale, style.max_scale);
        let size_px = style.base_size * scale * camera.pixels_per_unit();

        let rect = Rect::from_center_size(screen, Vec2::splat(size_px));
        painter.rect_filled(rect, 1.0, fill);
        painter.rect_stroke(rect, 1.0, outline, StrokeKind::Outside);

        if style.show_labels {
            painter.text(
                screen + Vec2::new(size_px / 2.0 + 4.0, -2.0),
                egui::Align2::LEFT_CENTER,
                &record.name,
                egui::FontId::proportional(10.0),
                label_color,
            );
        }
    }
}
