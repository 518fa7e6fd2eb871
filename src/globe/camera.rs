//! Orbit camera for the globe view.
//!
//! Maps world-space points on and around the globe to screen
//! coordinates. The camera orbits the origin: yaw spins the view around
//! the globe's axis, pitch tilts it toward the poles, and an
//! orthographic projection maps the result onto the canvas. Adequate
//! for a marker globe; no perspective distortion to reason about.

use eframe::egui::{Pos2, Rect, Vec2};
use glam::{Mat3, Vec3};

/// Maximum pitch in radians, just short of looking along the axis.
const PITCH_LIMIT: f32 = 1.45;

/// Orbit view state for converting world positions to screen positions.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Rotation around the globe's polar axis, radians
    pub yaw: f32,
    /// Tilt toward the poles, radians, clamped to [-PITCH_LIMIT, PITCH_LIMIT]
    pub pitch: f32,
    /// Current zoom level
    pub zoom: f32,
    /// World units spanned by the smaller half-extent of the canvas at zoom 1
    pub view_extent: f32,
    /// Screen rectangle for the canvas
    pub screen_rect: Rect,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
            // Globe radius 5 plus marker headroom
            view_extent: 6.5,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        }
    }
}

impl OrbitCamera {
    /// Creates a camera at the given orientation.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            ..Default::default()
        }
    }

    /// Updates the camera with current view state.
    pub fn update(&mut self, zoom: f32, view_extent: f32, screen_rect: Rect) {
        self.zoom = zoom;
        self.view_extent = view_extent;
        self.screen_rect = screen_rect;
    }

    /// View rotation applied to world points: yaw about the polar axis,
    /// then pitch about the screen-horizontal axis.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_rotation_x(self.pitch) * Mat3::from_rotation_y(self.yaw)
    }

    /// Screen pixels per world unit at the current zoom.
    pub fn pixels_per_unit(&self) -> f32 {
        let half_size = self.screen_rect.size().min_elem() / 2.0;
        half_size * self.zoom / self.view_extent
    }

    /// Projects a world-space point to screen coordinates.
    ///
    /// Returns the screen position and the view-space depth. Positive
    /// depth faces the viewer; points with negative depth are on the
    /// far hemisphere and should not be drawn.
    pub fn world_to_screen(&self, world: Vec3) -> (Pos2, f32) {
        let rotated = self.rotation() * world;
        let center = self.screen_rect.center();
        let scale = self.pixels_per_unit();

        // Screen Y increases downward
        let screen = Pos2::new(
            center.x + rotated.x * scale,
            center.y - rotated.y * scale,
        );

        (screen, rotated.z)
    }

    /// Whether a world-space point is on the hemisphere facing the viewer.
    pub fn is_front_facing(&self, world: Vec3) -> bool {
        (self.rotation() * world).z >= 0.0
    }

    /// Clamps a pitch value into the camera's valid range.
    pub fn clamp_pitch(pitch: f32) -> f32 {
        pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
    }
}
