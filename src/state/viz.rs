//! Globe view state (orientation, spin, marker scaling).

/// View and marker settings for the globe canvas.
pub struct VizState {
    /// Rotation around the globe's polar axis, radians
    pub yaw: f32,

    /// Tilt toward the poles, radians
    pub pitch: f32,

    /// Current zoom level (1.0 = 100%)
    pub zoom: f32,

    /// Continuous auto-rotation
    pub spin_enabled: bool,

    /// Auto-rotation step per frame, radians
    pub spin_speed: f32,

    /// Sphere radius for the globe surface, world units
    pub globe_radius: f32,

    /// Sphere radius for marker placement, slightly above the surface
    pub marker_radius: f32,

    /// Smallest marker scale factor
    pub min_marker_scale: f32,

    /// Largest marker scale factor
    pub max_marker_scale: f32,

    /// Marker edge length in world units before metric scaling
    pub marker_base_size: f32,

    /// Draw the lat/lon graticule
    pub show_graticule: bool,

    /// Draw country names next to markers
    pub show_labels: bool,
}

impl Default for VizState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
            spin_enabled: true,
            // One slow revolution in a little under two minutes at 60fps
            spin_speed: 0.001,
            globe_radius: 5.0,
            marker_radius: 5.1,
            min_marker_scale: 0.1,
            max_marker_scale: 1.0,
            marker_base_size: 0.6,
            show_graticule: true,
            show_labels: true,
        }
    }
}

impl VizState {
    /// World units spanned by the smaller half-extent of the canvas at
    /// zoom 1: the marker sphere plus headroom for labels.
    pub fn view_extent(&self) -> f32 {
        self.marker_radius * 1.3
    }

    /// Returns orientation and zoom to their defaults.
    pub fn reset_view(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.zoom = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker_scale_range_is_ordered() {
        let state = VizState::default();
        assert!(state.min_marker_scale > 0.0);
        assert!(state.min_marker_scale <= state.max_marker_scale);
    }

    #[test]
    fn test_reset_view_restores_orientation_only() {
        let mut state = VizState {
            yaw: 1.2,
            pitch: 0.5,
            zoom: 3.0,
            show_labels: false,
            ..Default::default()
        };

        state.reset_view();

        assert_eq!(state.yaw, 0.0);
        assert_eq!(state.pitch, 0.0);
        assert_eq!(state.zoom, 1.0);
        // Layer settings are untouched
        assert!(!state.show_labels);
    }
}
