//! Globe view: orbit camera and painter-based drawing.

mod camera;
mod render;

pub use camera::OrbitCamera;
pub use render::{render_globe, render_graticule, render_markers, MarkerStyle};
