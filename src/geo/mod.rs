//! Pure geographic math: coordinate projection and metric scaling.
//!
//! Kept free of rendering and application state so the transforms can
//! be tested directly.

mod projection;

pub use projection::{metric_scale, project_to_sphere, GeoPoint};
