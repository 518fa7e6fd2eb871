//! Geographic-to-Cartesian projection and metric scaling.
//!
//! These are the pure transforms behind marker placement: converting
//! (latitude, longitude) pairs to positions on a sphere's surface, and
//! mapping a dataset metric (population, sales) into a bounded visual
//! scale. Both are free functions with no dependency on rendering state
//! so they can be unit tested without a graphics context.

use glam::Vec3;

/// A geographic coordinate pair.
///
/// Latitude in degrees within [-90, 90], longitude in degrees within
/// [-180, 180]. Values come straight from the dataset and are assumed
/// well-formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Converts geographic coordinates to a point on a sphere's surface.
///
/// Uses the standard spherical-to-Cartesian convention with +Y through
/// the north pole: the polar angle is measured from the pole
/// (`phi = 90 - lat`) and the azimuth offset by 180 degrees
/// (`theta = lon + 180`), so latitude 0 / longitude 0 lands on +X.
/// The result lies on the sphere of the given radius up to
/// floating-point error.
pub fn project_to_sphere(point: GeoPoint, radius: f64) -> Vec3 {
    let phi = (90.0 - point.latitude).to_radians();
    let theta = (point.longitude + 180.0).to_radians();

    let x = -(phi.sin() * theta.cos()) * radius;
    let y = phi.cos() * radius;
    let z = phi.sin() * theta.sin() * radius;

    Vec3::new(x as f32, y as f32, z as f32)
}

/// Maps a metric logarithmically into a bounded visual range.
///
/// Population and sales figures span orders of magnitude; a linear map
/// would make the smallest entries invisible next to the largest. The
/// metric's position between the dataset extremes is taken in log space
/// and interpolated into [min_scale, max_scale].
///
/// Preconditions: `metric`, `dataset_min`, `dataset_max` all positive
/// and `dataset_max > dataset_min`. Callers with a single-element
/// dataset must special-case it and use `max_scale` directly.
pub fn metric_scale(
    metric: f64,
    dataset_min: f64,
    dataset_max: f64,
    min_scale: f32,
    max_scale: f32,
) -> f32 {
    let t = (metric.ln() - dataset_min.ln()) / (dataset_max.ln() - dataset_min.ln());
    min_scale + t as f32 * (max_scale - min_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_projected_point_lies_on_sphere() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(41.7, -93.7),
            GeoPoint::new(-33.9, 151.2),
            GeoPoint::new(90.0, 0.0),
            GeoPoint::new(-90.0, 45.0),
            GeoPoint::new(35.0, 180.0),
        ];

        for radius in [1.0, 5.0, 5.1, 100.0] {
            for point in points {
                let projected = project_to_sphere(point, radius);
                assert!(
                    (projected.length() - radius as f32).abs() < EPS * radius as f32,
                    "|project({:?}, {})| = {}, expected {}",
                    point,
                    radius,
                    projected.length(),
                    radius
                );
            }
        }
    }

    #[test]
    fn test_equator_prime_meridian_lands_on_positive_x() {
        // phi = 90 deg, theta = 180 deg: x = -cos(180) * r = r, y = z = 0
        let projected = project_to_sphere(GeoPoint::new(0.0, 0.0), 5.0);
        assert!((projected.x - 5.0).abs() < EPS);
        assert!(projected.y.abs() < EPS);
        assert!(projected.z.abs() < EPS);
    }

    #[test]
    fn test_north_pole_is_longitude_invariant() {
        for longitude in [-180.0, -93.7, 0.0, 45.0, 180.0] {
            let projected = project_to_sphere(GeoPoint::new(90.0, longitude), 5.0);
            assert!(projected.x.abs() < EPS);
            assert!((projected.y - 5.0).abs() < EPS);
            assert!(projected.z.abs() < EPS);
        }
    }

    #[test]
    fn test_antipodal_points_are_opposite() {
        let a = project_to_sphere(GeoPoint::new(30.0, 60.0), 5.0);
        let b = project_to_sphere(GeoPoint::new(-30.0, -120.0), 5.0);
        assert!((a + b).length() < EPS * 5.0);
    }

    #[test]
    fn test_scale_endpoints() {
        assert!((metric_scale(10.0, 10.0, 1000.0, 0.1, 1.0) - 0.1).abs() < EPS);
        assert!((metric_scale(1000.0, 10.0, 1000.0, 0.1, 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_scale_log_midpoint() {
        // 100 is the log-midpoint of [10, 1000], so the scale is the
        // midpoint of [0.1, 1.0]
        let scale = metric_scale(100.0, 10.0, 1000.0, 0.1, 1.0);
        assert!((scale - 0.55).abs() < EPS);
    }

    #[test]
    fn test_scale_is_monotonic() {
        let metrics = [1.0, 3.0, 50.0, 999.0, 40_000.0, 1_000_000.0];
        let scales: Vec<f32> = metrics
            .iter()
            .map(|&m| metric_scale(m, 1.0, 1_000_000.0, 0.1, 1.0))
            .collect();

        for pair in scales.windows(2) {
            assert!(pair[0] <= pair[1], "scale not monotonic: {:?}", scales);
        }
    }

    #[test]
    fn test_scale_respects_custom_range() {
        assert!((metric_scale(2.0, 2.0, 64.0, 0.25, 2.0) - 0.25).abs() < EPS);
        assert!((metric_scale(64.0, 2.0, 64.0, 0.25, 2.0) - 2.0).abs() < EPS);
    }
}
