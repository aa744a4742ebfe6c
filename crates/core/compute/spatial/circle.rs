//! Destination points and circle tessellation.

use super::model::SphericalModel;
use crate::compute::validation::{validate_coordinate, validate_radius, validate_segments};
use crate::error::Result;
use geogeometry_types::{Coordinate, Polygon};

impl SphericalModel {
    /// Point reached by travelling `distance` meters from (lat, lon) along
    /// the great circle with initial `bearing` (degrees clockwise from north).
    ///
    /// The result longitude is normalized to [-180, 180).
    pub fn destination(&self, lat: f64, lon: f64, bearing: f64, distance: f64) -> Coordinate {
        let delta = distance / self.radius_meters();
        let theta = bearing.to_radians();
        let phi1 = lat.to_radians();
        let lambda1 = lon.to_radians();

        let sin_phi2 =
            (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).clamp(-1.0, 1.0);
        let phi2 = sin_phi2.asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

        Coordinate::new(phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
    }

    /// Approximate a circle with `segments` vertices, each exactly `radius`
    /// meters from the center.
    ///
    /// Vertex `k` sits at bearing `k * 360 / segments`, so the ring starts due
    /// north and runs clockwise. The first vertex is not repeated at the end.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 3 segments, an out-of-range center or a
    /// negative or non-finite radius.
    pub fn circle_to_polygon(
        &self,
        segments: usize,
        lat: f64,
        lon: f64,
        radius: f64,
    ) -> Result<Vec<Coordinate>> {
        validate_segments(segments)?;
        validate_coordinate(&Coordinate::new(lat, lon))?;
        validate_radius(radius)?;

        let step = 360.0 / segments as f64;
        Ok((0..segments)
            .map(|k| self.destination(lat, lon, k as f64 * step, radius))
            .collect())
    }

    /// Tessellate a circle with this model's default segment count.
    pub fn circle(&self, center: &Coordinate, radius: f64) -> Result<Polygon> {
        self.circle_to_polygon(self.circle_segments(), center.lat(), center.lon(), radius)
            .map(Polygon::new)
    }
}

fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

/// Destination point on the Earth given a start, bearing and distance.
///
/// # Examples
///
/// ```rust
/// use geogeometry::{destination, distance};
///
/// let north = destination(52.530564, 13.394964, 0.0, 1_000.0);
/// assert!(north.lat() > 52.530564);
/// assert!((distance(52.530564, 13.394964, north.lat(), north.lon()) - 1_000.0).abs() < 1e-6);
/// ```
pub fn destination(lat: f64, lon: f64, bearing: f64, distance: f64) -> Coordinate {
    SphericalModel::EARTH.destination(lat, lon, bearing, distance)
}

/// Approximate a circle of `radius` meters around (lat, lon) on the Earth
/// with a ring of `segments` vertices.
///
/// # Examples
///
/// ```rust
/// use geogeometry::{circle_to_polygon, distance};
///
/// let ring = circle_to_polygon(500, 52.530564, 13.394964, 5000.0)?;
/// assert_eq!(ring.len(), 500);
/// for vertex in &ring {
///     let d = distance(52.530564, 13.394964, vertex.lat(), vertex.lon());
///     assert!((d - 5000.0).abs() < 1.0);
/// }
/// # Ok::<(), geogeometry::GeoError>(())
/// ```
pub fn circle_to_polygon(
    segments: usize,
    lat: f64,
    lon: f64,
    radius: f64,
) -> Result<Vec<Coordinate>> {
    SphericalModel::EARTH.circle_to_polygon(segments, lat, lon, radius)
}
