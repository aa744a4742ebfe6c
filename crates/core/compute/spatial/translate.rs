//! Offsetting a point by meters on a local flat-Earth approximation.

use super::model::SphericalModel;
use geogeometry_types::Coordinate;

impl SphericalModel {
    /// Move a point `dx` meters north and `dy` meters east.
    ///
    /// Offsets are converted to degrees on the sphere; the longitude offset is
    /// divided by `cos(lat)` of the origin to account for converging
    /// meridians. Accurate to about a meter for offsets of a few kilometers.
    /// Negative offsets move south and west. Undefined at the poles.
    pub fn translate(&self, lat: f64, lon: f64, dx: f64, dy: f64) -> Coordinate {
        let lat_offset = (dx / self.radius_meters()).to_degrees();
        let lon_offset = (dy / self.radius_meters()).to_degrees() / lat.to_radians().cos();
        Coordinate::new(lat + lat_offset, lon + lon_offset)
    }
}

/// Move a point `dx` meters north and `dy` meters east on the Earth.
///
/// This is a short-distance approximation, not an exact geodesic; use
/// [`destination`](super::destination) for bearing based placement.
///
/// # Examples
///
/// ```rust
/// use geogeometry::{distance_between, translate};
///
/// let origin = [52.530564, 13.394964];
/// let moved = translate(origin[0], origin[1], 1000.0, 3000.0);
///
/// let expected = (1000.0_f64.powi(2) + 3000.0_f64.powi(2)).sqrt();
/// assert!((distance_between(origin, moved) - expected).abs() < 1.0);
/// ```
pub fn translate(lat: f64, lon: f64, dx: f64, dy: f64) -> Coordinate {
    SphericalModel::EARTH.translate(lat, lon, dx, dy)
}
