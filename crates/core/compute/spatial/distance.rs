//! Great-circle distance and bearing.

use super::model::SphericalModel;
use geogeometry_types::Coordinate;
use geogeometry_types::polygon::Edges;

impl SphericalModel {
    /// Haversine distance between two points in meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogeometry::SphericalModel;
    ///
    /// let d = SphericalModel::EARTH.distance(52.530564, 13.394964, 52.530564, 13.410821);
    /// assert!(d > 1072.0 && d < 1073.0);
    /// ```
    pub fn distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        self.radius_meters() * central_angle(lat1, lon1, lat2, lon2)
    }

    /// Haversine distance between two coordinates in meters.
    pub fn distance_between(&self, p1: impl Into<Coordinate>, p2: impl Into<Coordinate>) -> f64 {
        let (p1, p2) = (p1.into(), p2.into());
        self.distance(p1.lat(), p1.lon(), p2.lat(), p2.lon())
    }

    /// Length of a closed ring in meters, including the edge from the last
    /// vertex back to the first.
    pub fn ring_length(&self, ring: &[Coordinate]) -> f64 {
        Edges::new(ring)
            .map(|(a, b)| self.distance_between(*a, *b))
            .sum()
    }
}

/// Central angle between two points in radians.
fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance in meters between two points on the Earth.
///
/// Uses the haversine formula on a sphere of radius
/// [`EARTH_RADIUS_METERS`](super::EARTH_RADIUS_METERS).
///
/// # Examples
///
/// ```rust
/// use geogeometry::distance;
///
/// let d = distance(52.530564, 13.394964, 52.530564, 13.410821);
/// assert!(d > 1072.0 && d < 1073.0);
/// ```
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    SphericalModel::EARTH.distance(lat1, lon1, lat2, lon2)
}

/// Great-circle distance in meters between two coordinates.
///
/// Accepts anything that converts into a [`Coordinate`], including
/// `[lat, lon]` arrays and `(lat, lon)` tuples.
///
/// # Examples
///
/// ```rust
/// use geogeometry::{Coordinate, distance_between};
///
/// let a = [52.530564, 13.394964];
/// let b = Coordinate::new(52.530564, 13.410821);
/// assert_eq!(distance_between(a, b), distance_between(b, a));
/// ```
pub fn distance_between(p1: impl Into<Coordinate>, p2: impl Into<Coordinate>) -> f64 {
    SphericalModel::EARTH.distance_between(p1, p2)
}

/// Length in meters of a closed ring on the Earth.
pub fn ring_length(ring: &[Coordinate]) -> f64 {
    SphericalModel::EARTH.ring_length(ring)
}

/// Initial great-circle bearing from `from` to `to`, in degrees clockwise
/// from north within [0, 360).
///
/// The bearing between identical points is 0.
///
/// # Examples
///
/// ```rust
/// use geogeometry::bearing;
///
/// let east = bearing([0.0, 0.0], [0.0, 1.0]);
/// assert!((east - 90.0).abs() < 1e-9);
/// ```
pub fn bearing(from: impl Into<Coordinate>, to: impl Into<Coordinate>) -> f64 {
    let (from, to) = (from.into(), to.into());
    let phi1 = from.lat().to_radians();
    let phi2 = to.lat().to_radians();
    let delta_lambda = (to.lon() - from.lon()).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    let degrees = y.atan2(x).to_degrees().rem_euclid(360.0);
    // tiny negative angles wrap to exactly 360.0
    if degrees >= 360.0 { 0.0 } else { degrees }
}
