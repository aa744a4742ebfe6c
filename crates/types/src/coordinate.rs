use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Ranges are not enforced here; callers are expected to pass latitudes in
/// [-90, 90] and longitudes in [-180, 180].
///
/// # Examples
///
/// ```
/// use geogeometry_types::Coordinate;
///
/// let berlin = Coordinate::new(52.530564, 13.394964);
/// assert_eq!(berlin.lat(), 52.530564);
/// assert_eq!(berlin.lon(), 13.394964);
///
/// // Two element arrays are read as [lat, lon]
/// let same: Coordinate = [52.530564, 13.394964].into();
/// assert_eq!(same, berlin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// True when both components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Scale both components by `factor` around (0, 0).
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.lat * factor, self.lon * factor)
    }

    /// The coordinate as a `[lat, lon]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_array()
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::coord! { x: coordinate.lon, y: coordinate.lat }
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order_is_lat_lon() {
        let c = Coordinate::from([1.0, 2.0]);
        assert_eq!(c.lat(), 1.0);
        assert_eq!(c.lon(), 2.0);
        assert_eq!(<[f64; 2]>::from(c), [1.0, 2.0]);
    }

    #[test]
    fn test_geo_conversion_swaps_axes() {
        let c = Coordinate::new(40.7128, -74.0060);
        let point: geo::Point<f64> = c.into();
        assert_eq!(point.x(), -74.0060);
        assert_eq!(point.y(), 40.7128);
        assert_eq!(Coordinate::from(point), c);

        let coord: geo::Coord<f64> = c.into();
        assert_eq!(coord.x, -74.0060);
        assert_eq!(Coordinate::from(coord), c);
    }

    #[test]
    fn test_scale() {
        let c = Coordinate::new(-1.0, 2.0).scale(20.0);
        assert_eq!(c, Coordinate::new(-20.0, 40.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(0.0, 0.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }
}
