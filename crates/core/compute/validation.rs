//! Validation for geographic input.
//!
//! The raw algorithms accept any numbers and leave out-of-range input
//! undefined. These checks back the operations that reject degenerate input
//! with [`GeoError::InvalidArgument`] instead.

use crate::config::MIN_CIRCLE_SEGMENTS;
use crate::error::{GeoError, Result};
use geogeometry_types::Coordinate;

/// Validates a coordinate has a finite latitude in [-90, 90] and a finite
/// longitude in [-180, 180].
///
/// # Examples
///
/// ```
/// use geogeometry::Coordinate;
/// use geogeometry::validation::validate_coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(52.53, 13.39)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, 13.39)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(52.53, 200.0)).is_err());
/// ```
pub fn validate_coordinate(coordinate: &Coordinate) -> Result<()> {
    let (lat, lon) = (coordinate.lat(), coordinate.lon());

    if !lat.is_finite() {
        return Err(GeoError::InvalidArgument(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(GeoError::InvalidArgument(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeoError::InvalidArgument(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeoError::InvalidArgument(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Validates multiple coordinates, reporting the index of the first bad one.
pub fn validate_coordinates(coordinates: &[Coordinate]) -> Result<()> {
    for (idx, coordinate) in coordinates.iter().enumerate() {
        validate_coordinate(coordinate).map_err(|e| {
            log::debug!("Rejected coordinate {} of {}: {}", idx, coordinates.len(), e);
            GeoError::InvalidArgument(format!("Coordinate at index {}: {}", idx, e))
        })?;
    }
    Ok(())
}

/// Validates a polygon ring: at least three vertices, all of them valid.
///
/// # Examples
///
/// ```
/// use geogeometry::Coordinate;
/// use geogeometry::validation::validate_polygon;
///
/// let line = [Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
/// assert!(validate_polygon(&line).is_err());
/// ```
pub fn validate_polygon(vertices: &[Coordinate]) -> Result<()> {
    if vertices.len() < 3 {
        return Err(GeoError::InvalidArgument(format!(
            "Polygon needs at least 3 vertices, got: {}",
            vertices.len()
        )));
    }
    validate_coordinates(vertices)
}

/// Validates a circle radius in meters: finite and not negative.
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(GeoError::InvalidArgument(format!(
            "Radius must be a finite, non-negative number of meters, got: {}",
            radius
        )));
    }
    Ok(())
}

/// Validates the vertex count of a tessellated circle.
pub fn validate_segments(segments: usize) -> Result<()> {
    if segments < MIN_CIRCLE_SEGMENTS {
        return Err(GeoError::InvalidArgument(format!(
            "Circle needs at least {} segments, got: {}",
            MIN_CIRCLE_SEGMENTS, segments
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(validate_coordinate(&Coordinate::new(40.7128, -74.0060)).is_ok());
        assert!(validate_coordinate(&Coordinate::new(51.5074, -0.1278)).is_ok());

        // Edge cases
        assert!(validate_coordinate(&Coordinate::new(90.0, 180.0)).is_ok());
        assert!(validate_coordinate(&Coordinate::new(-90.0, -180.0)).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(validate_coordinate(&Coordinate::new(90.1, 0.0)).is_err());
        assert!(validate_coordinate(&Coordinate::new(0.0, -180.1)).is_err());
        assert!(validate_coordinate(&Coordinate::new(f64::NAN, 0.0)).is_err());
        assert!(validate_coordinate(&Coordinate::new(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_coordinates_reports_index() {
        let coordinates = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(99.0, 1.0),
        ];
        let err = validate_coordinates(&coordinates).unwrap_err();
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_validate_polygon() {
        let triangle = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ];
        assert!(validate_polygon(&triangle).is_ok());
        assert!(validate_polygon(&triangle[..2]).is_err());
        assert!(validate_polygon(&[]).is_err());
    }

    #[test]
    fn test_validate_radius_and_segments() {
        assert!(validate_radius(0.0).is_ok());
        assert!(validate_radius(5_000.0).is_ok());
        assert!(validate_radius(-1.0).is_err());
        assert!(validate_radius(f64::NAN).is_err());
        assert!(validate_radius(f64::INFINITY).is_err());

        assert!(validate_segments(3).is_ok());
        assert!(validate_segments(2).is_err());
        assert!(validate_segments(0).is_err());
    }
}
