//! GeoJSON conversion for geofences.

use crate::compute::spatial::{circle_to_polygon, get_bbox, polygon_contains};
use crate::compute::validation::validate_polygon;
use crate::error::Result;
use geogeometry_types::{BoundingBox, Polygon};

/// Tessellates a circle and serializes it as a GeoJSON `Polygon`.
///
/// # Examples
///
/// ```
/// use geogeometry::geojson::circle_to_geojson;
///
/// let json = circle_to_geojson(32, 52.530564, 13.394964, 500.0)?;
/// assert!(json.contains("Polygon"));
/// # Ok::<(), geogeometry::GeoError>(())
/// ```
pub fn circle_to_geojson(segments: usize, lat: f64, lon: f64, radius: f64) -> Result<String> {
    let ring = circle_to_polygon(segments, lat, lon, radius)?;
    Ok(Polygon::new(ring).to_geojson()?)
}

/// Parses a GeoJSON `Polygon` and validates its exterior ring.
pub fn polygon_from_geojson(geojson: &str) -> Result<Polygon> {
    let polygon = Polygon::from_geojson(geojson)?;
    validate_polygon(polygon.vertices())?;
    Ok(polygon)
}

/// Serializes the bounding box of a GeoJSON `Polygon` as another `Polygon`.
pub fn bbox_to_geojson(bbox: &BoundingBox) -> Result<String> {
    Ok(bbox.to_geojson()?)
}

/// Checks whether (lat, lon) falls inside a GeoJSON `Polygon`.
///
/// The bounding box is tested first so far-away points skip the edge walk.
///
/// # Examples
///
/// ```
/// use geogeometry::geojson::geojson_contains;
///
/// let fence = r#"{"type":"Polygon","coordinates":[[[13.0,52.0],[14.0,52.0],[14.0,53.0],[13.0,53.0],[13.0,52.0]]]}"#;
/// assert!(geojson_contains(fence, 52.5, 13.4)?);
/// assert!(!geojson_contains(fence, 48.1, 11.6)?);
/// # Ok::<(), geogeometry::GeoError>(())
/// ```
pub fn geojson_contains(geojson: &str, lat: f64, lon: f64) -> Result<bool> {
    let polygon = polygon_from_geojson(geojson)?;
    let bbox = get_bbox(polygon.vertices())?;
    if !bbox.contains(lat, lon) {
        return Ok(false);
    }
    Ok(polygon_contains(lat, lon, polygon.vertices()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;

    #[test]
    fn test_circle_roundtrip_through_geojson() {
        let json = circle_to_geojson(16, 52.530564, 13.394964, 1000.0).unwrap();
        let polygon = polygon_from_geojson(&json).unwrap();
        assert_eq!(polygon.len(), 16);
        assert!(geojson_contains(&json, 52.530564, 13.394964).unwrap());
    }

    #[test]
    fn test_degenerate_geojson_polygon_rejected() {
        let json = r#"{"type":"Polygon","coordinates":[[[13.0,52.0],[14.0,52.0],[13.0,52.0]]]}"#;
        assert!(matches!(
            polygon_from_geojson(json),
            Err(GeoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_malformed_geojson_reports_geojson_error() {
        assert!(matches!(
            polygon_from_geojson("{"),
            Err(GeoError::GeoJson(_))
        ));
    }

    #[test]
    fn test_bbox_geojson() {
        let bbox = BoundingBox::new(52.0, 53.0, 13.0, 14.0);
        let json = bbox_to_geojson(&bbox).unwrap();
        let polygon = polygon_from_geojson(&json).unwrap();
        assert_eq!(get_bbox(polygon.vertices()).unwrap(), bbox);
    }
}
