//! Bounding box construction and containment.

use crate::error::{GeoError, Result};
use geogeometry_types::{BoundingBox, Coordinate};

/// Smallest axis-aligned box holding every vertex.
///
/// north/south are the latitude extrema, east/west the longitude extrema.
/// There is no antimeridian handling.
///
/// # Errors
///
/// Returns an error for an empty vertex list.
///
/// # Examples
///
/// ```rust
/// use geogeometry::{Coordinate, get_bbox};
///
/// let polygon = [
///     Coordinate::new(-1.0, 1.0),
///     Coordinate::new(2.0, 2.0),
///     Coordinate::new(3.0, -1.0),
///     Coordinate::new(-2.0, -4.0),
/// ];
/// let bbox = get_bbox(&polygon)?;
/// assert_eq!((bbox.south, bbox.north, bbox.west, bbox.east), (-2.0, 3.0, -4.0, 2.0));
/// # Ok::<(), geogeometry::GeoError>(())
/// ```
pub fn get_bbox(polygon: &[Coordinate]) -> Result<BoundingBox> {
    let Some(first) = polygon.first() else {
        return Err(GeoError::InvalidArgument(
            "Cannot compute the bounding box of an empty polygon".to_string(),
        ));
    };

    let start = BoundingBox::new(first.lat(), first.lat(), first.lon(), first.lon());
    Ok(polygon.iter().skip(1).fold(start, |bbox, c| {
        BoundingBox::new(
            bbox.south.min(c.lat()),
            bbox.north.max(c.lat()),
            bbox.west.min(c.lon()),
            bbox.east.max(c.lon()),
        )
    }))
}

/// Check if a point lies within a bounding box, edges included.
///
/// # Examples
///
/// ```rust
/// use geogeometry::{BoundingBox, bbox_contains};
///
/// let bbox = BoundingBox::new(-1.0, 1.0, -2.0, 2.0);
/// assert!(bbox_contains(&bbox, -1.0, 2.0));
/// assert!(!bbox_contains(&bbox, -1.1, -2.1));
/// ```
#[inline]
pub fn bbox_contains(bbox: &BoundingBox, lat: f64, lon: f64) -> bool {
    bbox.contains(lat, lon)
}

/// Create a bounding box from its edges, rejecting inverted ordering.
///
/// # Errors
///
/// Returns an error if south > north or west > east.
pub fn bounding_box(south: f64, north: f64, west: f64, east: f64) -> Result<BoundingBox> {
    if south > north {
        return Err(GeoError::InvalidArgument(format!(
            "south ({}) must be <= north ({})",
            south, north
        )));
    }
    if west > east {
        return Err(GeoError::InvalidArgument(format!(
            "west ({}) must be <= east ({})",
            west, east
        )));
    }

    Ok(BoundingBox::new(south, north, west, east))
}
