//! Point-in-polygon by edge-crossing parity.

use crate::compute::validation::{validate_coordinate, validate_polygon};
use crate::error::Result;
use geogeometry_types::polygon::Edges;
use geogeometry_types::{Coordinate, Polygon};

/// Check if a point is inside a simple polygon.
///
/// Casts a ray from the point towards increasing longitude and counts the
/// edges it crosses; an odd count means inside. An edge only counts when one
/// endpoint latitude is `>= lat` and the other `< lat`, so a ray through a
/// vertex is counted once.
///
/// Points exactly on an edge or vertex follow that half-open rule and are not
/// guaranteed to be reported either way. Self-intersecting rings and holes are
/// not supported. Rings with fewer than three vertices contain nothing.
///
/// # Examples
///
/// ```rust
/// use geogeometry::{Coordinate, polygon_contains};
///
/// let polygon = [
///     Coordinate::new(-1.0, 1.0),
///     Coordinate::new(2.0, 2.0),
///     Coordinate::new(3.0, -1.0),
///     Coordinate::new(-2.0, -4.0),
/// ];
/// assert!(polygon_contains(0.0, 0.0, &polygon));
/// assert!(!polygon_contains(20.0, 20.0, &polygon));
/// ```
pub fn polygon_contains(lat: f64, lon: f64, polygon: &[Coordinate]) -> bool {
    if polygon.len() < 3 {
        log::warn!(
            "Point-in-polygon test against a degenerate ring of {} vertices",
            polygon.len()
        );
        return false;
    }

    let mut inside = false;
    for (a, b) in Edges::new(polygon) {
        if (a.lat() >= lat) != (b.lat() >= lat) {
            let crossing_lon =
                b.lon() + (lat - b.lat()) / (a.lat() - b.lat()) * (a.lon() - b.lon());
            if lon < crossing_lon {
                inside = !inside;
            }
        }
    }
    inside
}

/// Validated point-in-polygon test.
///
/// # Errors
///
/// Returns an error when the polygon has fewer than three vertices or any
/// coordinate is out of range.
pub fn point_in_polygon(polygon: &Polygon, point: &Coordinate) -> Result<bool> {
    validate_polygon(polygon.vertices())?;
    validate_coordinate(point)?;
    Ok(polygon_contains(point.lat(), point.lon(), polygon.vertices()))
}
