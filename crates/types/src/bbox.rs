use crate::coordinate::Coordinate;
use crate::polygon::Polygon;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in degree space.
///
/// Stored as (south, north, west, east), i.e. (min lat, max lat, min lon,
/// max lon). There is no antimeridian handling: a box is always the plain
/// rectangle `west..=east` by `south..=north`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude
    pub south: f64,
    /// Maximum latitude
    pub north: f64,
    /// Minimum longitude
    pub west: f64,
    /// Maximum longitude
    pub east: f64,
}

impl BoundingBox {
    /// Create a bounding box from its four edges.
    ///
    /// # Arguments
    ///
    /// * `south` - Minimum latitude
    /// * `north` - Maximum latitude
    /// * `west` - Minimum longitude
    /// * `east` - Maximum longitude
    ///
    /// # Examples
    ///
    /// ```
    /// use geogeometry_types::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(-1.0, 1.0, -2.0, 2.0);
    /// assert_eq!(bbox.north, 1.0);
    /// ```
    pub const fn new(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }

    /// Check if a point is inside the box. All four edges are inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogeometry_types::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(-1.0, 1.0, -2.0, 2.0);
    /// assert!(bbox.contains(1.0, 2.0));
    /// assert!(!bbox.contains(-1.1, -2.1));
    /// ```
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south && lat <= self.north && lon >= self.west && lon <= self.east
    }

    /// Check if a coordinate is inside the box.
    #[inline]
    pub fn contains_coordinate(&self, coordinate: &Coordinate) -> bool {
        self.contains(coordinate.lat(), coordinate.lon())
    }

    /// Check if this bounding box intersects with another. Touching edges count.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.east < other.west
            || self.west > other.east
            || self.north < other.south
            || self.south > other.north)
    }

    /// Midpoint of the box in degree space.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// The four corners as a polygon, counter-clockwise from south-west.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(vec![
            Coordinate::new(self.south, self.west),
            Coordinate::new(self.south, self.east),
            Coordinate::new(self.north, self.east),
            Coordinate::new(self.north, self.west),
        ])
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min().y, rect.max().y, rect.min().x, rect.max().x)
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            geo::coord! { x: bbox.west, y: bbox.south },
            geo::coord! { x: bbox.east, y: bbox.north },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_contains_edges() {
        let bbox = BoundingBox::new(-1.0, 1.0, -2.0, 2.0);
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(1.0, 2.0));
        assert!(bbox.contains(-1.0, 2.0));
        assert!(bbox.contains(-1.0, -2.0));
        assert!(!bbox.contains(-1.1, -2.1));
        assert!(!bbox.contains(0.0, 2.1));
        assert!(!bbox.contains(1.1, 0.0));
    }

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BoundingBox::new(0.0, 5.0, 0.0, 10.0);
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 5.0);
        assert_eq!(bbox.center(), Coordinate::new(2.5, 5.0));
    }

    #[test]
    fn test_bbox_intersects() {
        let a = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        let b = BoundingBox::new(5.0, 15.0, 5.0, 15.0);
        let c = BoundingBox::new(20.0, 30.0, 20.0, 30.0);
        let touching = BoundingBox::new(10.0, 12.0, 0.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching));
    }

    #[test]
    fn test_rect_roundtrip_keeps_axes() {
        let bbox = BoundingBox::new(40.7, 40.8, -74.0, -73.9);
        let rect: Rect<f64> = bbox.into();
        assert_eq!(rect.min().x, -74.0);
        assert_eq!(rect.min().y, 40.7);
        assert_eq!(BoundingBox::from(rect), bbox);
    }

    #[test]
    fn test_to_polygon_corners() {
        let bbox = BoundingBox::new(0.0, 1.0, 2.0, 3.0);
        let polygon = bbox.to_polygon();
        assert_eq!(polygon.len(), 4);
        assert!(polygon.iter().all(|c| bbox.contains_coordinate(c)));
    }
}
