//! GeoJSON conversion for the value types.
//!
//! GeoJSON positions are `[longitude, latitude]`, the reverse of the
//! `[lat, lon]` order used everywhere else in this crate.

use crate::bbox::BoundingBox;
use crate::coordinate::Coordinate;
use crate::polygon::Polygon;
use ::geojson::{Geometry, Value};

/// Error type for GeoJSON conversions.
#[derive(Debug)]
pub enum GeoJsonError {
    /// Serialization failed
    Serialization(String),
    /// Deserialization failed
    Deserialization(String),
    /// Invalid geometry type
    InvalidGeometry(String),
    /// Invalid coordinates
    InvalidCoordinates(String),
}

impl std::fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "GeoJSON serialization error: {}", msg),
            Self::Deserialization(msg) => write!(f, "GeoJSON deserialization error: {}", msg),
            Self::InvalidGeometry(msg) => write!(f, "Invalid GeoJSON geometry: {}", msg),
            Self::InvalidCoordinates(msg) => write!(f, "Invalid GeoJSON coordinates: {}", msg),
        }
    }
}

impl std::error::Error for GeoJsonError {}

fn position(coordinate: &Coordinate) -> Vec<f64> {
    vec![coordinate.lon(), coordinate.lat()]
}

fn coordinate(position: &[f64]) -> Result<Coordinate, GeoJsonError> {
    match position {
        [lon, lat, ..] => Ok(Coordinate::new(*lat, *lon)),
        _ => Err(GeoJsonError::InvalidCoordinates(
            "Coordinate must have at least 2 values".to_string(),
        )),
    }
}

fn parse(geojson: &str) -> Result<Geometry, GeoJsonError> {
    serde_json::from_str(geojson)
        .map_err(|e| GeoJsonError::Deserialization(format!("Failed to parse GeoJSON: {}", e)))
}

fn serialize(geometry: &Geometry, what: &str) -> Result<String, GeoJsonError> {
    serde_json::to_string(geometry)
        .map_err(|e| GeoJsonError::Serialization(format!("Failed to serialize {}: {}", what, e)))
}

impl Coordinate {
    /// Convert to a GeoJSON `Point`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogeometry_types::Coordinate;
    ///
    /// let json = Coordinate::new(40.7128, -74.006).to_geojson().unwrap();
    /// assert!(json.contains("Point"));
    /// ```
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        serialize(&Geometry::new(Value::Point(position(self))), "point")
    }

    /// Parse from a GeoJSON `Point`.
    pub fn from_geojson(geojson: &str) -> Result<Self, GeoJsonError> {
        match parse(geojson)?.value {
            Value::Point(coords) => coordinate(&coords),
            _ => Err(GeoJsonError::InvalidGeometry(
                "GeoJSON geometry is not a Point".to_string(),
            )),
        }
    }
}

impl Polygon {
    /// Convert to a GeoJSON `Polygon` with an explicitly closed exterior ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogeometry_types::{Coordinate, Polygon};
    ///
    /// let polygon = Polygon::new(vec![
    ///     Coordinate::new(35.0, -80.0),
    ///     Coordinate::new(35.0, -70.0),
    ///     Coordinate::new(45.0, -70.0),
    /// ]);
    /// let json = polygon.to_geojson().unwrap();
    /// assert!(json.contains("Polygon"));
    /// ```
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        let mut ring: Vec<Vec<f64>> = self.iter().map(position).collect();
        if let Some(first) = self.vertices().first() {
            ring.push(position(first));
        }
        serialize(&Geometry::new(Value::Polygon(vec![ring])), "polygon")
    }

    /// Parse the exterior ring of a GeoJSON `Polygon`. Interior rings are
    /// ignored and the closing vertex is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogeometry_types::Polygon;
    ///
    /// let json = r#"{"type":"Polygon","coordinates":[[[-80.0,35.0],[-70.0,35.0],[-70.0,45.0],[-80.0,35.0]]]}"#;
    /// let polygon = Polygon::from_geojson(json).unwrap();
    /// assert_eq!(polygon.len(), 3);
    /// assert_eq!(polygon.vertices()[0].lat(), 35.0);
    /// ```
    pub fn from_geojson(geojson: &str) -> Result<Self, GeoJsonError> {
        let rings = match parse(geojson)?.value {
            Value::Polygon(rings) => rings,
            _ => {
                return Err(GeoJsonError::InvalidGeometry(
                    "GeoJSON geometry is not a Polygon".to_string(),
                ));
            }
        };

        let Some(exterior) = rings.first() else {
            return Err(GeoJsonError::InvalidCoordinates(
                "Polygon must have at least one ring".to_string(),
            ));
        };

        let mut vertices = exterior
            .iter()
            .map(|p| coordinate(p))
            .collect::<Result<Vec<_>, _>>()?;
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Ok(Polygon::new(vertices))
    }
}

impl BoundingBox {
    /// Convert to a GeoJSON `Polygon` covering the box.
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        self.to_polygon().to_geojson()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_roundtrip_uses_lon_lat_order() {
        let c = Coordinate::new(52.53, 13.39);
        let json = c.to_geojson().unwrap();
        assert!(json.contains("[13.39,52.53]"));
        assert_eq!(Coordinate::from_geojson(&json).unwrap(), c);
    }

    #[test]
    fn test_polygon_ring_is_closed_in_json() {
        let polygon = BoundingBox::new(0.0, 1.0, 0.0, 1.0).to_polygon();
        let json = polygon.to_geojson().unwrap();
        let geometry: Geometry = serde_json::from_str(&json).unwrap();
        match geometry.value {
            Value::Polygon(rings) => {
                assert_eq!(rings[0].len(), 5);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("unexpected geometry: {:?}", other),
        }
        assert_eq!(Polygon::from_geojson(&json).unwrap(), polygon);
    }

    #[test]
    fn test_wrong_geometry_type() {
        let json = r#"{"type":"Point","coordinates":[1.0,2.0]}"#;
        assert!(matches!(
            Polygon::from_geojson(json),
            Err(GeoJsonError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Coordinate::from_geojson("not json"),
            Err(GeoJsonError::Deserialization(_))
        ));
    }

    #[test]
    fn test_short_position_rejected() {
        let json = r#"{"type":"Point","coordinates":[1.0]}"#;
        assert!(Coordinate::from_geojson(json).is_err());
        assert!(matches!(
            coordinate(&[1.0]),
            Err(GeoJsonError::InvalidCoordinates(_))
        ));
    }
}
