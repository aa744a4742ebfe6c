//! Computational geometry on latitude/longitude coordinates.
//!
//! ## Features
//! - **Bounding boxes**: derive a box from a polygon, inclusive containment tests
//! - **Point in polygon**: even-odd ray casting for simple polygons
//! - **Distance**: haversine great-circle distance on a spherical Earth
//! - **Translate**: move a point by meter offsets north and east
//! - **Circles**: tessellate a radius around a center into a polygon
//! - **Rounding**: decimal-string rounding that never corrupts high precision values
//!
//! All functions are pure; every argument and return value is a plain value.
//! Coordinates are always given latitude first.
//!
//! ```rust
//! use geogeometry::{circle_to_polygon, distance, polygon_contains};
//!
//! let berlin = (52.530564, 13.394964);
//! let fence = circle_to_polygon(100, berlin.0, berlin.1, 5_000.0)?;
//! assert!(polygon_contains(berlin.0, berlin.1, &fence));
//!
//! let d = distance(berlin.0, berlin.1, 52.530564, 13.410821);
//! assert!(d > 1072.0 && d < 1073.0);
//! # Ok::<(), geogeometry::GeoError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{GeoError, Result};

pub use geo::Rect;
pub use geogeometry_types::polygon::Edges;
pub use geogeometry_types::{BoundingBox, Coordinate, Polygon};

pub use compute::rounding::{round_coordinate, round_to_decimals};
pub use compute::spatial::{
    DEFAULT_CIRCLE_SEGMENTS, EARTH_RADIUS_METERS, SphericalModel, bbox_contains, bearing,
    bounding_box, circle_to_polygon, destination, distance, distance_between, get_bbox,
    point_in_polygon, polygon_contains, ring_length, translate,
};

// Re-export validation and GeoJSON utilities
#[cfg(feature = "geojson")]
pub use compute::geojson;
pub use compute::validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{BoundingBox, Config, Coordinate, GeoError, Polygon, Result, SphericalModel};

    pub use crate::{
        bbox_contains, circle_to_polygon, distance, distance_between, get_bbox, polygon_contains,
        round_to_decimals, translate,
    };
}
