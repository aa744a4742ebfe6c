//! # geogeometry-types
//!
//! Value types shared by the geogeometry algorithms.
//!
//! - **Coordinate**: a latitude/longitude pair in decimal degrees
//! - **BoundingBox**: an axis-aligned (south, north, west, east) rectangle
//! - **Polygon**: a closed ring of coordinates with an implicit closing edge
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's primitives. Note the argument order: this crate always takes
//! latitude first, while `geo` stores longitude as `x`.
//!
//! ## Examples
//!
//! ```rust
//! use geogeometry_types::{BoundingBox, Coordinate};
//!
//! let berlin = Coordinate::new(52.530564, 13.394964);
//! let bbox = BoundingBox::new(52.0, 53.0, 13.0, 14.0);
//! assert!(bbox.contains_coordinate(&berlin));
//! ```

pub mod bbox;
pub mod coordinate;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod polygon;

pub use bbox::BoundingBox;
pub use coordinate::Coordinate;
#[cfg(feature = "geojson")]
pub use self::geojson::GeoJsonError;
pub use polygon::Polygon;
