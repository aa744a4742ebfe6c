//! Spherical geometry: bounding boxes, containment, distance, translation and
//! circle tessellation.
//!
//! Every free function here runs against [`SphericalModel::EARTH`]. Use a
//! [`SphericalModel`] built from a [`Config`](crate::Config) to change the
//! sphere radius or the default circle tessellation.

pub mod bbox;
pub mod circle;
pub mod containment;
pub mod distance;
pub mod model;
pub mod translate;

pub use bbox::{bbox_contains, bounding_box, get_bbox};
pub use circle::{circle_to_polygon, destination};
pub use containment::{point_in_polygon, polygon_contains};
pub use distance::{bearing, distance, distance_between, ring_length};
pub use model::{DEFAULT_CIRCLE_SEGMENTS, EARTH_RADIUS_METERS, SphericalModel};
pub use translate::translate;
