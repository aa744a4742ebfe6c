//! Spatial algorithms, decimal rounding, validation, and GeoJSON conversion.

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod rounding;
pub mod spatial;
pub mod validation;
