//! Error type for geogeometry operations.

use thiserror::Error;

#[cfg(feature = "geojson")]
use geogeometry_types::GeoJsonError;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[cfg(feature = "geojson")]
    #[error(transparent)]
    GeoJson(#[from] GeoJsonError),
}

pub type Result<T> = std::result::Result<T, GeoError>;
