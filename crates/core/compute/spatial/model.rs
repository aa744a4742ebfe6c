//! The sphere every distance computation runs against.

use crate::config::Config;
use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Vertex count used by [`SphericalModel::circle`].
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 100;

/// A sphere of fixed radius plus the default circle tessellation.
///
/// The distance, translation and circle operations are implemented as
/// methods on this type in their own modules; the crate-level free functions
/// call them on [`SphericalModel::EARTH`].
///
/// # Examples
///
/// ```
/// use geogeometry::{Config, SphericalModel};
///
/// let wgs84_equatorial = Config::default().with_earth_radius_meters(6_378_137.0);
/// let model = SphericalModel::from_config(&wgs84_equatorial)?;
///
/// let d = model.distance(0.0, 0.0, 0.0, 1.0);
/// assert!(d > SphericalModel::EARTH.distance(0.0, 0.0, 0.0, 1.0));
/// # Ok::<(), geogeometry::GeoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalModel {
    radius_meters: f64,
    circle_segments: usize,
}

impl SphericalModel {
    /// Spherical Earth with a mean radius of 6,371 km.
    pub const EARTH: Self = Self {
        radius_meters: EARTH_RADIUS_METERS,
        circle_segments: DEFAULT_CIRCLE_SEGMENTS,
    };

    pub fn new(radius_meters: f64, circle_segments: usize) -> Result<Self> {
        Self::from_config(&Config {
            earth_radius_meters: radius_meters,
            circle_segments,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().map_err(GeoError::InvalidConfig)?;
        Ok(Self {
            radius_meters: config.earth_radius_meters,
            circle_segments: config.circle_segments,
        })
    }

    #[inline]
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    #[inline]
    pub fn circle_segments(&self) -> usize {
        self.circle_segments
    }
}

impl Default for SphericalModel {
    fn default() -> Self {
        Self::EARTH
    }
}
