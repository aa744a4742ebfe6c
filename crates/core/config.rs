//! Configuration for the spherical Earth model.
//!
//! Values that the free functions hard-code (sphere radius, default circle
//! tessellation) can be overridden here and turned into a
//! [`SphericalModel`](crate::compute::spatial::SphericalModel).
use serde::de::Error;

use crate::compute::spatial::{DEFAULT_CIRCLE_SEGMENTS, EARTH_RADIUS_METERS};

/// Smallest segment count that still describes an area.
pub const MIN_CIRCLE_SEGMENTS: usize = 3;

/// Geometry configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Radius of the sphere used for all distance math, in meters
    #[serde(default = "Config::default_earth_radius_meters")]
    pub earth_radius_meters: f64,

    /// Number of vertices used when a circle is tessellated without an
    /// explicit segment count
    #[serde(default = "Config::default_circle_segments")]
    pub circle_segments: usize,
}

impl Config {
    const fn default_earth_radius_meters() -> f64 {
        EARTH_RADIUS_METERS
    }

    const fn default_circle_segments() -> usize {
        DEFAULT_CIRCLE_SEGMENTS
    }

    pub fn with_earth_radius_meters(mut self, radius: f64) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "Earth radius must be a positive finite number"
        );
        self.earth_radius_meters = radius;
        self
    }

    pub fn with_circle_segments(mut self, segments: usize) -> Self {
        assert!(
            segments >= MIN_CIRCLE_SEGMENTS,
            "Circle segments must be at least {}",
            MIN_CIRCLE_SEGMENTS
        );

        if segments > 100_000 {
            log::warn!(
                "Circle segment count of {} is very large; every tessellated circle \
                allocates one coordinate per segment.",
                segments
            );
        }

        self.circle_segments = segments;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.earth_radius_meters.is_finite() && self.earth_radius_meters > 0.0) {
            return Err(format!(
                "Earth radius must be a positive finite number, got: {}",
                self.earth_radius_meters
            ));
        }

        if self.circle_segments < MIN_CIRCLE_SEGMENTS {
            return Err(format!(
                "Circle segments must be at least {}, got: {}",
                MIN_CIRCLE_SEGMENTS, self.circle_segments
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            earth_radius_meters: Self::default_earth_radius_meters(),
            circle_segments: Self::default_circle_segments(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.earth_radius_meters, 6_371_000.0);
        assert_eq!(config.circle_segments, DEFAULT_CIRCLE_SEGMENTS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default()
            .with_earth_radius_meters(6_378_137.0)
            .with_circle_segments(360);

        let json = config.to_json().unwrap();
        let deserialized = Config::from_json(&json).unwrap();

        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config = Config::from_json(r#"{"circle_segments": 64}"#).unwrap();
        assert_eq!(config.circle_segments, 64);
        assert_eq!(config.earth_radius_meters, EARTH_RADIUS_METERS);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        assert!(Config::from_json(r#"{"circle_segments": 2}"#).is_err());
        assert!(Config::from_json(r#"{"earth_radius_meters": -1.0}"#).is_err());
        assert!(Config::from_json(r#"{"unknown": 1}"#).is_err());
    }

    #[test]
    #[should_panic(expected = "Circle segments must be at least")]
    fn test_with_circle_segments_panics_on_degenerate_count() {
        let _ = Config::default().with_circle_segments(2);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::default().with_circle_segments(500);
        let toml_str = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml_str).unwrap(), config);
        assert!(Config::from_toml("circle_segments = 1").is_err());
    }
}
