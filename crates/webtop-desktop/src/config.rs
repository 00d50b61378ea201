//! Desktop configuration
//!
//! All fields have defaults, so a host can pass a partial JSON object
//! (or nothing at all).

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};

/// Largest accepted `stacking_base`
///
/// Stacking values become CSS `z-index`, a signed 32-bit integer. The
/// headroom leaves room for 65536 windows above the base.
pub const MAX_STACKING_BASE: u32 = i32::MAX as u32 - (1 << 16);

/// Tunables for window placement and sizing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Size of a newly opened window
    pub default_size: Size,
    /// Offset applied per already-open window when cascading
    pub cascade_offset: Vec2,
    /// Smallest size a resize can produce
    pub min_size: Size,
    /// Stacking value of the bottom window
    pub stacking_base: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            default_size: Size::new(900.0, 600.0),
            cascade_offset: Vec2::new(20.0, 20.0),
            min_size: Size::new(100.0, 60.0),
            stacking_base: 1,
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check sizes are usable
    pub fn validate(&self) -> DesktopResult<()> {
        if !self.default_size.is_positive() {
            return Err(DesktopError::InvalidConfig(format!(
                "default_size must be positive, got {}x{}",
                self.default_size.width, self.default_size.height
            )));
        }
        if !self.min_size.is_positive() {
            return Err(DesktopError::InvalidConfig(format!(
                "min_size must be positive, got {}x{}",
                self.min_size.width, self.min_size.height
            )));
        }
        if self.min_size.width > self.default_size.width
            || self.min_size.height > self.default_size.height
        {
            return Err(DesktopError::InvalidConfig(
                "min_size exceeds default_size".to_string(),
            ));
        }
        if self.stacking_base > MAX_STACKING_BASE {
            return Err(DesktopError::InvalidConfig(format!(
                "stacking_base must be at most {}, got {}",
                MAX_STACKING_BASE, self.stacking_base
            )));
        }
        if !self.cascade_offset.x.is_finite() || !self.cascade_offset.y.is_finite() {
            return Err(DesktopError::InvalidConfig(
                "cascade_offset must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DesktopConfig::default();
        assert_eq!(config.default_size, Size::new(900.0, 600.0));
        assert_eq!(config.cascade_offset, Vec2::new(20.0, 20.0));
        assert_eq!(config.min_size, Size::new(100.0, 60.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            DesktopConfig::from_json(r#"{"cascade_offset": {"x": 32.0, "y": 24.0}}"#).unwrap();
        assert_eq!(config.cascade_offset, Vec2::new(32.0, 24.0));
        assert_eq!(config.default_size, Size::new(900.0, 600.0));

        assert_eq!(DesktopConfig::from_json("{}").unwrap(), DesktopConfig::default());
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let err = DesktopConfig::from_json(r#"{"min_size": {"width": 0.0, "height": 60.0}}"#)
            .unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));

        let err = DesktopConfig::from_json(
            r#"{"min_size": {"width": 1000.0, "height": 60.0}}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DesktopError::InvalidConfig("min_size exceeds default_size".to_string())
        );
    }

    #[test]
    fn test_rejects_stacking_base_out_of_range() {
        let err = DesktopConfig::from_json(r#"{"stacking_base": 4294967295}"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));

        let json = format!(r#"{{"stacking_base": {}}}"#, MAX_STACKING_BASE);
        assert_eq!(
            DesktopConfig::from_json(&json).unwrap().stacking_base,
            MAX_STACKING_BASE
        );
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = DesktopConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
