//! Error types for spatial key encoding.
//!
//! Every variant is a caller error raised by eager validation at the public
//! boundary. Nothing is clamped and nothing is retried.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SpatialKeyError>;

/// Failure raised when an encoder input falls outside its valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialKeyError {
  /// Octree depth or octant-decode level outside `[min, max]`.
  #[error("{name} = {value} is out of range [{min}, {max}]")]
  LevelOutOfRange {
    name: &'static str,
    value: u32,
    min: u32,
    max: u32,
  },

  /// Grid scale or tick spacing is not a usable positive value.
  #[error("{name} = {value} must be positive, finite and keep the coordinate range representable")]
  ScaleOutOfRange { name: &'static str, value: f64 },

  /// Coordinate outside the encoder's limits for the supplied scale/spacing.
  #[error("{name} = {value} is out of range [{lower}, {upper}]")]
  PositionOutOfRange {
    name: &'static str,
    value: f64,
    lower: f64,
    upper: f64,
  },
}

/// Check `value` against the inclusive level range `[min, max]`.
pub(crate) fn check_level(name: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
  if (min..=max).contains(&value) {
    return Ok(());
  }
  #[cfg(feature = "tracing")]
  tracing::debug!(param = name, value, min, max, "rejected level");
  Err(SpatialKeyError::LevelOutOfRange {
    name,
    value,
    min,
    max,
  })
}

/// Build a [`SpatialKeyError::ScaleOutOfRange`], logging it when tracing is on.
pub(crate) fn scale_error(name: &'static str, value: f64) -> SpatialKeyError {
  #[cfg(feature = "tracing")]
  tracing::debug!(param = name, value, "rejected scale");
  SpatialKeyError::ScaleOutOfRange { name, value }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_level_inclusive_bounds() {
    assert!(check_level("level", 0, 0, 10).is_ok());
    assert!(check_level("level", 10, 0, 10).is_ok());
    assert_eq!(
      check_level("level", 11, 0, 10),
      Err(SpatialKeyError::LevelOutOfRange {
        name: "level",
        value: 11,
        min: 0,
        max: 10
      })
    );
    assert!(check_level("level", 0, 1, 10).is_err());
  }

  #[test]
  fn test_error_message_names_parameter_and_range() {
    let err = SpatialKeyError::PositionOutOfRange {
      name: "z",
      value: 600.0,
      lower: -512.0,
      upper: 512.0,
    };
    assert_eq!(err.to_string(), "z = 600 is out of range [-512, 512]");

    let err = scale_error("scale", -1.0);
    assert!(err.to_string().starts_with("scale = -1"));
  }
}
