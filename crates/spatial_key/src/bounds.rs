//! Closed coordinate interval shared by every axis of an encoder.

use glam::DVec3;

use crate::error::{Result, SpatialKeyError};

/// Inclusive per-axis coordinate range `[lower, upper]`.
///
/// Every encoder accepts the same range on x, y and z, so a single interval
/// describes its whole valid cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
  /// Minimum coordinate (inclusive).
  pub lower: f64,
  /// Maximum coordinate (inclusive).
  pub upper: f64,
}

impl AxisRange {
  /// Create a new range from lower and upper limits.
  ///
  /// # Panics
  /// Debug-asserts that lower <= upper.
  pub fn new(lower: f64, upper: f64) -> Self {
    debug_assert!(lower <= upper, "range lower must be <= upper");
    Self { lower, upper }
  }

  /// Range centered on zero: `[-half_extent, half_extent]`.
  pub fn symmetric(half_extent: f64) -> Self {
    Self::new(-half_extent, half_extent)
  }

  /// Check if the range contains a coordinate. NaN is never contained.
  #[inline]
  pub fn contains(&self, value: f64) -> bool {
    value >= self.lower && value <= self.upper
  }

  /// Check if all three components of a point lie in the range.
  #[inline]
  pub fn contains_point(&self, point: DVec3) -> bool {
    self.contains(point.x) && self.contains(point.y) && self.contains(point.z)
  }

  /// Validate one coordinate, naming it in the error.
  pub fn check(&self, name: &'static str, value: f64) -> Result<()> {
    if self.contains(value) {
      return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
      param = name,
      value,
      lower = self.lower,
      upper = self.upper,
      "rejected position"
    );
    Err(SpatialKeyError::PositionOutOfRange {
      name,
      value,
      lower: self.lower,
      upper: self.upper,
    })
  }

  /// Validate a point axis by axis (x, then y, then z).
  pub fn check_point(&self, point: DVec3) -> Result<()> {
    self.check("x", point.x)?;
    self.check("y", point.y)?;
    self.check("z", point.z)
  }

  /// Width of the range (upper - lower).
  #[inline]
  pub fn size(&self) -> f64 {
    self.upper - self.lower
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symmetric() {
    let range = AxisRange::symmetric(512.0);
    assert_eq!(range.lower, -512.0);
    assert_eq!(range.upper, 512.0);
    assert_eq!(range.size(), 1024.0);
  }

  #[test]
  fn test_contains_boundaries() {
    let range = AxisRange::new(-2.0, 3.0);

    // Inside
    assert!(range.contains(0.0));

    // On boundary
    assert!(range.contains(-2.0));
    assert!(range.contains(3.0));

    // Outside
    assert!(!range.contains(-2.0001));
    assert!(!range.contains(3.0001));
    assert!(!range.contains(f64::NAN));
    assert!(!range.contains(f64::INFINITY));
  }

  #[test]
  fn test_contains_point() {
    let range = AxisRange::symmetric(10.0);
    assert!(range.contains_point(DVec3::new(10.0, -10.0, 0.0)));
    assert!(!range.contains_point(DVec3::new(0.0, 0.0, 10.5)));
  }

  #[test]
  fn test_check_point_reports_first_bad_axis() {
    let range = AxisRange::symmetric(512.0);
    let err = range
      .check_point(DVec3::new(0.0, 700.0, 600.0))
      .expect_err("y and z are out of range");

    assert_eq!(
      err,
      SpatialKeyError::PositionOutOfRange {
        name: "y",
        value: 700.0,
        lower: -512.0,
        upper: 512.0,
      }
    );
  }
}
