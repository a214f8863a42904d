//! Octree path encoding: point -> BspIndex -> cell center.
//!
//! Points are divided by the grid scale into standard space, where the root
//! cube spans `[-512, 512]` on every axis. Each level halves the apothem,
//! classifies the point against the current center and moves the center a
//! half-apothem step into the chosen octant.
//!
//! ```text
//! level 0:  center = (0,0,0), apothem = 512
//! level 1:  apothem = 256, center += direction(octant) * 256
//! level 2:  apothem = 128, center += direction(octant) * 128
//! ...
//! level 10: apothem = 0.5  (cells are 1 unit wide in standard space)
//! ```

use glam::DVec3;

use super::BspIndex;
use crate::bounds::AxisRange;
use crate::constants::{
  BITS_PER_LEVEL, DEFAULT_MAX_LEVEL, DEFAULT_SCALE, MAX_LEVEL, OCTANT_MASK, ROOT_APOTHEM,
};
use crate::encoder::SpatialEncoder;
use crate::error::{check_level, scale_error, Result};
use crate::octant::Octant;

/// Lowest valid coordinate for `scale`.
#[inline]
pub fn lower_limit(scale: f64) -> f64 {
  -ROOT_APOTHEM * scale
}

/// Highest valid coordinate for `scale`.
#[inline]
pub fn upper_limit(scale: f64) -> f64 {
  ROOT_APOTHEM * scale
}

/// Valid per-axis range for `scale`.
#[inline]
pub fn limits(scale: f64) -> AxisRange {
  AxisRange::new(lower_limit(scale), upper_limit(scale))
}

/// Half-width of a cell at `level` in world units.
#[inline]
pub fn cell_apothem(scale: f64, level: u32) -> f64 {
  ROOT_APOTHEM * scale / (1u32 << level.min(MAX_LEVEL)) as f64
}

/// Encode `point` into a path of depth `max_level` (0..=10).
///
/// Levels past `max_level` are zero, so the result equals the full-depth key
/// with its low `3 * (10 - max_level)` bits cleared.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(level = "trace", skip_all, name = "bsp::map")
)]
pub fn map(point: DVec3, scale: f64, max_level: u32) -> Result<BspIndex> {
  check_level("max_level", max_level, 0, MAX_LEVEL)?;
  check_scale(scale)?;
  limits(scale).check_point(point)?;

  let standard = point / scale;
  let mut center = DVec3::ZERO;
  let mut apothem = ROOT_APOTHEM;
  let mut path = 0u32;

  for _ in 0..max_level {
    apothem *= 0.5;
    let octant = Octant::classify(standard, center);
    center += octant.direction() * apothem;
    path = (path << BITS_PER_LEVEL) | u32::from(octant.bits());
  }

  Ok(BspIndex::from_bits(
    path << (BITS_PER_LEVEL * (MAX_LEVEL - max_level)),
  ))
}

/// Octant recorded for `level` (1..=10) in `index`.
pub fn octant_at(index: BspIndex, level: u32) -> Result<Octant> {
  check_path_level("level", level)?;
  Ok(octant_at_unchecked(index, level))
}

/// Geometric center of the cell `index` names at depth `level` (0..=10).
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(level = "trace", skip_all, name = "bsp::center")
)]
pub fn center(index: BspIndex, scale: f64, level: u32) -> Result<DVec3> {
  check_level("level", level, 0, MAX_LEVEL)?;
  check_scale(scale)?;
  Ok(center_unchecked(index, scale, level))
}

/// Replays the encode walk with octants read from `index`.
fn center_unchecked(index: BspIndex, scale: f64, level: u32) -> DVec3 {
  let mut center = DVec3::ZERO;
  let mut apothem = ROOT_APOTHEM;

  for step in 1..=level {
    apothem *= 0.5;
    center += octant_at_unchecked(index, step).direction() * apothem;
  }

  center * scale
}

/// Smallest scale whose deepest cell half-width (`scale / 2`) is still a
/// normal float.
pub const MIN_SCALE: f64 = 2.0 * f64::MIN_POSITIVE;

/// Scale must be at least [`MIN_SCALE`] and keep the root cube finite.
pub(crate) fn check_scale(scale: f64) -> Result<()> {
  if scale >= MIN_SCALE && upper_limit(scale).is_finite() {
    Ok(())
  } else {
    Err(scale_error("scale", scale))
  }
}

pub(super) fn check_path_level(name: &'static str, level: u32) -> Result<()> {
  check_level(name, level, 1, MAX_LEVEL)
}

#[inline]
pub(super) fn octant_at_unchecked(index: BspIndex, level: u32) -> Octant {
  let shift = BITS_PER_LEVEL * (MAX_LEVEL - level);
  Octant::from_bits(((index.bits() >> shift) & OCTANT_MASK) as u8)
}

/// Octree encoder bound to a grid scale and depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BspEncoder {
  scale: f64,
  max_level: u32,
}

impl BspEncoder {
  /// Validate and bind `scale` and `max_level`.
  pub fn new(scale: f64, max_level: u32) -> Result<Self> {
    check_level("max_level", max_level, 0, MAX_LEVEL)?;
    check_scale(scale)?;
    Ok(Self { scale, max_level })
  }

  /// Grid scale.
  pub fn scale(&self) -> f64 {
    self.scale
  }

  /// Encoding depth.
  pub fn max_level(&self) -> u32 {
    self.max_level
  }

  /// Encode `point` at this encoder's depth.
  pub fn map(&self, point: DVec3) -> Result<BspIndex> {
    map(point, self.scale, self.max_level)
  }

  /// Center of the cell `index` names at this encoder's depth.
  pub fn center(&self, index: BspIndex) -> DVec3 {
    // Level and scale were validated in `new`.
    center_unchecked(index, self.scale, self.max_level)
  }

  /// Half-width of one cell at this encoder's depth.
  pub fn cell_apothem(&self) -> f64 {
    cell_apothem(self.scale, self.max_level)
  }
}

impl Default for BspEncoder {
  fn default() -> Self {
    Self {
      scale: DEFAULT_SCALE,
      max_level: DEFAULT_MAX_LEVEL,
    }
  }
}

impl SpatialEncoder for BspEncoder {
  type Key = BspIndex;

  fn encode(&self, point: DVec3) -> Result<BspIndex> {
    self.map(point)
  }

  fn cell_center(&self, key: BspIndex) -> DVec3 {
    self.center(key)
  }

  fn limits(&self) -> AxisRange {
    limits(self.scale)
  }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
