//! 32-bit tick hash: three 10-bit two's-complement fields.
//!
//! ```text
//! bits:  31 30 │ 29 ........ 20 │ 19 ........ 10 │ 9 ......... 0
//!        0  0  │       x        │       y        │      z
//! ```

use glam::{DVec3, IVec3};

use super::quantize::RulerLayout;
use crate::bounds::AxisRange;
use crate::constants::{
  field_mask, DEFAULT_TICK_SPACING, RULER32_FIELD_BITS, RULER32_LIMIT_MARGIN,
  RULER32_MAX_GRID_SIZE,
};
use crate::encoder::SpatialEncoder;
use crate::error::Result;

pub(crate) const LAYOUT: RulerLayout = RulerLayout {
  field_bits: RULER32_FIELD_BITS,
  max_grid_size: RULER32_MAX_GRID_SIZE,
  margin: RULER32_LIMIT_MARGIN,
};

/// Packed 3D tick hash in 32 bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TickHash32(u32);

impl TickHash32 {
  /// Build from a raw word. Bits 31-30 are cleared.
  #[inline]
  pub const fn from_bits(bits: u32) -> Self {
    Self(bits & field_mask(3 * RULER32_FIELD_BITS) as u32)
  }

  /// Raw word.
  #[inline]
  pub const fn bits(self) -> u32 {
    self.0
  }

  /// Signed view of the word.
  #[inline]
  pub const fn to_i32(self) -> i32 {
    self.0 as i32
  }

  /// Tick marks of the three axes.
  #[inline]
  pub fn tick_marks(self) -> IVec3 {
    decode_3d(self)
  }
}

impl From<TickHash32> for u32 {
  fn from(hash: TickHash32) -> Self {
    hash.bits()
  }
}

/// Lowest valid coordinate for `spacing`.
#[inline]
pub fn lower_limit(spacing: i32) -> f64 {
  LAYOUT.lower_limit(spacing)
}

/// Highest valid coordinate for `spacing`.
#[inline]
pub fn upper_limit(spacing: i32) -> f64 {
  LAYOUT.upper_limit(spacing)
}

/// Single-axis 10-bit field for `position`.
pub fn create_tick_hash(position: f64, spacing: i32) -> Result<u32> {
  Ok(LAYOUT.encode_axis(position, spacing)? as u32)
}

/// Tick mark stored in the low 10 bits of `field`.
#[inline]
pub fn decode_tick_hash(field: u32) -> i32 {
  LAYOUT.decode_field(field as u64) as i32
}

/// Pack `point` into `x << 20 | y << 10 | z`.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(level = "trace", skip_all, name = "ruler32::create_3d")
)]
pub fn create_3d(point: DVec3, spacing: i32) -> Result<TickHash32> {
  Ok(TickHash32(LAYOUT.encode_point(point, spacing)? as u32))
}

/// Tick marks `(x, y, z)` of a packed hash.
#[inline]
pub fn decode_3d(hash: TickHash32) -> IVec3 {
  let [x, y, z] = LAYOUT.decode_point(hash.0 as u64);
  IVec3::new(x as i32, y as i32, z as i32)
}

/// Center of the cell named by `hash`.
pub fn center(hash: TickHash32, spacing: i32) -> Result<DVec3> {
  LAYOUT.check_spacing(spacing)?;
  Ok(LAYOUT.center(hash.0 as u64, spacing))
}

/// 32-bit ruler encoder bound to a tick spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulerEncoder32 {
  spacing: i32,
}

impl RulerEncoder32 {
  /// Validate and bind `spacing`.
  pub fn new(spacing: i32) -> Result<Self> {
    LAYOUT.check_spacing(spacing)?;
    Ok(Self { spacing })
  }

  /// Tick spacing.
  pub fn spacing(&self) -> i32 {
    self.spacing
  }

  pub fn create_3d(&self, point: DVec3) -> Result<TickHash32> {
    create_3d(point, self.spacing)
  }

  pub fn create_tick_hash(&self, position: f64) -> Result<u32> {
    create_tick_hash(position, self.spacing)
  }

  pub fn center(&self, hash: TickHash32) -> DVec3 {
    LAYOUT.center(hash.0 as u64, self.spacing)
  }
}

impl Default for RulerEncoder32 {
  fn default() -> Self {
    Self {
      spacing: DEFAULT_TICK_SPACING,
    }
  }
}

impl SpatialEncoder for RulerEncoder32 {
  type Key = TickHash32;

  fn encode(&self, point: DVec3) -> Result<TickHash32> {
    self.create_3d(point)
  }

  fn cell_center(&self, key: TickHash32) -> DVec3 {
    self.center(key)
  }

  fn limits(&self) -> AxisRange {
    LAYOUT.limits(self.spacing)
  }
}

#[cfg(test)]
#[path = "hash32_test.rs"]
mod hash32_test;
