//! 64-bit tick hash: three 21-bit two's-complement fields.
//!
//! ```text
//! bits:  63 │ 62 ........ 42 │ 41 ........ 21 │ 20 ........ 0
//!        0  │       x        │       y        │      z
//! ```

use glam::{DVec3, I64Vec3};

use super::quantize::RulerLayout;
use crate::bounds::AxisRange;
use crate::constants::{
  field_mask, DEFAULT_TICK_SPACING, RULER64_FIELD_BITS, RULER64_LIMIT_MARGIN,
  RULER64_MAX_GRID_SIZE,
};
use crate::encoder::SpatialEncoder;
use crate::error::Result;

pub(crate) const LAYOUT: RulerLayout = RulerLayout {
  field_bits: RULER64_FIELD_BITS,
  max_grid_size: RULER64_MAX_GRID_SIZE,
  margin: RULER64_LIMIT_MARGIN,
};

/// Packed 3D tick hash in 64 bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TickHash64(u64);

impl TickHash64 {
  /// Build from a raw word. Bit 63 is cleared.
  #[inline]
  pub const fn from_bits(bits: u64) -> Self {
    Self(bits & field_mask(3 * RULER64_FIELD_BITS))
  }

  /// Raw word.
  #[inline]
  pub const fn bits(self) -> u64 {
    self.0
  }

  /// Signed view of the word.
  #[inline]
  pub const fn to_i64(self) -> i64 {
    self.0 as i64
  }

  /// Tick marks of the three axes.
  #[inline]
  pub fn tick_marks(self) -> I64Vec3 {
    decode_3d(self)
  }
}

impl From<TickHash64> for u64 {
  fn from(hash: TickHash64) -> Self {
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

/// Single-axis 21-bit field for `position`.
pub fn create_tick_hash(position: f64, spacing: i32) -> Result<u64> {
  LAYOUT.encode_axis(position, spacing)
}

/// Tick mark stored in the low 21 bits of `field`.
#[inline]
pub fn decode_tick_hash(field: u64) -> i64 {
  LAYOUT.decode_field(field)
}

/// Pack `point` into `x << 42 | y << 21 | z`.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(level = "trace", skip_all, name = "ruler64::create_3d")
)]
pub fn create_3d(point: DVec3, spacing: i32) -> Result<TickHash64> {
  Ok(TickHash64(LAYOUT.encode_point(point, spacing)?))
}

/// Tick marks `(x, y, z)` of a packed hash.
#[inline]
pub fn decode_3d(hash: TickHash64) -> I64Vec3 {
  I64Vec3::from_array(LAYOUT.decode_point(hash.0))
}

/// Center of the cell named by `hash`.
pub fn center(hash: TickHash64, spacing: i32) -> Result<DVec3> {
  LAYOUT.check_spacing(spacing)?;
  Ok(LAYOUT.center(hash.0, spacing))
}

/// 64-bit ruler encoder bound to a tick spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulerEncoder64 {
  spacing: i32,
}

impl RulerEncoder64 {
  /// Validate and bind `spacing`.
  pub fn new(spacing: i32) -> Result<Self> {
    LAYOUT.check_spacing(spacing)?;
    Ok(Self { spacing })
  }

  /// Tick spacing.
  pub fn spacing(&self) -> i32 {
    self.spacing
  }

  pub fn create_3d(&self, point: DVec3) -> Result<TickHash64> {
    create_3d(point, self.spacing)
  }

  pub fn create_tick_hash(&self, position: f64) -> Result<u64> {
    create_tick_hash(position, self.spacing)
  }

  pub fn center(&self, hash: TickHash64) -> DVec3 {
    LAYOUT.center(hash.0, self.spacing)
  }
}

impl Default for RulerEncoder64 {
  fn default() -> Self {
    Self {
      spacing: DEFAULT_TICK_SPACING,
    }
  }
}

impl SpatialEncoder for RulerEncoder64 {
  type Key = TickHash64;

  fn encode(&self, point: DVec3) -> Result<TickHash64> {
    self.create_3d(point)
  }

  fn cell_center(&self, key: TickHash64) -> DVec3 {
    self.center(key)
  }

  fn limits(&self) -> AxisRange {
    LAYOUT.limits(self.spacing)
  }
}

#[cfg(test)]
#[path = "hash64_test.rs"]
mod hash64_test;
