//! Quantization rule shared by the 32-bit and 64-bit tick hashes.
//!
//! # Tick numbering
//!
//! ```text
//!  position:   -3s   -2s   -s    0     s    2s    3s
//!                │     │     │    │     │     │     │
//!  raw tick:   ..  -3 ┆ -2  ┆ -1 ┆  0  ┆  1  ┆  2  ┆ ..
//!  tick mark:  ..  -3 ┆ -2  ┆ -1 ┆  1  ┆  2  ┆  3  ┆ ..
//! ```
//!
//! Raw ticks are zero-based and stored in the hash. Tick marks are what
//! callers see: 1-indexed on the positive side, never zero.
//!
//! Positive cells are `[k*s, (k+1)*s)`. Negative cells mirror them:
//! raw tick `-k` covers `(-k*s, -(k-1)*s]`. Zero is on the positive side.

use glam::DVec3;

use crate::bounds::AxisRange;
use crate::constants::field_mask;
use crate::error::{scale_error, Result};

/// Zero-based signed tick index of `position` for `spacing`.
///
/// Fails with `ScaleOutOfRange` when `spacing <= 0`. Positions past the `i64`
/// range saturate to the outermost tick.
pub fn raw_tick(position: f64, spacing: i32) -> Result<i64> {
  if spacing <= 0 {
    return Err(scale_error("tick_spacing", spacing as f64));
  }
  Ok(raw_tick_unchecked(position, spacing))
}

/// [`raw_tick`] for a spacing already known to be positive.
#[inline]
pub(crate) fn raw_tick_unchecked(position: f64, spacing: i32) -> i64 {
  debug_assert!(spacing > 0, "tick spacing must be positive");
  let spacing = spacing as i64;
  if position >= 0.0 {
    position.floor() as i64 / spacing
  } else {
    (position.ceil() as i64).saturating_sub(spacing) / spacing
  }
}

/// Convert a raw tick to the caller-facing tick mark (non-negative +1).
#[inline]
pub fn raw_to_tick_mark(raw: i64) -> i64 {
  if raw >= 0 {
    raw + 1
  } else {
    raw
  }
}

/// Center of the ruler division labelled `tick`.
///
/// Tick `1` maps to `0.5 * spacing`, tick `-1` to `-0.5 * spacing`.
#[inline]
pub fn tick_mark_center(tick: i64, spacing: i32) -> f64 {
  let spacing = spacing as f64;
  if tick >= 0 {
    spacing * (tick as f64 - 0.5)
  } else {
    spacing * (tick as f64 + 0.5)
  }
}

/// Sign-extend the low `bits` bits of `field` (1..=63).
#[inline]
pub(crate) fn sign_extend(field: u64, bits: u32) -> i64 {
  debug_assert!((1..64).contains(&bits), "field width must be 1..=63");
  let shift = 64 - bits;
  ((field << shift) as i64) >> shift
}

/// Per-axis field width and coordinate limits of one hash variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RulerLayout {
  /// Bits per axis.
  pub field_bits: u32,
  /// Raw ticks per half-axis (`2^(field_bits - 1)`).
  pub max_grid_size: i64,
  /// Slack past the last whole tick absorbed into the limits.
  pub margin: f64,
}

impl RulerLayout {
  #[inline]
  pub fn upper_limit(&self, spacing: i32) -> f64 {
    (self.max_grid_size * spacing as i64 - 1) as f64 + self.margin
  }

  #[inline]
  pub fn lower_limit(&self, spacing: i32) -> f64 {
    -self.upper_limit(spacing)
  }

  #[inline]
  pub fn limits(&self, spacing: i32) -> AxisRange {
    AxisRange::new(self.lower_limit(spacing), self.upper_limit(spacing))
  }

  /// Spacing must be positive and its limits must quantize inside the field.
  ///
  /// For very large spacings the margin is lost to rounding and the limits
  /// land on the next tick, which would wrap the field.
  pub fn check_spacing(&self, spacing: i32) -> Result<()> {
    if spacing > 0 {
      let limits = self.limits(spacing);
      let top = raw_tick_unchecked(limits.upper, spacing);
      let bottom = raw_tick_unchecked(limits.lower, spacing);
      if top < self.max_grid_size && bottom >= -self.max_grid_size {
        return Ok(());
      }
    }
    Err(scale_error("tick_spacing", spacing as f64))
  }

  /// Raw tick truncated to the field width.
  #[inline]
  pub fn field(&self, position: f64, spacing: i32) -> u64 {
    raw_tick_unchecked(position, spacing) as u64 & field_mask(self.field_bits)
  }

  /// Tick mark stored in a single field.
  #[inline]
  pub fn decode_field(&self, field: u64) -> i64 {
    raw_to_tick_mark(sign_extend(
      field & field_mask(self.field_bits),
      self.field_bits,
    ))
  }

  /// Validated single-axis field.
  pub fn encode_axis(&self, position: f64, spacing: i32) -> Result<u64> {
    self.check_spacing(spacing)?;
    self.limits(spacing).check("position", position)?;
    Ok(self.field(position, spacing))
  }

  /// Validated `x << 2N | y << N | z`.
  pub fn encode_point(&self, point: DVec3, spacing: i32) -> Result<u64> {
    self.check_spacing(spacing)?;
    self.limits(spacing).check_point(point)?;
    Ok(self.pack(point, spacing))
  }

  #[inline]
  fn pack(&self, point: DVec3, spacing: i32) -> u64 {
    let n = self.field_bits;
    self.field(point.x, spacing) << (2 * n)
      | self.field(point.y, spacing) << n
      | self.field(point.z, spacing)
  }

  /// Tick marks `[x, y, z]` of a packed word.
  #[inline]
  pub fn decode_point(&self, word: u64) -> [i64; 3] {
    let n = self.field_bits;
    [
      self.decode_field(word >> (2 * n)),
      self.decode_field(word >> n),
      self.decode_field(word),
    ]
  }

  /// Cell center of a packed word. Spacing must already be validated.
  #[inline]
  pub fn center(&self, word: u64, spacing: i32) -> DVec3 {
    let [x, y, z] = self.decode_point(word);
    DVec3::new(
      tick_mark_center(x, spacing),
      tick_mark_center(y, spacing),
      tick_mark_center(z, spacing),
    )
  }
}

#[cfg(test)]
#[path = "quantize_test.rs"]
mod quantize_test;
