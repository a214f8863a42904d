//! Octant - the 3-bit sign-bit-field of a point relative to a cell center.
//!
//! Bit layout (binary: XYZ):
//! - bit 2: x below center
//! - bit 1: y below center
//! - bit 0: z below center
//!
//! A clear bit means "at or above" the center, so a point lying exactly on a
//! splitting plane falls into the non-negative half.

use glam::DVec3;

/// Octant sign-bit-field, always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Octant(u8);

impl Octant {
  /// Bit marking x below center.
  pub const X_NEGATIVE: u8 = 0b100;
  /// Bit marking y below center.
  pub const Y_NEGATIVE: u8 = 0b010;
  /// Bit marking z below center.
  pub const Z_NEGATIVE: u8 = 0b001;

  /// All 8 octants in code order.
  pub const ALL: [Octant; 8] = [
    Octant(0),
    Octant(1),
    Octant(2),
    Octant(3),
    Octant(4),
    Octant(5),
    Octant(6),
    Octant(7),
  ];

  /// Build from a raw code. Only the low 3 bits are kept.
  #[inline]
  pub const fn from_bits(bits: u8) -> Self {
    Self(bits & 0b111)
  }

  /// Raw 3-bit code.
  #[inline]
  pub const fn bits(self) -> u8 {
    self.0
  }

  /// Classify `point` against `center`; a bit is set only on strict `<`.
  #[inline]
  pub fn classify(point: DVec3, center: DVec3) -> Self {
    let mut bits = 0;
    if point.x < center.x {
      bits |= Self::X_NEGATIVE;
    }
    if point.y < center.y {
      bits |= Self::Y_NEGATIVE;
    }
    if point.z < center.z {
      bits |= Self::Z_NEGATIVE;
    }
    Self(bits)
  }

  /// Per-axis step sign toward this octant: -1 where the bit is set, +1
  /// otherwise.
  #[inline]
  pub fn direction(self) -> DVec3 {
    let sign = |mask: u8| if self.0 & mask != 0 { -1.0 } else { 1.0 };
    DVec3::new(
      sign(Self::X_NEGATIVE),
      sign(Self::Y_NEGATIVE),
      sign(Self::Z_NEGATIVE),
    )
  }
}

impl From<Octant> for u8 {
  fn from(octant: Octant) -> Self {
    octant.bits()
  }
}

#[cfg(test)]
#[path = "octant_test.rs"]
mod octant_test;
