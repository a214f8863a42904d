//! BspIndex - 30-bit octree path packed into a 32-bit word.

use std::fmt;

use super::path::{check_path_level, octant_at_unchecked};
use crate::constants::{BITS_PER_LEVEL, MAX_LEVEL, PATH_MASK};
use crate::error::Result;
use crate::octant::Octant;

/// Hierarchical octree key.
///
/// Ten 3-bit octant groups, level 1 in bits 29-27 down to level 10 in bits
/// 2-0. Bits 31-30 are always zero. Groups past the encoded depth are zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BspIndex(u32);

impl BspIndex {
  /// Root cell (depth 0).
  pub const ROOT: BspIndex = BspIndex(0);

  /// Build from a raw word. Bits 31-30 are cleared.
  #[inline]
  pub const fn from_bits(bits: u32) -> Self {
    Self(bits & PATH_MASK)
  }

  /// Raw word.
  #[inline]
  pub const fn bits(self) -> u32 {
    self.0
  }

  /// Signed view of the word, as stored by consumers that key on `i32`.
  #[inline]
  pub const fn to_i32(self) -> i32 {
    self.0 as i32
  }

  /// Inverse of [`BspIndex::to_i32`]. Bits 31-30 are cleared.
  #[inline]
  pub const fn from_i32(value: i32) -> Self {
    Self::from_bits(value as u32)
  }

  /// Octant chosen at `level` (1..=10).
  pub fn octant(self, level: u32) -> Result<Octant> {
    check_path_level("level", level)?;
    Ok(octant_at_unchecked(self, level))
  }

  /// Path cut down to its first `level` groups (0..=10).
  ///
  /// This is the key the same point would produce if encoded at that depth.
  pub fn truncate(self, level: u32) -> Result<Self> {
    check_path_level_or_root(level)?;
    Ok(self.truncate_unchecked(level))
  }

  /// True when both paths agree on their first `level` groups, i.e. they lie
  /// in the same cell at that depth.
  pub fn shares_cell(self, other: BspIndex, level: u32) -> Result<bool> {
    check_path_level_or_root(level)?;
    Ok(self.truncate_unchecked(level) == other.truncate_unchecked(level))
  }

  /// Iterate the octants of levels `1..=level`, shallowest first.
  pub fn octants(self, level: u32) -> Result<impl Iterator<Item = Octant>> {
    check_path_level_or_root(level)?;
    Ok((1..=level).map(move |step| octant_at_unchecked(self, step)))
  }

  #[inline]
  fn truncate_unchecked(self, level: u32) -> Self {
    let dropped = BITS_PER_LEVEL * (MAX_LEVEL - level);
    // dropped <= 30, so neither shift overflows.
    Self((self.0 >> dropped) << dropped)
  }
}

fn check_path_level_or_root(level: u32) -> Result<()> {
  crate::error::check_level("level", level, 0, MAX_LEVEL)
}

impl From<BspIndex> for u32 {
  fn from(index: BspIndex) -> Self {
    index.bits()
  }
}

/// One octal digit per level, level 1 first.
impl fmt::Display for BspIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:010o}", self.0)
  }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
