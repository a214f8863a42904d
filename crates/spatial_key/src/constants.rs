//! Bit layout constants for the octree path and ruler tick-mark keys.
//!
//! # Octree Path (BSP Index)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         32-BIT OCTREE PATH                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  bit:  31 30 │ 29 28 27 │ 26 25 24 │  ...  │  5  4  3 │  2  1  0        │
//! │        0  0  │ level 1  │ level 2  │       │ level 9  │ level 10        │
//! │              │  x y z   │  x y z   │       │  x y z   │  x y z          │
//! │                                                                         │
//! │  Each group is an octant sign-bit-field: a set bit means the point is   │
//! │  below the parent cell's center on that axis.                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A path encoded to depth `L < 10` keeps levels `1..=L` at the same absolute
//! positions and leaves the lower `3 * (10 - L)` bits zero.
//!
//! # Ruler Tick Hash
//!
//! ```text
//! 32-bit:  [31:30] unused │ [29:20] x │ [19:10] y │ [9:0]   z   (10 bits/axis)
//! 64-bit:  [63]    unused │ [62:42] x │ [41:21] y │ [20:0]  z   (21 bits/axis)
//! ```
//!
//! Every field is two's-complement, so an axis spans raw ticks
//! `-MAX_GRID_SIZE..MAX_GRID_SIZE`.

/// Deepest octree level (number of 3-bit groups in a path).
pub const MAX_LEVEL: u32 = 10;

/// Bits consumed by one octree level.
pub const BITS_PER_LEVEL: u32 = 3;

/// Total meaningful bits in a path (10 * 3 = 30).
pub const PATH_BITS: u32 = MAX_LEVEL * BITS_PER_LEVEL;

/// Mask selecting the 30 path bits.
pub const PATH_MASK: u32 = (1 << PATH_BITS) - 1;

/// Mask for a single octant group.
pub const OCTANT_MASK: u32 = 0b111;

/// Half-width of the root cube in standard space.
///
/// Standard space spans `[-ROOT_APOTHEM, ROOT_APOTHEM]` on each axis; world
/// coordinates are divided by the grid scale to land there.
pub const ROOT_APOTHEM: f64 = 512.0;

/// Bits per axis in the 32-bit tick hash.
pub const RULER32_FIELD_BITS: u32 = 10;

/// Bits per axis in the 64-bit tick hash.
pub const RULER64_FIELD_BITS: u32 = 21;

/// Ticks per half-axis in the 32-bit hash (2^9 = 512).
pub const RULER32_MAX_GRID_SIZE: i64 = 1 << (RULER32_FIELD_BITS - 1);

/// Ticks per half-axis in the 64-bit hash (2^20 = 1,048,576).
pub const RULER64_MAX_GRID_SIZE: i64 = 1 << (RULER64_FIELD_BITS - 1);

/// Margin added past the last whole tick so the boundary tick stays reachable
/// under floating-point rounding.
pub const RULER32_LIMIT_MARGIN: f64 = 0.9999;

/// See [`RULER32_LIMIT_MARGIN`].
pub const RULER64_LIMIT_MARGIN: f64 = 0.9;

/// Default octree grid scale.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default octree depth.
pub const DEFAULT_MAX_LEVEL: u32 = MAX_LEVEL;

/// Default ruler tick spacing.
pub const DEFAULT_TICK_SPACING: i32 = 1;

/// Mask keeping the low `bits` bits of a word.
#[inline(always)]
pub const fn field_mask(bits: u32) -> u64 {
  (1u64 << bits) - 1
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
