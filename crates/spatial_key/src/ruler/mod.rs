//! Ruler tick-mark encoders.
//!
//! Each axis is quantized independently into a signed tick index, stored as a
//! fixed-width two's-complement field, and the three fields are concatenated
//! with x most significant. The two variants differ only in field width.
//!
//! | Variant | Bits/axis | Raw ticks per axis | Word |
//! |---|---|---|---|
//! | [`hash32`] | 10 | -512..=511 | `u32` |
//! | [`hash64`] | 21 | -1048576..=1048575 | `u64` |
//!
//! # Module Structure
//!
//! - [`quantize`]: raw tick / tick mark rule shared by both widths
//! - [`hash32`]: `TickHash32` and `RulerEncoder32`
//! - [`hash64`]: `TickHash64` and `RulerEncoder64`

pub mod hash32;
pub mod hash64;
pub mod quantize;

// Re-exports
pub use hash32::{RulerEncoder32, TickHash32};
pub use hash64::{RulerEncoder64, TickHash64};
pub use quantize::{raw_tick, raw_to_tick_mark, tick_mark_center};
