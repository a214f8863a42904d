//! Octree path encoder (BSP spatial index).
//!
//! Repeatedly bisects a cube centered on the origin along all three axes and
//! records each octant choice as a 3-bit group of a 30-bit path.
//!
//! # Module Structure
//!
//! - [`index`]: `BspIndex` - the packed path value type
//! - [`path`]: `map` / `octant_at` / `center` and the bound `BspEncoder`

pub mod index;
pub mod path;

// Re-exports
pub use index::BspIndex;
pub use path::{
  cell_apothem, center, limits, lower_limit, map, octant_at, upper_limit, BspEncoder, MIN_SCALE,
};
