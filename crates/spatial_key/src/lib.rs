//! spatial_key - reversible point <-> integer cell keys for O(1) spatial bucketing
//!
//! This crate maps a 3D coordinate onto a single fixed-width integer so that
//! every point inside the same grid cell produces the same key. Keys decode back
//! to the cell's geometric center and to its hierarchical or per-axis
//! coordinates, and can be used directly as `HashMap` keys.
//!
//! # Encoders
//!
//! - **Octree path** ([`bsp`]): bisects a cube of half-width `512 * scale`
//!   ten times and packs the octant choices into a 30-bit path. Shallower
//!   depths are prefixes of deeper ones.
//! - **32-bit ruler** ([`ruler::hash32`]): three 10-bit two's-complement tick
//!   fields.
//! - **64-bit ruler** ([`ruler::hash64`]): three 21-bit two's-complement tick
//!   fields.
//!
//! All operations are pure functions over value types: no allocation, no
//! shared state, safe to call from any thread.
//!
//! # Example
//!
//! ```ignore
//! use glam::DVec3;
//! use spatial_key::{bsp, ruler::hash32, SpatialKeyConfig, SpatialEncoder};
//!
//! let point = DVec3::new(12.3, -4.5, 100.0);
//!
//! // Octree key at full depth, then the cell center it names.
//! let index = bsp::map(point, 1.0, 10)?;
//! let center = bsp::center(index, 1.0, 10)?;
//!
//! // Ruler key with 1-unit ticks.
//! let hash = hash32::create_3d(point, 1)?;
//! let ticks = hash32::decode_3d(hash); // IVec3(13, -5, 101)
//!
//! // Or go through the common trait.
//! let encoder = SpatialKeyConfig::default().ruler64_encoder()?;
//! let key = encoder.encode(point)?;
//! ```

pub mod bounds;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod octant;

// Re-export commonly used items
pub use bounds::AxisRange;
pub use config::SpatialKeyConfig;
pub use encoder::SpatialEncoder;
pub use error::{Result, SpatialKeyError};
pub use octant::Octant;

// Octree path encoder
pub mod bsp;
pub use bsp::{BspEncoder, BspIndex};

// Ruler tick-mark encoders
pub mod ruler;
pub use ruler::{RulerEncoder32, RulerEncoder64, TickHash32, TickHash64};
