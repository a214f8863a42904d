//! SpatialEncoder - common surface of the octree and ruler encoders.
//!
//! Consumers that bucket payloads by cell can be written once against this
//! trait and keyed by whichever encoding fits their grid.
//!
//! ```ignore
//! use std::collections::HashMap;
//! use spatial_key::{SpatialEncoder, RulerEncoder32};
//!
//! let encoder = RulerEncoder32::new(4)?;
//! let mut buckets: HashMap<_, Vec<u32>> = HashMap::new();
//! buckets.entry(encoder.encode(position)?).or_default().push(id);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use glam::DVec3;

use crate::bounds::AxisRange;
use crate::error::Result;

/// Point <-> cell key encoding bound to fixed grid parameters.
///
/// Implementations are pure value types: `Send + Sync`, no interior state.
pub trait SpatialEncoder: Send + Sync {
  /// Fixed-width integer key naming one cell.
  type Key: Copy + Eq + Hash + Debug;

  /// Key of the cell containing `point`.
  ///
  /// Fails with `PositionOutOfRange` if any axis lies outside [`limits`].
  ///
  /// [`limits`]: SpatialEncoder::limits
  fn encode(&self, point: DVec3) -> Result<Self::Key>;

  /// Geometric center of the cell named by `key`.
  ///
  /// Parameters are validated when the encoder is built, so decoding cannot
  /// fail.
  fn cell_center(&self, key: Self::Key) -> DVec3;

  /// Valid coordinate range on every axis.
  fn limits(&self) -> AxisRange;
}
