//! SpatialKeyConfig - grid parameters shared by the three encoders.

use crate::bsp::path::check_scale;
use crate::bsp::BspEncoder;
use crate::constants::{DEFAULT_MAX_LEVEL, DEFAULT_SCALE, DEFAULT_TICK_SPACING, MAX_LEVEL};
use crate::error::{check_level, Result};
use crate::ruler::{hash32, hash64, RulerEncoder32, RulerEncoder64};

/// Grid parameters for key encoding.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpatialKeyConfig {
  /// Octree grid scale: the root cube spans `[-512 * scale, 512 * scale]`.
  pub scale: f64,

  /// Octree depth (0..=10). Level 10 cells are `scale` wide.
  pub max_level: u32,

  /// Ruler tick spacing in world units.
  pub tick_spacing: i32,
}

impl SpatialKeyConfig {
  pub fn with_scale(mut self, scale: f64) -> Self {
    self.scale = scale;
    self
  }

  pub fn with_max_level(mut self, max_level: u32) -> Self {
    self.max_level = max_level;
    self
  }

  pub fn with_tick_spacing(mut self, tick_spacing: i32) -> Self {
    self.tick_spacing = tick_spacing;
    self
  }

  /// Check every parameter for every encoder.
  ///
  /// The tick spacing must suit both ruler widths, so the 64-bit bound wins:
  /// `tick_spacing = i32::MAX` fails here even though the 32-bit encoder
  /// accepts it. Consumers of a single encoder should call its own check
  /// ([`validate_bsp`], [`validate_ruler32`], [`validate_ruler64`]).
  ///
  /// [`validate_bsp`]: Self::validate_bsp
  /// [`validate_ruler32`]: Self::validate_ruler32
  /// [`validate_ruler64`]: Self::validate_ruler64
  pub fn validate(&self) -> Result<()> {
    self.validate_bsp()?;
    self.validate_ruler32()?;
    self.validate_ruler64()
  }

  /// Check `max_level` and `scale`.
  pub fn validate_bsp(&self) -> Result<()> {
    check_level("max_level", self.max_level, 0, MAX_LEVEL)?;
    check_scale(self.scale)
  }

  /// Check `tick_spacing` against the 32-bit field.
  pub fn validate_ruler32(&self) -> Result<()> {
    hash32::LAYOUT.check_spacing(self.tick_spacing)
  }

  /// Check `tick_spacing` against the 64-bit field.
  pub fn validate_ruler64(&self) -> Result<()> {
    hash64::LAYOUT.check_spacing(self.tick_spacing)
  }

  /// Octree encoder for `scale` and `max_level`.
  pub fn bsp_encoder(&self) -> Result<BspEncoder> {
    BspEncoder::new(self.scale, self.max_level)
  }

  /// 32-bit ruler encoder for `tick_spacing`.
  pub fn ruler32_encoder(&self) -> Result<RulerEncoder32> {
    RulerEncoder32::new(self.tick_spacing)
  }

  /// 64-bit ruler encoder for `tick_spacing`.
  pub fn ruler64_encoder(&self) -> Result<RulerEncoder64> {
    RulerEncoder64::new(self.tick_spacing)
  }
}

impl Default for SpatialKeyConfig {
  fn default() -> Self {
    Self {
      scale: DEFAULT_SCALE,
      max_level: DEFAULT_MAX_LEVEL,
      tick_spacing: DEFAULT_TICK_SPACING,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
