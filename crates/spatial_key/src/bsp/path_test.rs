use super::*;
use crate::error::SpatialKeyError;

// =========================================================================
// Limits
// =========================================================================

#[test]
fn test_limits_scale_with_grid_scale() {
  assert_eq!(lower_limit(1.0), -512.0);
  assert_eq!(upper_limit(1.0), 512.0);
  assert_eq!(lower_limit(0.25), -128.0);
  assert_eq!(upper_limit(4.0), 2048.0);
  assert_eq!(limits(2.0), AxisRange::new(-1024.0, 1024.0));
}

#[test]
fn test_cell_apothem_halves_per_level() {
  assert_eq!(cell_apothem(1.0, 0), 512.0);
  assert_eq!(cell_apothem(1.0, 1), 256.0);
  assert_eq!(cell_apothem(1.0, 10), 0.5);
  assert_eq!(cell_apothem(3.0, 10), 1.5);
}

// =========================================================================
// map
// =========================================================================

/// Depth 0 encodes nothing.
#[test]
fn test_map_level_zero_is_root() {
  let index = map(DVec3::new(123.0, -45.0, 6.0), 1.0, 0).unwrap();
  assert_eq!(index, BspIndex::ROOT);
  assert_eq!(center(index, 1.0, 0).unwrap(), DVec3::ZERO);
}

/// Level 1 group lands in bits 29-27, level 2 in bits 26-24.
#[test]
fn test_map_first_two_levels() {
  let point = DVec3::new(100.0, -100.0, 0.5);

  // Level 1 vs (0,0,0): only y is below -> 0b010
  let level_1 = map(point, 1.0, 1).unwrap();
  assert_eq!(level_1.bits(), 0b010 << 27);

  // Level 2 vs (256,-256,256): x and z below -> 0b101
  let level_2 = map(point, 1.0, 2).unwrap();
  assert_eq!(level_2.bits(), (0b010 << 27) | (0b101 << 24));

  assert_eq!(octant_at(level_2, 1).unwrap().bits(), 0b010);
  assert_eq!(octant_at(level_2, 2).unwrap().bits(), 0b101);
}

/// The most negative corner is below every center on every axis.
#[test]
fn test_map_negative_corner_is_all_ones() {
  let index = map(DVec3::splat(-512.0), 1.0, 10).unwrap();
  assert_eq!(index.bits(), 0x3FFF_FFFF);
  assert_eq!(center(index, 1.0, 10).unwrap(), DVec3::splat(-511.5));
}

/// The most positive corner is never below a center.
#[test]
fn test_map_positive_corner_is_all_zeros() {
  let index = map(DVec3::splat(512.0), 1.0, 10).unwrap();
  assert_eq!(index.bits(), 0);
  assert_eq!(center(index, 1.0, 10).unwrap(), DVec3::splat(511.5));
}

/// The origin sits on every level-1 plane: non-negative first, then below.
#[test]
fn test_map_origin_cell() {
  let index = map(DVec3::ZERO, 1.0, 10).unwrap();
  assert_eq!(index.bits(), 0x07FF_FFFF);
  assert_eq!(center(index, 1.0, 10).unwrap(), DVec3::splat(0.5));
}

#[test]
fn test_map_respects_scale() {
  let scaled = map(DVec3::new(50.0, -50.0, 25.0), 0.5, 10).unwrap();
  let unit = map(DVec3::new(100.0, -100.0, 50.0), 1.0, 10).unwrap();
  assert_eq!(scaled, unit);

  let cell_center = center(scaled, 0.5, 10).unwrap();
  let offset = (cell_center - DVec3::new(50.0, -50.0, 25.0)).abs();
  assert!(offset.max_element() <= cell_apothem(0.5, 10));
}

#[test]
fn test_map_same_cell_same_key() {
  let a = map(DVec3::new(10.1, 20.2, -30.3), 1.0, 10).unwrap();
  let b = map(DVec3::new(10.9, 20.7, -30.01), 1.0, 10).unwrap();
  assert_eq!(a, b);

  let c = map(DVec3::new(11.0, 20.7, -30.01), 1.0, 10).unwrap();
  assert_ne!(a, c);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn test_map_rejects_position_out_of_range() {
  let err = map(DVec3::new(0.0, 0.0, 600.0), 1.0, 10).unwrap_err();
  assert_eq!(
    err,
    SpatialKeyError::PositionOutOfRange {
      name: "z",
      value: 600.0,
      lower: -512.0,
      upper: 512.0,
    }
  );

  assert!(map(DVec3::new(-512.5, 0.0, 0.0), 1.0, 10).is_err());
  assert!(map(DVec3::new(0.0, f64::NAN, 0.0), 1.0, 10).is_err());

  // In range once the scale grows.
  assert!(map(DVec3::new(0.0, 0.0, 600.0), 2.0, 10).is_ok());
}

#[test]
fn test_map_rejects_level_out_of_range() {
  let err = map(DVec3::ZERO, 1.0, 11).unwrap_err();
  assert_eq!(
    err,
    SpatialKeyError::LevelOutOfRange {
      name: "max_level",
      value: 11,
      min: 0,
      max: 10,
    }
  );
}

#[test]
fn test_map_rejects_bad_scale() {
  for scale in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::MAX, 1e-310] {
    let err = map(DVec3::ZERO, scale, 10).unwrap_err();
    assert!(
      matches!(err, SpatialKeyError::ScaleOutOfRange { name: "scale", .. }),
      "scale {} should be rejected, got {:?}",
      scale,
      err
    );
  }
}

/// The deepest half-cell must stay a normal float.
#[test]
fn test_map_scale_lower_boundary() {
  assert_eq!(MIN_SCALE / 2.0, f64::MIN_POSITIVE);
  assert!(map(DVec3::ZERO, MIN_SCALE, 10).is_ok());
  assert!(BspEncoder::new(MIN_SCALE, 10).is_ok());

  for scale in [f64::MIN_POSITIVE, MIN_SCALE * 0.75] {
    assert_eq!(
      map(DVec3::ZERO, scale, 10),
      Err(SpatialKeyError::ScaleOutOfRange {
        name: "scale",
        value: scale,
      })
    );
  }
}

/// Level is checked before scale, scale before position.
#[test]
fn test_validation_order() {
  let err = map(DVec3::splat(1e9), -1.0, 11).unwrap_err();
  assert!(matches!(err, SpatialKeyError::LevelOutOfRange { .. }));

  let err = map(DVec3::splat(1e9), -1.0, 10).unwrap_err();
  assert!(matches!(err, SpatialKeyError::ScaleOutOfRange { .. }));
}

#[test]
fn test_octant_at_rejects_level_zero_and_eleven() {
  let index = BspIndex::from_bits(0x3FFF_FFFF);
  for level in [0, 11] {
    assert_eq!(
      octant_at(index, level),
      Err(SpatialKeyError::LevelOutOfRange {
        name: "level",
        value: level,
        min: 1,
        max: 10,
      })
    );
  }
}

#[test]
fn test_center_rejects_bad_inputs() {
  assert!(center(BspIndex::ROOT, 1.0, 11).is_err());
  assert!(center(BspIndex::ROOT, 0.0, 10).is_err());
}

// =========================================================================
// BspEncoder
// =========================================================================

#[test]
fn test_encoder_defaults() {
  let encoder = BspEncoder::default();
  assert_eq!(encoder.scale(), 1.0);
  assert_eq!(encoder.max_level(), 10);
  assert_eq!(encoder.cell_apothem(), 0.5);
  assert_eq!(encoder.limits(), AxisRange::symmetric(512.0));
}

#[test]
fn test_encoder_new_validates() {
  assert!(BspEncoder::new(1.0, 11).is_err());
  assert!(BspEncoder::new(-2.0, 5).is_err());
  assert!(BspEncoder::new(2.0, 5).is_ok());
}

#[test]
fn test_encoder_matches_free_functions() {
  let encoder = BspEncoder::new(2.0, 6).unwrap();
  let point = DVec3::new(-300.0, 700.0, 12.5);

  let index = encoder.map(point).unwrap();
  assert_eq!(index, map(point, 2.0, 6).unwrap());
  assert_eq!(encoder.center(index), center(index, 2.0, 6).unwrap());
  assert_eq!(encoder.encode(point).unwrap(), index);
  assert_eq!(encoder.cell_center(index), encoder.center(index));
}
