use super::*;

#[test]
fn test_path_fits_below_top_two_bits() {
  assert_eq!(PATH_BITS, 30);
  assert_eq!(PATH_MASK, 0x3FFF_FFFF);
  assert_eq!(PATH_MASK >> 30, 0, "Bits 31-30 must stay clear");
}

#[test]
fn test_ruler_grid_sizes() {
  assert_eq!(RULER32_MAX_GRID_SIZE, 512);
  assert_eq!(RULER64_MAX_GRID_SIZE, 1_048_576);
}

/// Three fields must fit inside the word with the top bit(s) unused.
#[test]
fn test_ruler_fields_fit_word() {
  assert!(3 * RULER32_FIELD_BITS < 32);
  assert!(3 * RULER64_FIELD_BITS < 64);
}

#[test]
fn test_field_mask() {
  assert_eq!(field_mask(3), 0b111);
  assert_eq!(field_mask(RULER32_FIELD_BITS), 0x3FF);
  assert_eq!(field_mask(RULER64_FIELD_BITS), 0x1F_FFFF);
}
