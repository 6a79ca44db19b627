#![allow(clippy::cast_possible_truncation)] // For H3_GET_INDEX_DIGIT style operations

pub mod inspection;

use crate::base_cells::{_base_cell_to_face_ijk, _is_base_cell_pentagon};
use crate::constants::*;
use crate::coords::face_ijk::{_adjust_overage_class_ii, Overage};
use crate::coords::ijk::{_down_ap7, _down_ap7r, _neighbor, _rotate60_ccw, _rotate60_cw, _up_ap7r};
use crate::types::{Direction, FaceIJK, H3Error, H3Index};

pub use inspection::{get_base_cell_number, is_pentagon};

// H3Index bit layout accessors/mutators

/// Gets the mode of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_mode(h: H3Index) -> u8 {
  ((h.0 & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
}

/// Sets the mode of the H3 index.
#[inline(always)]
pub fn set_mode(h: &mut H3Index, mode: u8) {
  h.0 = (h.0 & !H3_MODE_MASK) | (u64::from(mode) << H3_MODE_OFFSET);
}

/// Gets the resolution of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_resolution(h: H3Index) -> i32 {
  ((h.0 & H3_RES_MASK) >> H3_RES_OFFSET) as i32
}

/// Sets the resolution of the H3 index.
#[inline(always)]
pub fn set_resolution(h: &mut H3Index, res: i32) {
  h.0 = (h.0 & !H3_RES_MASK) | (((res as u64) << H3_RES_OFFSET) & H3_RES_MASK);
}

/// Gets the base cell of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_base_cell(h: H3Index) -> i32 {
  ((h.0 & H3_BC_MASK) >> H3_BC_OFFSET) as i32
}

/// Sets the base cell of the H3 index.
#[inline(always)]
pub fn set_base_cell(h: &mut H3Index, bc: i32) {
  h.0 = (h.0 & !H3_BC_MASK) | (((bc as u64) << H3_BC_OFFSET) & H3_BC_MASK);
}

#[inline(always)]
const fn digit_offset(res: i32) -> i32 {
  (MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET as i32
}

/// Gets the H3 digit at the given resolution `res` from the H3 index.
/// `res` must be between 1 and `MAX_H3_RES`.
#[inline(always)]
#[must_use]
pub fn get_index_digit(h: H3Index, res: i32) -> Direction {
  let val = ((h.0 >> digit_offset(res)) & H3_DIGIT_MASK) as u8;
  // The mask keeps val in 0-7, which always converts.
  Direction::try_from(val).unwrap_or(Direction::InvalidDigit)
}

/// Sets the H3 digit at the given resolution `res` in the H3 index.
/// `res` must be between 1 and `MAX_H3_RES`.
#[inline(always)]
pub fn set_index_digit(h: &mut H3Index, res: i32, digit: Direction) {
  let offset = digit_offset(res);
  h.0 = (h.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset);
}

/// Initializes an H3 index in cell mode with the given resolution and base
/// cell, setting every digit from 1 through `res` to `init_digit`.
pub(crate) fn _set_h3_index(h: &mut H3Index, res: i32, base_cell: i32, init_digit: Direction) {
  h.0 = H3_INIT;
  set_mode(h, H3_CELL_MODE);
  set_resolution(h, res);
  set_base_cell(h, base_cell);
  for r in 1..=res {
    set_index_digit(h, r, init_digit);
  }
}

/// Builds a cell index from a base cell and its digit path, coarsest digit first.
///
/// The resolution of the result is `digits.len()`. No pentagon-specific
/// checks are made: a pentagon path through the deleted K axis is accepted.
pub fn cell_from_digits(base_cell: i32, digits: &[Direction]) -> Result<H3Index, H3Error> {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return Err(H3Error::CellInvalid);
  }
  let res = i32::try_from(digits.len()).map_err(|_| H3Error::ResDomain)?;
  if res > MAX_H3_RES {
    return Err(H3Error::ResDomain);
  }
  if digits.contains(&Direction::InvalidDigit) {
    return Err(H3Error::Domain);
  }

  let mut h = H3Index::default();
  _set_h3_index(&mut h, res, base_cell, Direction::Center);
  for (r, digit) in (1..).zip(digits) {
    set_index_digit(&mut h, r, *digit);
  }
  Ok(h)
}

/// Returns whether or not a resolution is a Class III grid.
/// Odd resolutions are Class III, even are Class II.
#[inline]
#[must_use]
pub(crate) const fn is_resolution_class_iii(r: i32) -> bool {
  r % 2 == 1
}

/// Returns the coarsest non-zero digit in an H3Index, or
/// `Direction::Center` if every digit is zero.
#[inline]
#[must_use]
pub(crate) fn _h3_leading_non_zero_digit(h: H3Index) -> Direction {
  (1..=get_resolution(h))
    .map(|r| get_index_digit(h, r))
    .find(|digit| *digit != Direction::Center)
    .unwrap_or(Direction::Center)
}

/// Rotate an H3Index 60 degrees counter-clockwise.
#[must_use]
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) fn _h3_rotate60_ccw(mut h: H3Index) -> H3Index {
  for r in 1..=get_resolution(h) {
    let digit = _rotate60_ccw(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// Rotate an H3Index 60 degrees clockwise.
#[must_use]
pub(crate) fn _h3_rotate60_cw(mut h: H3Index) -> H3Index {
  for r in 1..=get_resolution(h) {
    let digit = _rotate60_cw(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// Convert an `H3Index` to the `FaceIJK` address of the face its center
/// lies on.
///
/// Starts from the base cell's home face, walks the digits down to the cell's
/// resolution, and moves onto an adjacent face when the result overflows the
/// home face.
///
/// # Errors
/// `H3Error::CellInvalid` if the base cell bits are out of range.
pub(crate) fn _h3_to_face_ijk(h: H3Index, fijk: &mut FaceIJK) -> Result<(), H3Error> {
  let base_cell = get_base_cell(h);
  _base_cell_to_face_ijk(base_cell, fijk)?;
  let is_pent = _is_base_cell_pentagon(base_cell);

  // The IK subsequence of a pentagon is stored rotated around the deleted
  // K axis; undo that before walking the digits.
  let h = if is_pent && _h3_leading_non_zero_digit(h) == Direction::IkAxes {
    _h3_rotate60_cw(h)
  } else {
    h
  };

  if !_h3_to_face_ijk_with_initialized_fijk(h, fijk) {
    return Ok(());
  }

  let orig_ijk = fijk.coord;
  let res = get_resolution(h);

  // Overage is resolved on the Class II grid.
  let mut adj_res = res;
  if is_resolution_class_iii(res) {
    _down_ap7r(&mut fijk.coord);
    adj_res += 1;
  }

  let pent_leading_4 = is_pent && _h3_leading_non_zero_digit(h) == Direction::IAxes;
  let mut overage = _adjust_overage_class_ii(fijk, adj_res, pent_leading_4, false);
  if overage == Overage::NoOverage {
    fijk.coord = orig_ijk;
    return Ok(());
  }

  // Pentagons can overflow onto a second face.
  if is_pent {
    while overage == Overage::NewFace {
      overage = _adjust_overage_class_ii(fijk, adj_res, false, false);
    }
  }
  if adj_res != res {
    _up_ap7r(&mut fijk.coord);
  }
  Ok(())
}

/// Applies the digits of `h` to `fijk`, which holds the base cell's home face
/// coordinates. Returns whether the result may lie off the home face.
pub(crate) fn _h3_to_face_ijk_with_initialized_fijk(h: H3Index, fijk: &mut FaceIJK) -> bool {
  let res = get_resolution(h);
  let ijk = &mut fijk.coord;

  // A hexagon base cell centered on its face, or any res 0 hexagon, cannot overflow.
  let centered = ijk.i == 0 && ijk.j == 0 && ijk.k == 0;
  let possible_overage = _is_base_cell_pentagon(get_base_cell(h)) || !(res == 0 || centered);

  for r in 1..=res {
    if is_resolution_class_iii(r) {
      _down_ap7(ijk);
    } else {
      _down_ap7r(ijk);
    }
    _neighbor(ijk, get_index_digit(h, r));
  }
  possible_overage
}
