// src/h3_index/inspection.rs

use crate::base_cells::_is_base_cell_pentagon;
use crate::constants::{H3_CELL_MODE, H3_HIGH_BIT_MASK};
use crate::h3_index::{_h3_leading_non_zero_digit, get_base_cell, get_mode};
use crate::types::{Direction, H3Index};

/// Returns the base cell number for an H3 cell index.
///
/// Reads the base cell bits directly; the index is not validated.
#[inline]
#[must_use]
pub fn get_base_cell_number(h: H3Index) -> i32 {
  get_base_cell(h)
}

/// Determines if an H3 cell is a pentagon.
///
/// A cell is a pentagon when its base cell is a pentagon and all of its digits
/// are `Direction::Center`. Indexes that are not in cell mode, or whose base
/// cell is out of range, are never pentagons.
#[must_use]
pub fn is_pentagon(h: H3Index) -> bool {
  if h.0 & H3_HIGH_BIT_MASK != 0 || get_mode(h) != H3_CELL_MODE {
    return false;
  }
  _is_base_cell_pentagon(get_base_cell(h)) && _h3_leading_non_zero_digit(h) == Direction::Center
}
