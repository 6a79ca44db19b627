//! Resolution 0 base cell metadata.

use crate::constants::NUM_BASE_CELLS;
use crate::h3_index::_set_h3_index;
use crate::types::{CoordIJK, Direction, FaceIJK, H3Error, H3Index};

/// Information on a single base cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  /// "home" face and normalized ijk coordinates on that face
  pub home_fijk: FaceIJK,
  /// is this base cell a pentagon?
  pub is_pentagon: bool,
}

const fn bc(face: i32, i: i32, j: i32, k: i32, is_pentagon: bool) -> BaseCellData {
  BaseCellData {
    home_fijk: FaceIJK {
      face,
      coord: CoordIJK { i, j, k },
    },
    is_pentagon,
  }
}

/// Resolution 0 base cell data lookup table: home face, home coordinates and pentagon flag.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  bc( 1, 1, 0, 0, false),   // base cell 0
  bc( 2, 1, 1, 0, false),   // base cell 1
  bc( 1, 0, 0, 0, false),   // base cell 2
  bc( 2, 1, 0, 0, false),   // base cell 3
  bc( 0, 2, 0, 0, true),    // base cell 4 (pentagon)
  bc( 1, 1, 1, 0, false),   // base cell 5
  bc( 1, 0, 0, 1, false),   // base cell 6
  bc( 2, 0, 0, 0, false),   // base cell 7
  bc( 0, 1, 0, 0, false),   // base cell 8
  bc( 2, 0, 1, 0, false),   // base cell 9
  bc( 1, 0, 1, 0, false),   // base cell 10
  bc( 1, 0, 1, 1, false),   // base cell 11
  bc( 3, 1, 0, 0, false),   // base cell 12
  bc( 3, 1, 1, 0, false),   // base cell 13
  bc(11, 2, 0, 0, true),    // base cell 14 (pentagon)
  bc( 4, 1, 0, 0, false),   // base cell 15
  bc( 0, 0, 0, 0, false),   // base cell 16
  bc( 6, 0, 1, 0, false),   // base cell 17
  bc( 0, 0, 0, 1, false),   // base cell 18
  bc( 2, 0, 1, 1, false),   // base cell 19
  bc( 7, 0, 0, 1, false),   // base cell 20
  bc( 2, 0, 0, 1, false),   // base cell 21
  bc( 0, 1, 1, 0, false),   // base cell 22
  bc( 6, 0, 0, 1, false),   // base cell 23
  bc(10, 2, 0, 0, true),    // base cell 24 (pentagon)
  bc( 6, 0, 0, 0, false),   // base cell 25
  bc( 3, 0, 0, 0, false),   // base cell 26
  bc(11, 1, 0, 0, false),   // base cell 27
  bc( 4, 1, 1, 0, false),   // base cell 28
  bc( 3, 0, 1, 0, false),   // base cell 29
  bc( 0, 0, 1, 1, false),   // base cell 30
  bc( 4, 0, 0, 0, false),   // base cell 31
  bc( 5, 0, 1, 0, false),   // base cell 32
  bc( 0, 0, 1, 0, false),   // base cell 33
  bc( 7, 0, 1, 0, false),   // base cell 34
  bc(11, 1, 1, 0, false),   // base cell 35
  bc( 7, 0, 0, 0, false),   // base cell 36
  bc(10, 1, 0, 0, false),   // base cell 37
  bc(12, 2, 0, 0, true),    // base cell 38 (pentagon)
  bc( 6, 1, 0, 1, false),   // base cell 39
  bc( 7, 1, 0, 1, false),   // base cell 40
  bc( 4, 0, 0, 1, false),   // base cell 41
  bc( 3, 0, 0, 1, false),   // base cell 42
  bc( 3, 0, 1, 1, false),   // base cell 43
  bc( 4, 0, 1, 0, false),   // base cell 44
  bc( 6, 1, 0, 0, false),   // base cell 45
  bc(11, 0, 0, 0, false),   // base cell 46
  bc( 8, 0, 0, 1, false),   // base cell 47
  bc( 5, 0, 0, 1, false),   // base cell 48
  bc(14, 2, 0, 0, true),    // base cell 49 (pentagon)
  bc( 5, 0, 0, 0, false),   // base cell 50
  bc(12, 1, 0, 0, false),   // base cell 51
  bc(10, 1, 1, 0, false),   // base cell 52
  bc( 4, 0, 1, 1, false),   // base cell 53
  bc(12, 1, 1, 0, false),   // base cell 54
  bc( 7, 1, 0, 0, false),   // base cell 55
  bc(11, 0, 1, 0, false),   // base cell 56
  bc(10, 0, 0, 0, false),   // base cell 57
  bc(13, 2, 0, 0, true),    // base cell 58 (pentagon)
  bc(10, 0, 0, 1, false),   // base cell 59
  bc(11, 0, 0, 1, false),   // base cell 60
  bc( 9, 0, 1, 0, false),   // base cell 61
  bc( 8, 0, 1, 0, false),   // base cell 62
  bc( 6, 2, 0, 0, true),    // base cell 63 (pentagon)
  bc( 8, 0, 0, 0, false),   // base cell 64
  bc( 9, 0, 0, 1, false),   // base cell 65
  bc(14, 1, 0, 0, false),   // base cell 66
  bc( 5, 1, 0, 1, false),   // base cell 67
  bc(16, 0, 1, 1, false),   // base cell 68
  bc( 8, 1, 0, 1, false),   // base cell 69
  bc( 5, 1, 0, 0, false),   // base cell 70
  bc(12, 0, 0, 0, false),   // base cell 71
  bc( 7, 2, 0, 0, true),    // base cell 72 (pentagon)
  bc(12, 0, 1, 0, false),   // base cell 73
  bc(10, 0, 1, 0, false),   // base cell 74
  bc( 9, 0, 0, 0, false),   // base cell 75
  bc(13, 1, 0, 0, false),   // base cell 76
  bc(16, 0, 0, 1, false),   // base cell 77
  bc(15, 0, 1, 1, false),   // base cell 78
  bc(15, 0, 1, 0, false),   // base cell 79
  bc(16, 0, 1, 0, false),   // base cell 80
  bc(14, 1, 1, 0, false),   // base cell 81
  bc(13, 1, 1, 0, false),   // base cell 82
  bc( 5, 2, 0, 0, true),    // base cell 83 (pentagon)
  bc( 8, 1, 0, 0, false),   // base cell 84
  bc(14, 0, 0, 0, false),   // base cell 85
  bc( 9, 1, 0, 1, false),   // base cell 86
  bc(14, 0, 0, 1, false),   // base cell 87
  bc(17, 0, 0, 1, false),   // base cell 88
  bc(12, 0, 0, 1, false),   // base cell 89
  bc(16, 0, 0, 0, false),   // base cell 90
  bc(17, 0, 1, 1, false),   // base cell 91
  bc(15, 0, 0, 1, false),   // base cell 92
  bc(16, 1, 0, 1, false),   // base cell 93
  bc( 9, 1, 0, 0, false),   // base cell 94
  bc(15, 0, 0, 0, false),   // base cell 95
  bc(13, 0, 0, 0, false),   // base cell 96
  bc( 8, 2, 0, 0, true),    // base cell 97 (pentagon)
  bc(13, 0, 1, 0, false),   // base cell 98
  bc(17, 1, 0, 1, false),   // base cell 99
  bc(19, 0, 1, 0, false),   // base cell 100
  bc(14, 0, 1, 0, false),   // base cell 101
  bc(19, 0, 1, 1, false),   // base cell 102
  bc(17, 0, 1, 0, false),   // base cell 103
  bc(13, 0, 0, 1, false),   // base cell 104
  bc(17, 0, 0, 0, false),   // base cell 105
  bc(16, 1, 0, 0, false),   // base cell 106
  bc( 9, 2, 0, 0, true),    // base cell 107 (pentagon)
  bc(15, 1, 0, 1, false),   // base cell 108
  bc(15, 1, 0, 0, false),   // base cell 109
  bc(18, 0, 1, 1, false),   // base cell 110
  bc(18, 0, 0, 1, false),   // base cell 111
  bc(19, 0, 0, 1, false),   // base cell 112
  bc(17, 1, 0, 0, false),   // base cell 113
  bc(19, 0, 0, 0, false),   // base cell 114
  bc(18, 0, 1, 0, false),   // base cell 115
  bc(18, 1, 0, 1, false),   // base cell 116
  bc(19, 2, 0, 0, true),    // base cell 117 (pentagon)
  bc(19, 1, 0, 0, false),   // base cell 118
  bc(18, 0, 0, 0, false),   // base cell 119
  bc(19, 1, 0, 1, false),   // base cell 120
  bc(18, 1, 0, 0, false),   // base cell 121
];

#[inline]
fn base_cell_data(base_cell: i32) -> Option<&'static BaseCellData> {
  usize::try_from(base_cell).ok().and_then(|idx| BASE_CELL_DATA.get(idx))
}

/// Return whether or not the indicated base cell is a pentagon.
/// Out of range base cells are never pentagons.
#[inline]
#[must_use]
pub(crate) fn _is_base_cell_pentagon(base_cell: i32) -> bool {
  base_cell_data(base_cell).is_some_and(|data| data.is_pentagon)
}

/// Find the home `FaceIJK` of a base cell.
///
/// # Errors
/// `H3Error::CellInvalid` if `base_cell` is out of range; `h` is left untouched.
#[inline]
pub(crate) fn _base_cell_to_face_ijk(base_cell: i32, h: &mut FaceIJK) -> Result<(), H3Error> {
  let data = base_cell_data(base_cell).ok_or(H3Error::CellInvalid)?;
  *h = data.home_fijk;
  Ok(())
}

/// Get the resolution 0 cell index for a base cell number (0-121).
///
/// # Errors
/// `H3Error::CellInvalid` if `base_cell` is out of range.
pub fn base_cell_to_cell(base_cell: i32) -> Result<H3Index, H3Error> {
  if base_cell_data(base_cell).is_none() {
    return Err(H3Error::CellInvalid);
  }
  let mut h = H3Index::default();
  _set_h3_index(&mut h, 0, base_cell, Direction::Center);
  Ok(h)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_ICOSA_FACES;

  #[test]
  fn test_pentagon_count() {
    let count = (0..NUM_BASE_CELLS).filter(|&bc| _is_base_cell_pentagon(bc)).count();
    assert_eq!(count, 12);
  }

  #[test]
  fn test_known_pentagons() {
    for bc in [4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117] {
      assert!(_is_base_cell_pentagon(bc), "base cell {bc} should be a pentagon");
    }
    assert!(!_is_base_cell_pentagon(0));
    assert!(!_is_base_cell_pentagon(-1));
    assert!(!_is_base_cell_pentagon(NUM_BASE_CELLS));
  }

  #[test]
  fn test_home_faces_in_range() {
    for bc in 0..NUM_BASE_CELLS {
      let mut fijk = FaceIJK::default();
      _base_cell_to_face_ijk(bc, &mut fijk).expect("valid base cell");
      assert!((0..NUM_ICOSA_FACES).contains(&fijk.face), "base cell {bc} face {}", fijk.face);
    }
    let mut untouched = FaceIJK::default();
    assert_eq!(_base_cell_to_face_ijk(122, &mut untouched), Err(H3Error::CellInvalid));
    assert_eq!(untouched, FaceIJK::default());
  }

  #[test]
  fn test_base_cell_to_cell() {
    // Base cell 4 is the first pentagon, `8009fffffffffff`.
    assert_eq!(base_cell_to_cell(4), Ok(H3Index(0x8009fffffffffff)));
    assert_eq!(base_cell_to_cell(0), Ok(H3Index(0x8001fffffffffff)));
    assert_eq!(base_cell_to_cell(122), Err(H3Error::CellInvalid));
    assert_eq!(base_cell_to_cell(-3), Err(H3Error::CellInvalid));
  }
}
