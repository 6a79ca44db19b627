//! Cell vertex numbering.
//!
//! Every cell numbers its vertices counter-clockwise, 0-5 for hexagons and
//! 0-4 for pentagons. The numbering is fixed relative to the base cell's home
//! icosahedron face, so a cell whose center lies on another face sees its
//! neighbor directions rotated against its vertices. This module maps between
//! neighbor directions and the vertex at which the shared edge begins,
//! correcting for that rotation.

use log::warn;

use crate::base_cells::_is_base_cell_pentagon;
use crate::constants::{MAX_BASE_CELL_FACES, NUM_BASE_CELLS, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::h3_index::{_h3_leading_non_zero_digit, _h3_to_face_ijk, get_base_cell, is_pentagon};
use crate::types::{Direction, FaceIJK, H3Error, H3Index, NUM_DIGITS};

/// Face number of an unused slot in the vertex rotation table.
pub const INVALID_FACE: i32 = -1;

/// A face touched by a base cell, and the rotation from that face's vertex
/// orientation to the base cell's home face orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCellRotation {
  /// Icosahedron face number, or `INVALID_FACE` for an unused slot.
  pub face: i32,
  /// Number of 60 degree counter-clockwise rotations, 0-5.
  pub ccw_rot60: u8,
}

const fn rot(face: i32, ccw_rot60: u8) -> BaseCellRotation {
  BaseCellRotation { face, ccw_rot60 }
}

const UNUSED: BaseCellRotation = rot(INVALID_FACE, 0);

/// Base cell vertex rotation table.
///
/// For each base cell, the faces it touches and the CCW rotations that bring
/// vertexes on that face into the orientation of the base cell's home face.
/// Faces are unordered for hexagon base cells. Pentagon rows list their faces
/// in directional order starting at the J axis, so the face reached through
/// digit `d` sits in slot `d - 2`.
#[rustfmt::skip]
static BASE_CELL_VERTEX_ROTATIONS: [[BaseCellRotation; MAX_BASE_CELL_FACES]; NUM_BASE_CELLS as usize] = [
  [rot( 0, 5), rot( 1, 0), rot( 2, 1), UNUSED, UNUSED],           // base cell 0
  [rot( 1, 5), rot( 2, 0), UNUSED, UNUSED, UNUSED],               // base cell 1
  [rot( 0, 5), rot( 1, 0), rot( 2, 1), rot( 6, 3), UNUSED],       // base cell 2
  [rot( 1, 5), rot( 2, 0), rot( 3, 1), UNUSED, UNUSED],           // base cell 3
  [rot( 4, 5), rot( 0, 0), rot( 2, 3), rot( 1, 2), rot( 3, 4)],   // base cell 4 (pentagon)
  [rot( 0, 5), rot( 1, 0), UNUSED, UNUSED, UNUSED],               // base cell 5
  [rot( 1, 0), rot( 2, 1), rot( 6, 3), UNUSED, UNUSED],           // base cell 6
  [rot( 1, 5), rot( 2, 0), rot( 3, 1), rot( 7, 3), UNUSED],       // base cell 7
  [rot( 0, 0), rot( 1, 1), rot( 4, 5), UNUSED, UNUSED],           // base cell 8
  [rot( 1, 5), rot( 2, 0), rot( 7, 3), UNUSED, UNUSED],           // base cell 9
  [rot( 0, 5), rot( 1, 0), rot( 6, 3), UNUSED, UNUSED],           // base cell 10
  [rot( 1, 0), rot( 6, 3), UNUSED, UNUSED, UNUSED],               // base cell 11
  [rot( 2, 5), rot( 3, 0), rot( 4, 1), UNUSED, UNUSED],           // base cell 12
  [rot( 2, 5), rot( 3, 0), UNUSED, UNUSED, UNUSED],               // base cell 13
  [rot( 6, 3), rot(11, 0), rot( 2, 1), rot( 7, 4), rot( 1, 0)],   // base cell 14 (pentagon)
  [rot( 0, 1), rot( 3, 5), rot( 4, 0), UNUSED, UNUSED],           // base cell 15
  [rot( 0, 0), rot( 1, 1), rot( 4, 5), rot( 5, 3), UNUSED],       // base cell 16
  [rot( 1, 3), rot( 6, 0), rot(11, 3), UNUSED, UNUSED],           // base cell 17
  [rot( 0, 0), rot( 1, 1), rot( 5, 3), UNUSED, UNUSED],           // base cell 18
  [rot( 2, 0), rot( 7, 3), UNUSED, UNUSED, UNUSED],               // base cell 19
  [rot( 2, 3), rot( 7, 0), rot(11, 3), UNUSED, UNUSED],           // base cell 20
  [rot( 2, 0), rot( 3, 1), rot( 7, 3), UNUSED, UNUSED],           // base cell 21
  [rot( 0, 0), rot( 4, 5), UNUSED, UNUSED, UNUSED],               // base cell 22
  [rot( 1, 3), rot( 6, 0), rot(10, 3), UNUSED, UNUSED],           // base cell 23
  [rot( 5, 3), rot(10, 0), rot( 1, 1), rot( 6, 4), rot( 0, 0)],   // base cell 24 (pentagon)
  [rot( 1, 3), rot( 6, 0), rot(10, 3), rot(11, 3), UNUSED],       // base cell 25
  [rot( 2, 5), rot( 3, 0), rot( 4, 1), rot( 8, 3), UNUSED],       // base cell 26
  [rot( 6, 3), rot( 7, 3), rot(11, 0), UNUSED, UNUSED],           // base cell 27
  [rot( 3, 5), rot( 4, 0), UNUSED, UNUSED, UNUSED],               // base cell 28
  [rot( 2, 5), rot( 3, 0), rot( 8, 3), UNUSED, UNUSED],           // base cell 29
  [rot( 0, 0), rot( 5, 3), UNUSED, UNUSED, UNUSED],               // base cell 30
  [rot( 0, 1), rot( 3, 5), rot( 4, 0), rot( 9, 3), UNUSED],       // base cell 31
  [rot( 0, 3), rot( 5, 0), rot(10, 3), UNUSED, UNUSED],           // base cell 32
  [rot( 0, 0), rot( 4, 5), rot( 5, 3), UNUSED, UNUSED],           // base cell 33
  [rot( 2, 3), rot( 7, 0), rot(12, 3), UNUSED, UNUSED],           // base cell 34
  [rot( 6, 3), rot(11, 0), UNUSED, UNUSED, UNUSED],               // base cell 35
  [rot( 2, 3), rot( 7, 0), rot(11, 3), rot(12, 3), UNUSED],       // base cell 36
  [rot( 5, 3), rot( 6, 3), rot(10, 0), UNUSED, UNUSED],           // base cell 37
  [rot( 7, 3), rot(12, 0), rot( 3, 1), rot( 8, 4), rot( 2, 0)],   // base cell 38 (pentagon)
  [rot( 6, 0), rot(10, 3), UNUSED, UNUSED, UNUSED],               // base cell 39
  [rot( 7, 0), rot(11, 3), UNUSED, UNUSED, UNUSED],               // base cell 40
  [rot( 0, 1), rot( 4, 0), rot( 9, 3), UNUSED, UNUSED],           // base cell 41
  [rot( 3, 0), rot( 4, 1), rot( 8, 3), UNUSED, UNUSED],           // base cell 42
  [rot( 3, 0), rot( 8, 3), UNUSED, UNUSED, UNUSED],               // base cell 43
  [rot( 3, 5), rot( 4, 0), rot( 9, 3), UNUSED, UNUSED],           // base cell 44
  [rot( 6, 0), rot(10, 3), rot(11, 3), UNUSED, UNUSED],           // base cell 45
  [rot( 6, 3), rot( 7, 3), rot(11, 0), rot(16, 3), UNUSED],       // base cell 46
  [rot( 3, 3), rot( 8, 0), rot(12, 3), UNUSED, UNUSED],           // base cell 47
  [rot( 0, 3), rot( 5, 0), rot(14, 3), UNUSED, UNUSED],           // base cell 48
  [rot( 9, 3), rot(14, 0), rot( 0, 1), rot( 5, 4), rot( 4, 0)],   // base cell 49 (pentagon)
  [rot( 0, 3), rot( 5, 0), rot(10, 3), rot(14, 3), UNUSED],       // base cell 50
  [rot( 7, 3), rot( 8, 3), rot(12, 0), UNUSED, UNUSED],           // base cell 51
  [rot( 5, 3), rot(10, 0), UNUSED, UNUSED, UNUSED],               // base cell 52
  [rot( 4, 0), rot( 9, 3), UNUSED, UNUSED, UNUSED],               // base cell 53
  [rot( 7, 3), rot(12, 0), UNUSED, UNUSED, UNUSED],               // base cell 54
  [rot( 7, 0), rot(11, 3), rot(12, 3), UNUSED, UNUSED],           // base cell 55
  [rot( 6, 3), rot(11, 0), rot(16, 3), UNUSED, UNUSED],           // base cell 56
  [rot( 5, 1), rot( 6, 3), rot(10, 0), rot(15, 3), UNUSED],       // base cell 57
  [rot( 8, 3), rot(13, 0), rot( 4, 1), rot( 9, 4), rot( 3, 0)],   // base cell 58 (pentagon)
  [rot( 6, 3), rot(10, 0), rot(15, 3), UNUSED, UNUSED],           // base cell 59
  [rot( 7, 3), rot(11, 0), rot(16, 3), UNUSED, UNUSED],           // base cell 60
  [rot( 4, 3), rot( 9, 0), rot(14, 3), UNUSED, UNUSED],           // base cell 61
  [rot( 3, 3), rot( 8, 0), rot(13, 3), UNUSED, UNUSED],           // base cell 62
  [rot(11, 3), rot( 6, 0), rot(15, 1), rot(10, 4), rot(16, 0)],   // base cell 63 (pentagon)
  [rot( 3, 3), rot( 8, 0), rot(12, 3), rot(13, 3), UNUSED],       // base cell 64
  [rot( 4, 3), rot( 9, 0), rot(13, 3), UNUSED, UNUSED],           // base cell 65
  [rot( 5, 3), rot( 9, 3), rot(14, 0), UNUSED, UNUSED],           // base cell 66
  [rot( 5, 0), rot(14, 3), UNUSED, UNUSED, UNUSED],               // base cell 67
  [rot(11, 3), rot(16, 0), UNUSED, UNUSED, UNUSED],               // base cell 68
  [rot( 8, 0), rot(12, 3), UNUSED, UNUSED, UNUSED],               // base cell 69
  [rot( 5, 0), rot(10, 3), rot(14, 3), UNUSED, UNUSED],           // base cell 70
  [rot( 7, 3), rot( 8, 3), rot(12, 0), rot(17, 3), UNUSED],       // base cell 71
  [rot(12, 3), rot( 7, 0), rot(16, 1), rot(11, 4), rot(17, 0)],   // base cell 72 (pentagon)
  [rot( 7, 3), rot(12, 0), rot(17, 3), UNUSED, UNUSED],           // base cell 73
  [rot( 5, 3), rot(10, 0), rot(15, 3), UNUSED, UNUSED],           // base cell 74
  [rot( 4, 3), rot( 9, 0), rot(13, 3), rot(14, 3), UNUSED],       // base cell 75
  [rot( 8, 3), rot( 9, 3), rot(13, 0), UNUSED, UNUSED],           // base cell 76
  [rot(11, 3), rot(15, 1), rot(16, 0), UNUSED, UNUSED],           // base cell 77
  [rot(10, 3), rot(15, 0), UNUSED, UNUSED, UNUSED],               // base cell 78
  [rot(10, 3), rot(15, 0), rot(16, 5), UNUSED, UNUSED],           // base cell 79
  [rot(11, 3), rot(16, 0), rot(17, 5), UNUSED, UNUSED],           // base cell 80
  [rot( 9, 3), rot(14, 0), UNUSED, UNUSED, UNUSED],               // base cell 81
  [rot( 8, 3), rot(13, 0), UNUSED, UNUSED, UNUSED],               // base cell 82
  [rot(10, 3), rot( 5, 0), rot(19, 1), rot(14, 4), rot(15, 0)],   // base cell 83 (pentagon)
  [rot( 8, 0), rot(12, 3), rot(13, 3), UNUSED, UNUSED],           // base cell 84
  [rot( 5, 3), rot( 9, 3), rot(14, 0), rot(19, 3), UNUSED],       // base cell 85
  [rot( 9, 0), rot(13, 3), UNUSED, UNUSED, UNUSED],               // base cell 86
  [rot( 5, 3), rot(14, 0), rot(19, 3), UNUSED, UNUSED],           // base cell 87
  [rot(12, 3), rot(16, 1), rot(17, 0), UNUSED, UNUSED],           // base cell 88
  [rot( 8, 3), rot(12, 0), rot(17, 3), UNUSED, UNUSED],           // base cell 89
  [rot(11, 3), rot(15, 1), rot(16, 0), rot(17, 5), UNUSED],       // base cell 90
  [rot(12, 3), rot(17, 0), UNUSED, UNUSED, UNUSED],               // base cell 91
  [rot(10, 3), rot(15, 0), rot(19, 1), UNUSED, UNUSED],           // base cell 92
  [rot(15, 1), rot(16, 0), UNUSED, UNUSED, UNUSED],               // base cell 93
  [rot( 9, 0), rot(13, 3), rot(14, 3), UNUSED, UNUSED],           // base cell 94
  [rot(10, 3), rot(15, 0), rot(16, 5), rot(19, 1), UNUSED],       // base cell 95
  [rot( 8, 3), rot( 9, 3), rot(13, 0), rot(18, 3), UNUSED],       // base cell 96
  [rot(13, 3), rot( 8, 0), rot(17, 1), rot(12, 4), rot(18, 0)],   // base cell 97 (pentagon)
  [rot( 8, 3), rot(13, 0), rot(18, 3), UNUSED, UNUSED],           // base cell 98
  [rot(16, 1), rot(17, 0), UNUSED, UNUSED, UNUSED],               // base cell 99
  [rot(14, 3), rot(15, 5), rot(19, 0), UNUSED, UNUSED],           // base cell 100
  [rot( 9, 3), rot(14, 0), rot(19, 3), UNUSED, UNUSED],           // base cell 101
  [rot(14, 3), rot(19, 0), UNUSED, UNUSED, UNUSED],               // base cell 102
  [rot(12, 3), rot(17, 0), rot(18, 5), UNUSED, UNUSED],           // base cell 103
  [rot( 9, 3), rot(13, 0), rot(18, 3), UNUSED, UNUSED],           // base cell 104
  [rot(12, 3), rot(16, 1), rot(17, 0), rot(18, 5), UNUSED],       // base cell 105
  [rot(15, 1), rot(16, 0), rot(17, 5), UNUSED, UNUSED],           // base cell 106
  [rot(14, 3), rot( 9, 0), rot(18, 1), rot(13, 4), rot(19, 0)],   // base cell 107 (pentagon)
  [rot(15, 0), rot(19, 1), UNUSED, UNUSED, UNUSED],               // base cell 108
  [rot(15, 0), rot(16, 5), rot(19, 1), UNUSED, UNUSED],           // base cell 109
  [rot(13, 3), rot(18, 0), UNUSED, UNUSED, UNUSED],               // base cell 110
  [rot(13, 3), rot(17, 1), rot(18, 0), UNUSED, UNUSED],           // base cell 111
  [rot(14, 3), rot(18, 1), rot(19, 0), UNUSED, UNUSED],           // base cell 112
  [rot(16, 1), rot(17, 0), rot(18, 5), UNUSED, UNUSED],           // base cell 113
  [rot(14, 3), rot(15, 5), rot(18, 1), rot(19, 0), UNUSED],       // base cell 114
  [rot(13, 3), rot(18, 0), rot(19, 5), UNUSED, UNUSED],           // base cell 115
  [rot(17, 1), rot(18, 0), UNUSED, UNUSED, UNUSED],               // base cell 116
  [rot(15, 5), rot(19, 0), rot(17, 3), rot(18, 2), rot(16, 4)],   // base cell 117 (pentagon)
  [rot(15, 5), rot(18, 1), rot(19, 0), UNUSED, UNUSED],           // base cell 118
  [rot(13, 3), rot(17, 1), rot(18, 0), rot(19, 5), UNUSED],       // base cell 119
  [rot(18, 1), rot(19, 0), UNUSED, UNUSED, UNUSED],               // base cell 120
  [rot(17, 1), rot(18, 0), rot(19, 5), UNUSED, UNUSED],           // base cell 121
];

/// Hexagon direction to vertex number relationships (same face).
/// Direction 0 (center) has no vertex.
static DIRECTION_TO_VERTEX_NUM_HEX: [Option<u8>; NUM_DIGITS] =
  [None, Some(3), Some(1), Some(2), Some(5), Some(4), Some(0)];

/// Pentagon direction to vertex number relationships (same face).
/// Directions 0 (center) and 1 (deleted K axis) have no vertex.
static DIRECTION_TO_VERTEX_NUM_PENT: [Option<u8>; NUM_DIGITS] =
  [None, None, Some(1), Some(2), Some(4), Some(3), Some(0)];

/// Hexagon vertex number to direction relationships (same face).
static VERTEX_NUM_TO_DIRECTION_HEX: [Direction; NUM_HEX_VERTS as usize] = [
  Direction::IjAxes,
  Direction::JAxes,
  Direction::JkAxes,
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
];

/// Pentagon vertex number to direction relationships (same face).
static VERTEX_NUM_TO_DIRECTION_PENT: [Direction; NUM_PENT_VERTS as usize] = [
  Direction::IjAxes,
  Direction::JAxes,
  Direction::JkAxes,
  Direction::IkAxes,
  Direction::IAxes,
];

/// The rotation table row for a base cell, or `None` when out of range.
#[inline]
#[must_use]
pub fn base_cell_vertex_rotations(base_cell: i32) -> Option<&'static [BaseCellRotation; MAX_BASE_CELL_FACES]> {
  usize::try_from(base_cell)
    .ok()
    .and_then(|idx| BASE_CELL_VERTEX_ROTATIONS.get(idx))
}

/// Face a pentagon row lists for an axis digit (J through IJ).
#[inline]
fn pentagon_axis_face(row: &[BaseCellRotation; MAX_BASE_CELL_FACES], digit: Direction) -> i32 {
  row[digit as usize - Direction::JAxes as usize].face
}

/// Number of CCW rotations of the vertexes of a cell of `base_cell` whose
/// center lies on `face`, given the cell's leading non-zero digit.
///
/// # Errors
/// * `H3Error::CellInvalid` if `base_cell` is out of range.
/// * `H3Error::Failed` if the base cell does not touch `face`.
pub fn vertex_rotations_on_face(base_cell: i32, face: i32, leading_digit: Direction) -> Result<u8, H3Error> {
  let row = base_cell_vertex_rotations(base_cell).ok_or(H3Error::CellInvalid)?;

  let Some(rotation) = row.iter().find(|r| r.face != INVALID_FACE && r.face == face) else {
    warn!("base cell {base_cell} has no vertex rotation entry for face {face}");
    return Err(H3Error::Failed);
  };
  let ccw_rot60 = rotation.ccw_rot60;

  // Check whether the cell crosses a deleted pentagon subsequence
  if _is_base_cell_pentagon(base_cell) {
    if leading_digit == Direction::JkAxes && face == pentagon_axis_face(row, Direction::IkAxes) {
      // Crosses from JK to IK: rotate CW
      return Ok(if ccw_rot60 == 0 { 5 } else { ccw_rot60 - 1 });
    }
    if leading_digit == Direction::IkAxes && face == pentagon_axis_face(row, Direction::JkAxes) {
      // Crosses from IK to JK: rotate CCW
      return Ok((ccw_rot60 + 1) % 6);
    }
  }
  Ok(ccw_rot60)
}

/// Get the number of CCW rotations of the cell's vertex numbers compared to
/// the directional layout of its neighbors.
///
/// # Errors
/// * `H3Error::CellInvalid` if the base cell of `cell` is out of range.
/// * `H3Error::Failed` if the cell's face is missing from its base cell's
///   rotation row, which does not happen for well-formed cells.
pub fn vertex_rotations(cell: H3Index) -> Result<u8, H3Error> {
  let mut fijk = FaceIJK::default();
  _h3_to_face_ijk(cell, &mut fijk)?;
  vertex_rotations_on_face(get_base_cell(cell), fijk.face, _h3_leading_non_zero_digit(cell))
}

/// Get the first vertex number for a given direction. The neighbor in this
/// direction is located between this vertex number and the next number in
/// sequence.
///
/// # Errors
/// * `H3Error::Domain` if `direction` is the center, the invalid digit, or the
///   deleted K axis of a pentagon.
/// * Any error from [`vertex_rotations`].
pub fn vertex_num_for_direction(origin: H3Index, direction: Direction) -> Result<u8, H3Error> {
  let is_pent = is_pentagon(origin);
  if direction == Direction::Center
    || direction >= Direction::InvalidDigit
    || (is_pent && direction == Direction::KAxes)
  {
    return Err(H3Error::Domain);
  }

  let rotations = vertex_rotations(origin)?;

  // Undo the face rotation to find the vertex in this cell's numbering
  let (table, num_verts) = if is_pent {
    (&DIRECTION_TO_VERTEX_NUM_PENT, NUM_PENT_VERTS)
  } else {
    (&DIRECTION_TO_VERTEX_NUM_HEX, NUM_HEX_VERTS)
  };
  let vertex_num = table[direction as usize].ok_or(H3Error::Domain)?;
  Ok((vertex_num + num_verts - rotations) % num_verts)
}

/// Get the direction of the neighbor whose shared edge begins at the given
/// vertex number.
///
/// # Errors
/// * `H3Error::Domain` if `vertex_num` is not a vertex of this cell's shape.
/// * Any error from [`vertex_rotations`].
pub fn direction_for_vertex_num(origin: H3Index, vertex_num: u8) -> Result<Direction, H3Error> {
  let is_pent = is_pentagon(origin);
  let num_verts = if is_pent { NUM_PENT_VERTS } else { NUM_HEX_VERTS };
  if vertex_num >= num_verts {
    return Err(H3Error::Domain);
  }

  let rotations = vertex_rotations(origin)?;
  let idx = usize::from((vertex_num + rotations) % num_verts);
  Ok(if is_pent {
    VERTEX_NUM_TO_DIRECTION_PENT[idx]
  } else {
    VERTEX_NUM_TO_DIRECTION_HEX[idx]
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::base_cells::{_base_cell_to_face_ijk, base_cell_to_cell};
  use crate::h3_index::cell_from_digits;
  use std::collections::HashSet;

  #[test]
  fn test_rotation_rows_well_formed() {
    for bc in 0..NUM_BASE_CELLS {
      let row = base_cell_vertex_rotations(bc).unwrap();
      let faces: Vec<i32> = row.iter().map(|r| r.face).filter(|f| *f != INVALID_FACE).collect();
      let distinct: HashSet<i32> = faces.iter().copied().collect();
      assert_eq!(distinct.len(), faces.len(), "duplicate face in row {bc}");
      assert!(row.iter().all(|r| r.ccw_rot60 <= 5), "rotation out of range in row {bc}");
      if _is_base_cell_pentagon(bc) {
        assert_eq!(faces.len(), 5, "pentagon {bc} should touch five faces");
      }
      // Unused slots only trail the populated ones.
      let first_unused = row.iter().position(|r| r.face == INVALID_FACE).unwrap_or(MAX_BASE_CELL_FACES);
      assert_eq!(first_unused, faces.len(), "gap in row {bc}");
    }
    assert!(base_cell_vertex_rotations(NUM_BASE_CELLS).is_none());
    assert!(base_cell_vertex_rotations(-1).is_none());
  }

  #[test]
  fn test_home_face_has_no_rotation() {
    for bc in 0..NUM_BASE_CELLS {
      let mut home = FaceIJK::default();
      _base_cell_to_face_ijk(bc, &mut home).unwrap();
      assert_eq!(
        vertex_rotations_on_face(bc, home.face, Direction::Center),
        Ok(0),
        "home face {} of base cell {bc}",
        home.face
      );
    }
  }

  #[test]
  fn test_direction_tables_invert() {
    for (vertex, dir) in VERTEX_NUM_TO_DIRECTION_HEX.iter().enumerate() {
      assert_eq!(DIRECTION_TO_VERTEX_NUM_HEX[*dir as usize], Some(vertex as u8));
    }
    for (vertex, dir) in VERTEX_NUM_TO_DIRECTION_PENT.iter().enumerate() {
      assert_eq!(DIRECTION_TO_VERTEX_NUM_PENT[*dir as usize], Some(vertex as u8));
    }
    assert_eq!(DIRECTION_TO_VERTEX_NUM_PENT[Direction::KAxes as usize], None);
  }

  #[test]
  fn test_vertex_rotations_on_face_hexagon() {
    // Base cell 0 row: (0,5), (1,0), (2,1)
    assert_eq!(vertex_rotations_on_face(0, 1, Direction::Center), Ok(0));
    assert_eq!(vertex_rotations_on_face(0, 0, Direction::JkAxes), Ok(5));
    assert_eq!(vertex_rotations_on_face(0, 2, Direction::IkAxes), Ok(1));
  }

  #[test]
  fn test_vertex_rotations_on_face_pentagon_corrections() {
    // Base cell 4 row: (4,5), (0,0), (2,3), (1,2), (3,4)
    // JK leading digit on the IK face (slot 3, face 1): one CW step.
    assert_eq!(vertex_rotations_on_face(4, 1, Direction::JkAxes), Ok(1));
    // IK leading digit on the JK face (slot 1, face 0): one CCW step.
    assert_eq!(vertex_rotations_on_face(4, 0, Direction::IkAxes), Ok(1));
    // No crossing.
    assert_eq!(vertex_rotations_on_face(4, 0, Direction::JkAxes), Ok(0));
    assert_eq!(vertex_rotations_on_face(4, 1, Direction::IkAxes), Ok(2));
    assert_eq!(vertex_rotations_on_face(4, 2, Direction::JkAxes), Ok(3));

    // Base cell 117 row: (15,5), (19,0), (17,3), (18,2), (16,4)
    assert_eq!(vertex_rotations_on_face(117, 18, Direction::JkAxes), Ok(1));
    assert_eq!(vertex_rotations_on_face(117, 19, Direction::IkAxes), Ok(1));
    assert_eq!(vertex_rotations_on_face(117, 15, Direction::IkAxes), Ok(5));
  }

  #[test]
  fn test_vertex_rotations_on_face_missing() {
    assert_eq!(vertex_rotations_on_face(0, 10, Direction::Center), Err(H3Error::Failed));
    assert_eq!(vertex_rotations_on_face(1, INVALID_FACE, Direction::Center), Err(H3Error::Failed));
    assert_eq!(vertex_rotations_on_face(122, 0, Direction::Center), Err(H3Error::CellInvalid));
  }

  #[test]
  fn test_vertex_rotations_base_cells() {
    let bc0 = base_cell_to_cell(0).unwrap();
    assert_eq!(vertex_rotations(bc0), Ok(0));
    let bc4 = base_cell_to_cell(4).unwrap();
    assert_eq!(vertex_rotations(bc4), Ok(0));
  }

  #[test]
  fn test_vertex_rotations_pentagon_child_off_home_face() {
    // Lands on face 1 (slot 3) with leading IK, which is not a crossing.
    let h = cell_from_digits(4, &[Direction::IkAxes]).unwrap();
    assert_eq!(vertex_rotations(h), Ok(2));
  }

  #[test]
  fn test_vertex_rotations_jk_leading_crossing() {
    // Res 3 JK-leading descendant of base cell 4 whose center lies on face 1,
    // the face its IK subsequence occupies: the table gives 2, corrected CW to 1.
    let h = H3Index(0x8308ccfffffffff);
    assert_eq!(get_base_cell(h), 4);
    assert_eq!(_h3_leading_non_zero_digit(h), Direction::JkAxes);
    assert_eq!(vertex_rotations_on_face(4, 1, Direction::Center), Ok(2));
    assert_eq!(vertex_rotations(h), Ok(1));
  }

  #[test]
  fn test_vertex_rotations_ik_leading_crossing() {
    // Res 4 IK-leading descendant of base cell 117 whose center lies on
    // face 19, the face its JK subsequence occupies: the table gives 0,
    // corrected CCW to 1.
    let h = H3Index(0x84ea2b7ffffffff);
    assert_eq!(get_base_cell(h), 117);
    assert_eq!(_h3_leading_non_zero_digit(h), Direction::IkAxes);
    assert_eq!(vertex_rotations_on_face(117, 19, Direction::Center), Ok(0));
    assert_eq!(vertex_rotations(h), Ok(1));
  }

  #[test]
  fn test_vertex_num_for_direction_hex() {
    let origin = H3Index(0x823d6ffffffffff);
    let mut seen = [false; NUM_HEX_VERTS as usize];
    for dir in Direction::NEIGHBORS {
      let vertex = vertex_num_for_direction(origin, dir).unwrap();
      assert!(vertex < NUM_HEX_VERTS, "vertex {vertex} out of range");
      assert!(!seen[vertex as usize], "vertex {vertex} appears only once");
      seen[vertex as usize] = true;
    }
  }

  #[test]
  fn test_vertex_num_for_direction_pent() {
    let pentagon = H3Index(0x823007fffffffff);
    assert!(is_pentagon(pentagon));
    let mut seen = [false; NUM_PENT_VERTS as usize];
    for dir in &Direction::NEIGHBORS[1..] {
      let vertex = vertex_num_for_direction(pentagon, *dir).unwrap();
      assert!(vertex < NUM_PENT_VERTS, "vertex {vertex} out of range");
      assert!(!seen[vertex as usize], "vertex {vertex} appears only once");
      seen[vertex as usize] = true;
    }
  }

  #[test]
  fn test_vertex_num_for_direction_bad_directions() {
    let origin = H3Index(0x823d6ffffffffff);
    let pentagon = H3Index(0x823007fffffffff);
    assert_eq!(vertex_num_for_direction(origin, Direction::Center), Err(H3Error::Domain));
    assert_eq!(vertex_num_for_direction(origin, Direction::InvalidDigit), Err(H3Error::Domain));
    assert_eq!(vertex_num_for_direction(pentagon, Direction::KAxes), Err(H3Error::Domain));
  }

  #[test]
  fn test_vertex_num_for_direction_base_cell_0() {
    // Base cell 0 sits on face 1 with no rotation, so the K axis keeps vertex 3.
    let bc0 = base_cell_to_cell(0).unwrap();
    assert_eq!(vertex_num_for_direction(bc0, Direction::KAxes), Ok(3));
    assert_eq!(vertex_num_for_direction(bc0, Direction::IjAxes), Ok(0));
  }

  #[test]
  fn test_vertex_num_for_direction_rotated() {
    // Res 1 IK child of base cell 4 is a hexagon rotated twice.
    let h = cell_from_digits(4, &[Direction::IkAxes]).unwrap();
    assert_eq!(vertex_num_for_direction(h, Direction::KAxes), Ok(1));
    assert_eq!(vertex_num_for_direction(h, Direction::IjAxes), Ok(4));
  }

  #[test]
  fn test_direction_for_vertex_num() {
    let origin = H3Index(0x823d6ffffffffff);
    for dir in Direction::NEIGHBORS {
      let vertex = vertex_num_for_direction(origin, dir).unwrap();
      assert_eq!(direction_for_vertex_num(origin, vertex), Ok(dir));
    }
    assert_eq!(direction_for_vertex_num(origin, 6), Err(H3Error::Domain));

    let pentagon = H3Index(0x823007fffffffff);
    assert_eq!(direction_for_vertex_num(pentagon, 5), Err(H3Error::Domain));
    for vertex in 0..NUM_PENT_VERTS {
      let dir = direction_for_vertex_num(pentagon, vertex).unwrap();
      assert_ne!(dir, Direction::KAxes);
      assert_eq!(vertex_num_for_direction(pentagon, dir), Ok(vertex));
    }
  }
}
