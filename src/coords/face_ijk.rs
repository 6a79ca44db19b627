// src/coords/face_ijk.rs

use crate::constants::{MAX_H3_RES, NUM_ICOSA_FACES};
use crate::coords::ijk::{_ijk_add, _ijk_normalize, _ijk_rotate60_ccw, _ijk_rotate60_cw, _ijk_scale, _ijk_sub, _set_ijk};
use crate::types::{CoordIJK, FaceIJK};

/// IJ quadrant `FACE_NEIGHBORS` table direction.
pub(crate) const IJ_QUADRANT: usize = 1;
/// KI quadrant `FACE_NEIGHBORS` table direction.
pub(crate) const KI_QUADRANT: usize = 2;
/// JK quadrant `FACE_NEIGHBORS` table direction.
pub(crate) const JK_QUADRANT: usize = 3;

/// Largest coordinate sum still on a face, indexed by Class II resolution.
/// Class III resolutions are never looked up and hold -1.
#[rustfmt::skip]
static MAX_DIM_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33_614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Unit scale distance, indexed by Class II resolution.
#[rustfmt::skip]
static UNIT_SCALE_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16_807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Information to transform into an adjacent face IJK system.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientIJK {
  /// face number
  pub(crate) face: i32,
  /// res 0 translation relative to primary face
  pub(crate) translate: CoordIJK,
  /// number of 60 degree ccw rotations relative to primary face
  pub(crate) ccw_rot60: u8,
}

const fn orient(face: i32, i: i32, j: i32, k: i32, ccw_rot60: u8) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK { i, j, k },
    ccw_rot60,
  }
}

/// Neighboring faces of each icosahedron face: the face itself, then the
/// IJ, KI and JK quadrants.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES as usize] = [
  [orient( 0, 0, 0, 0, 0), orient( 4, 2, 0, 2, 1), orient( 1, 2, 2, 0, 5), orient( 5, 0, 2, 2, 3)], // face 0
  [orient( 1, 0, 0, 0, 0), orient( 0, 2, 0, 2, 1), orient( 2, 2, 2, 0, 5), orient( 6, 0, 2, 2, 3)], // face 1
  [orient( 2, 0, 0, 0, 0), orient( 1, 2, 0, 2, 1), orient( 3, 2, 2, 0, 5), orient( 7, 0, 2, 2, 3)], // face 2
  [orient( 3, 0, 0, 0, 0), orient( 2, 2, 0, 2, 1), orient( 4, 2, 2, 0, 5), orient( 8, 0, 2, 2, 3)], // face 3
  [orient( 4, 0, 0, 0, 0), orient( 3, 2, 0, 2, 1), orient( 0, 2, 2, 0, 5), orient( 9, 0, 2, 2, 3)], // face 4
  [orient( 5, 0, 0, 0, 0), orient(10, 2, 2, 0, 3), orient(14, 2, 0, 2, 3), orient( 0, 0, 2, 2, 3)], // face 5
  [orient( 6, 0, 0, 0, 0), orient(11, 2, 2, 0, 3), orient(10, 2, 0, 2, 3), orient( 1, 0, 2, 2, 3)], // face 6
  [orient( 7, 0, 0, 0, 0), orient(12, 2, 2, 0, 3), orient(11, 2, 0, 2, 3), orient( 2, 0, 2, 2, 3)], // face 7
  [orient( 8, 0, 0, 0, 0), orient(13, 2, 2, 0, 3), orient(12, 2, 0, 2, 3), orient( 3, 0, 2, 2, 3)], // face 8
  [orient( 9, 0, 0, 0, 0), orient(14, 2, 2, 0, 3), orient(13, 2, 0, 2, 3), orient( 4, 0, 2, 2, 3)], // face 9
  [orient(10, 0, 0, 0, 0), orient( 5, 2, 2, 0, 3), orient( 6, 2, 0, 2, 3), orient(15, 0, 2, 2, 3)], // face 10
  [orient(11, 0, 0, 0, 0), orient( 6, 2, 2, 0, 3), orient( 7, 2, 0, 2, 3), orient(16, 0, 2, 2, 3)], // face 11
  [orient(12, 0, 0, 0, 0), orient( 7, 2, 2, 0, 3), orient( 8, 2, 0, 2, 3), orient(17, 0, 2, 2, 3)], // face 12
  [orient(13, 0, 0, 0, 0), orient( 8, 2, 2, 0, 3), orient( 9, 2, 0, 2, 3), orient(18, 0, 2, 2, 3)], // face 13
  [orient(14, 0, 0, 0, 0), orient( 9, 2, 2, 0, 3), orient( 5, 2, 0, 2, 3), orient(19, 0, 2, 2, 3)], // face 14
  [orient(15, 0, 0, 0, 0), orient(16, 2, 0, 2, 1), orient(19, 2, 2, 0, 5), orient(10, 0, 2, 2, 3)], // face 15
  [orient(16, 0, 0, 0, 0), orient(17, 2, 0, 2, 1), orient(15, 2, 2, 0, 5), orient(11, 0, 2, 2, 3)], // face 16
  [orient(17, 0, 0, 0, 0), orient(18, 2, 0, 2, 1), orient(16, 2, 2, 0, 5), orient(12, 0, 2, 2, 3)], // face 17
  [orient(18, 0, 0, 0, 0), orient(19, 2, 0, 2, 1), orient(17, 2, 2, 0, 5), orient(13, 0, 2, 2, 3)], // face 18
  [orient(19, 0, 0, 0, 0), orient(15, 2, 0, 2, 1), orient(18, 2, 2, 0, 5), orient(14, 0, 2, 2, 3)], // face 19
];

/// Digit representing overage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// on original face
  NoOverage = 0,
  /// on face edge (only occurs on substrate grids)
  FaceEdge = 1,
  /// overage on new face interior
  NewFace = 2,
}

/// Adjusts a `FaceIJK` address in place so that the resulting cell address is
/// relative to the correct icosahedral face.
///
/// `res` must be a Class II resolution. `pent_leading_4` rotates a pentagon
/// cell with a leading I digit about the pentagon corner before it crosses
/// into the KI quadrant. `substrate` treats the coordinates as lying on the
/// aperture 3 substrate grid, three times finer than `res`.
pub(crate) fn _adjust_overage_class_ii(fijk: &mut FaceIJK, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
  let ijk = &mut fijk.coord;

  let max_dim_base = MAX_DIM_BY_CII_RES[res as usize];
  let mut max_dim = max_dim_base;
  let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
  if substrate {
    max_dim *= 3;
    unit_scale *= 3;
  }

  let coord_sum = ijk.i + ijk.j + ijk.k;
  if substrate && coord_sum == max_dim {
    return Overage::FaceEdge;
  }
  if coord_sum <= max_dim {
    return Overage::NoOverage;
  }

  let quadrant = if ijk.k > 0 {
    if ijk.j > 0 {
      JK_QUADRANT
    } else {
      if pent_leading_4 {
        // Rotate about the pentagon corner, which sits on the unscaled grid.
        let mut origin = CoordIJK::default();
        _set_ijk(&mut origin, max_dim_base, 0, 0);
        let mut tmp = CoordIJK::default();
        _ijk_sub(ijk, &origin, &mut tmp);
        _ijk_rotate60_cw(&mut tmp);
        _ijk_add(&tmp, &origin, ijk);
      }
      KI_QUADRANT
    }
  } else {
    IJ_QUADRANT
  };
  let orient = &FACE_NEIGHBORS[fijk.face as usize][quadrant];
  fijk.face = orient.face;

  for _ in 0..orient.ccw_rot60 {
    _ijk_rotate60_ccw(ijk);
  }
  let mut translate = orient.translate;
  _ijk_scale(&mut translate, unit_scale);
  let rotated = *ijk;
  _ijk_add(&rotated, &translate, ijk);
  _ijk_normalize(ijk);

  if substrate && ijk.i + ijk.j + ijk.k == max_dim {
    return Overage::FaceEdge;
  }
  Overage::NewFace
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fijk(face: i32, i: i32, j: i32, k: i32) -> FaceIJK {
    FaceIJK {
      face,
      coord: CoordIJK { i, j, k },
    }
  }

  #[test]
  fn test_face_neighbors_are_symmetric() {
    for (face, row) in FACE_NEIGHBORS.iter().enumerate() {
      assert_eq!(row[0].face, face as i32, "central entry of face {face}");
      for orient in &row[1..] {
        let back = &FACE_NEIGHBORS[orient.face as usize];
        assert!(
          back[1..].iter().any(|o| o.face == face as i32),
          "face {} does not list face {face} as a neighbor",
          orient.face
        );
      }
    }
  }

  #[test]
  fn test_adjust_overage_class_ii_noop() {
    let mut addr = fijk(1, 2, 0, 0);
    assert_eq!(_adjust_overage_class_ii(&mut addr, 0, false, false), Overage::NoOverage);
    assert_eq!(addr, fijk(1, 2, 0, 0));
  }

  #[test]
  fn test_adjust_overage_class_ii_new_face() {
    // Beyond the IJ edge of face 0 at res 0 lands on face 4.
    let mut addr = fijk(0, 2, 1, 0);
    assert_eq!(_adjust_overage_class_ii(&mut addr, 0, false, false), Overage::NewFace);
    assert_eq!(addr.face, 4);
    let sum = addr.coord.i + addr.coord.j + addr.coord.k;
    assert!(sum <= 2, "coordinates {:?} should be on the new face", addr.coord);
  }

  #[test]
  fn test_adjust_overage_ki_quadrant() {
    // The overage traced for the res 1 IK child of pentagon base cell 4.
    let mut addr = fijk(0, 15, 0, 3);
    assert_eq!(_adjust_overage_class_ii(&mut addr, 2, false, false), Overage::NewFace);
    assert_eq!(addr, fijk(1, 12, 0, 1));
  }

  #[test]
  fn test_adjust_overage_pent_leading_4() {
    // Same start, rotated about the (14,0,0) corner before crossing.
    let mut addr = fijk(0, 15, 0, 3);
    assert_eq!(_adjust_overage_class_ii(&mut addr, 2, true, false), Overage::NewFace);
    assert_eq!(addr, fijk(1, 13, 2, 0));
  }

  #[test]
  fn test_adjust_overage_substrate_face_edge() {
    // On the substrate grid the res 0 face edge sits at a coordinate sum of 6.
    let mut addr = fijk(1, 6, 0, 0);
    assert_eq!(_adjust_overage_class_ii(&mut addr, 0, false, true), Overage::FaceEdge);
    assert_eq!(addr, fijk(1, 6, 0, 0));

    let mut addr = fijk(1, 4, 1, 0);
    assert_eq!(_adjust_overage_class_ii(&mut addr, 0, false, true), Overage::NoOverage);
  }
}
