//! Coordinate systems and transformations used to project H3 cells onto
//! icosahedron faces.

pub mod face_ijk;
pub mod ijk;
