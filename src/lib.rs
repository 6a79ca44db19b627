#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // Digit and base cell fields are narrow by construction
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // H3 indexes read better as raw hex
#![allow(clippy::similar_names)]
#![allow(clippy::wildcard_imports)]

//! `xs-h3-vertex` numbers the vertices of H3 cells.
//!
//! Vertex numbers are fixed relative to a base cell's home icosahedron face.
//! Cells that land on another face have their neighbor directions rotated
//! against those vertices; this crate resolves that rotation from a static
//! per-base-cell table and maps between neighbor directions and vertex
//! numbers for both hexagons and pentagons.

pub mod base_cells;
pub mod constants;
pub mod coords;
pub mod h3_index;
pub mod types;
pub mod vertex;

pub use base_cells::base_cell_to_cell;
pub use h3_index::{cell_from_digits, get_resolution};
pub use h3_index::inspection::{get_base_cell_number, is_pentagon};
pub use types::{CoordIJK, Direction, FaceIJK, H3Error, H3Index, H3_NULL};
pub use vertex::{
  direction_for_vertex_num, vertex_num_for_direction, vertex_rotations, vertex_rotations_on_face, BaseCellRotation,
  INVALID_FACE,
};
