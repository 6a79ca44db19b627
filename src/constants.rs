//! H3 core library constants.

// H3 grid system constants

/// Maximum H3 resolution; H3 has 16 resolutions, numbered 0 through 15.
pub const MAX_H3_RES: i32 = 15;
/// The number of faces on an icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// The number of H3 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// The number of vertices in a hexagon.
pub const NUM_HEX_VERTS: u8 = 6;
/// The number of vertices in a pentagon (topologically).
pub const NUM_PENT_VERTS: u8 = 5;
/// The most icosahedron faces any single base cell touches.
pub const MAX_BASE_CELL_FACES: usize = 5;

// H3 index bit layout

/// The bit offset of the mode in an H3 index.
pub const H3_MODE_OFFSET: u8 = 59;
/// The bit offset of the resolution in an H3 index.
pub const H3_RES_OFFSET: u8 = 52;
/// The bit offset of the base cell in an H3 index.
pub const H3_BC_OFFSET: u8 = 45;
/// The number of bits in a single H3 resolution digit.
pub const H3_PER_DIGIT_OFFSET: u8 = 3;

/// 1 in the highest bit, 0's everywhere else.
pub const H3_HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 1's in the 4 mode bits, 0's everywhere else.
pub const H3_MODE_MASK: u64 = 0b1111u64 << H3_MODE_OFFSET;
/// 1's in the 4 resolution bits, 0's everywhere else.
pub const H3_RES_MASK: u64 = 0b1111u64 << H3_RES_OFFSET;
/// 1's in the 7 base cell bits, 0's everywhere else.
pub const H3_BC_MASK: u64 = 0b111_1111u64 << H3_BC_OFFSET;
/// 1's in the 3 bits of a single H3 digit.
pub const H3_DIGIT_MASK: u64 = 0b111u64;

/// Mode for H3 cell indexes.
pub const H3_CELL_MODE: u8 = 1;

/// H3 index with mode 0, res 0, base cell 0, and 7 for all index digits.
/// Used as the starting pattern when building a cell index.
pub const H3_INIT: u64 = 0x0000_1fff_ffff_ffff;
