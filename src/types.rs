//! Core H3 data structures.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents an H3 cell index.
/// This is a 64-bit unsigned integer.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// Invalid H3 index, often used to signify missing data.
pub const H3_NULL: H3Index = H3Index(0);

impl fmt::LowerHex for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

/// Represents an H3 error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[allow(clippy::enum_variant_names)]
pub enum H3Error {
  /// The operation failed but a more specific error is not available.
  Failed = 1,
  /// Argument was outside of acceptable range.
  Domain = 2,
  /// Resolution argument was outside of acceptable range.
  ResDomain = 4,
  /// `H3Index` cell argument was not valid.
  CellInvalid = 5,
}

impl fmt::Display for H3Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      H3Error::Failed => "the operation failed",
      H3Error::Domain => "argument was outside of acceptable range",
      H3Error::ResDomain => "resolution argument was outside of acceptable range",
      H3Error::CellInvalid => "cell argument was not valid",
    };
    write!(f, "{msg} (code {})", *self as u32)
  }
}

impl std::error::Error for H3Error {}

/// IJK hexagon coordinates. Each axis is spaced 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

/// Face number and IJK coordinates on that face-centered coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Icosahedron face number (0-19).
  pub face: i32,
  /// IJK coordinates on that face.
  pub coord: CoordIJK,
}

/// Number of H3 digit values, including the center digit (0-6).
pub const NUM_DIGITS: usize = 7;

/// H3 digit representing IJK+ axes direction (0-6), or invalid (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// H3 digit in center.
  #[default]
  Center = 0,
  /// H3 digit in k-axes direction.
  KAxes = 1,
  /// H3 digit in j-axes direction.
  JAxes = 2,
  /// H3 digit in j == k direction.
  JkAxes = 3,
  /// H3 digit in i-axes direction.
  IAxes = 4,
  /// H3 digit in i == k direction.
  IkAxes = 5,
  /// H3 digit in i == j direction.
  IjAxes = 6,
  /// H3 digit in the invalid direction.
  InvalidDigit = 7,
}

impl Direction {
  /// The six neighbor directions, in digit order.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];
}

impl TryFrom<u8> for Direction {
  type Error = H3Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Direction::Center),
      1 => Ok(Direction::KAxes),
      2 => Ok(Direction::JAxes),
      3 => Ok(Direction::JkAxes),
      4 => Ok(Direction::IAxes),
      5 => Ok(Direction::IkAxes),
      6 => Ok(Direction::IjAxes),
      7 => Ok(Direction::InvalidDigit),
      _ => Err(H3Error::Domain),
    }
  }
}
