// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use xs_h3_vertex::*;

#[test]
fn test_h3index_serde() {
  let h = H3Index(0x823d6ffffffffff);
  let serialized = serde_json::to_string(&h).unwrap();
  // repr(transparent) over u64, so it serializes as the bare integer.
  assert_eq!(serialized, "586548771488268287");
  let deserialized: H3Index = serde_json::from_str(&serialized).unwrap();
  assert_eq!(h, deserialized);

  let ser_null = serde_json::to_string(&H3_NULL).unwrap();
  assert_eq!(ser_null, "0");
}

#[test]
fn test_direction_serde() {
  let serialized = serde_json::to_string(&Direction::IkAxes).unwrap();
  assert_eq!(serialized, "5");
  let deserialized: Direction = serde_json::from_str("3").unwrap();
  assert_eq!(deserialized, Direction::JkAxes);
  assert!(serde_json::from_str::<Direction>("8").is_err());
}

#[test]
fn test_h3error_serde() {
  let err = H3Error::Domain;
  let serialized = serde_json::to_string(&err).unwrap();
  assert_eq!(serialized, "2");
  let deserialized: H3Error = serde_json::from_str(&serialized).unwrap();
  assert_eq!(err, deserialized);
}

#[test]
fn test_face_ijk_serde() {
  let fijk = FaceIJK {
    face: 1,
    coord: CoordIJK { i: 5, j: 0, k: 2 },
  };
  let serialized = serde_json::to_string(&fijk).unwrap();
  assert_eq!(serialized, r#"{"face":1,"coord":{"i":5,"j":0,"k":2}}"#);
  let deserialized: FaceIJK = serde_json::from_str(&serialized).unwrap();
  assert_eq!(fijk, deserialized);
}
