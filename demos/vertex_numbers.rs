use xs_h3_vertex::{
  direction_for_vertex_num, get_base_cell_number, get_resolution, is_pentagon, vertex_num_for_direction,
  vertex_rotations, Direction, H3Error, H3Index,
};

fn print_cell(cell: H3Index) -> Result<(), H3Error> {
  let shape = if is_pentagon(cell) { "pentagon" } else { "hexagon" };
  println!(
    "Cell {:x}: res {}, base cell {}, {}",
    cell,
    get_resolution(cell),
    get_base_cell_number(cell),
    shape
  );
  println!("  CCW vertex rotations: {}", vertex_rotations(cell)?);

  for dir in Direction::NEIGHBORS {
    match vertex_num_for_direction(cell, dir) {
      Ok(vertex) => {
        let back = direction_for_vertex_num(cell, vertex)?;
        println!("  {:?} -> vertex {} -> {:?}", dir, vertex, back);
      }
      // The K axis of a pentagon has no neighbor.
      Err(H3Error::Domain) => println!("  {:?} -> no vertex (deleted axis)", dir),
      Err(e) => return Err(e),
    }
  }
  Ok(())
}

fn main() -> Result<(), H3Error> {
  println!("--- H3 Vertex Numbering Example ---");

  // A res 2 hexagon on base cell 30.
  print_cell(H3Index(0x823d6ffffffffff))?;

  // The res 2 center pentagon of base cell 24.
  print_cell(H3Index(0x823007fffffffff))?;

  // A res 3 descendant of pentagon base cell 4 whose center crosses onto
  // the face of its deleted IK subsequence.
  print_cell(H3Index(0x8308ccfffffffff))?;

  Ok(())
}
