use crate::universe::*;

/// Calls `f(row, col)` for every live cell, in row-major order.
pub fn write_cells(
  univ: &Universe,
  mut f: impl FnMut(usize, usize),
) {
  let side = univ.side();
  for index in univ.state().ones() {
    f(index / side, index % side)
  }
}

/// The world one row at a time, top row first; `true` is a live cell.
pub fn rows(univ: &Universe) -> impl Iterator<Item = Vec<bool>> + '_ {
  let side = univ.side();
  (0..side).map(move |row| {
    (0..side).map(|col| univ.cell(row * side + col) == 1).collect()
  })
}
