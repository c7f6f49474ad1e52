use algo::export;
use algo::universe::Universe;
use itertools::Itertools;
use std::io::{self, Write};

/// Clears the terminal and moves the cursor to the top left corner.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const ALIVE: &str = "██";
const DEAD: &str = "  ";

/// Draws the world in a box, two characters per cell.
pub fn frame(uni: &Universe) -> String {
  let spacer = "─".repeat(uni.side() * 2);

  let rows = export::rows(uni)
    .map(|row| {
      let cells = row.into_iter().map(|alive| if alive { ALIVE } else { DEAD }).join("");
      format!("|{}|", cells)
    })
    .join("\n");

  format!("┌{0}┐\n{1}\n└{0}┘", spacer, rows)
}

/// Replaces the terminal contents with the frame of `uni`.
pub fn draw(out: &mut impl Write, uni: &Universe) -> io::Result<()> {
  write!(out, "{}", CLEAR_SCREEN)?;
  writeln!(out, "{}", frame(uni))?;
  out.flush()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_frame() {
    let uni = Universe::new("56".parse().unwrap(), 3).unwrap();
    assert_eq!(frame(&uni), "\
┌──────┐
|      |
|██████|
|      |
└──────┘");
  }

  #[test]
  fn test_draw() {
    let uni = Universe::new("1".parse().unwrap(), 1).unwrap();
    let mut out = Vec::new();
    draw(&mut out, &uni).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\x1b[2J\x1b[H┌──┐\n|██|\n└──┘\n");
  }

  /// Accepts writes but fails to flush them.
  struct Closed;

  impl Write for Closed {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
  }

  #[test]
  fn test_draw_reports_write_errors() {
    let uni = Universe::new("1".parse().unwrap(), 1).unwrap();
    let err = draw(&mut Closed, &uni).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
  }

  #[test]
  fn test_frame_single_cell() {
    let uni = Universe::new("1".parse().unwrap(), 1).unwrap();
    assert_eq!(frame(&uni), "┌──┐\n|██|\n└──┘");
  }
}
