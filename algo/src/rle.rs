use itertools::Itertools;
use regex::Regex;
use crate::error::ParseError;
use crate::export;
use crate::generation::{Generation, MAX_SIDE};
use crate::pattern::Pattern;
use crate::rule::GAME_OF_LIFE;
use crate::universe::Universe;

/// Read a Life pattern from a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
///
/// The world is a square with side `max(x, y)`; the pattern is placed at its
/// top left corner.
pub fn read(src: impl AsRef<str>) -> Result<Pattern, ParseError> {
  let header_re = Regex::new(
    r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)(?:\s*,\s*rule\s*=\s*(\S+))?"
  ).unwrap();

  let mut lines = src.as_ref()
    .lines()
    .enumerate()
    .map(|(i, line)| (i + 1, line.trim()))
    .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

  let (_, header) = lines.next().ok_or(ParseError::MissingHeader)?;
  let caps = header_re.captures(header).ok_or(ParseError::MissingHeader)?;
  let width: usize = caps[1].parse().map_err(|_| ParseError::MissingHeader)?;
  let height: usize = caps[2].parse().map_err(|_| ParseError::MissingHeader)?;
  let rule = match caps.get(3) {
    Some(rule) => rule.as_str().parse()?,
    None => GAME_OF_LIFE,
  };

  let side = width.max(height);
  if side == 0 {
    return Err(ParseError::EmptyPattern);
  }
  if side > MAX_SIDE {
    return Err(ParseError::PatternTooLarge(side));
  }

  let mut seed = Generation::empty();
  let mut x: usize = 0;
  let mut y: usize = 0;
  let mut num: Option<usize> = None;
  for (line_no, line) in lines {
    for c in line.chars() {
      match c {
        '0'..='9' => {
          let digit = c as usize - '0' as usize;
          num = Some(num.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        }
        'b' => {
          x = x.checked_add(num.take().unwrap_or(1))
            .ok_or(ParseError::CellOutOfBounds { row: y, col: x })?;
        }
        'o' => {
          for _ in 0..num.take().unwrap_or(1) {
            if x >= width || y >= height {
              return Err(ParseError::CellOutOfBounds { row: y, col: x });
            }
            seed.set(y * side + x);
            x += 1;
          }
        }
        '$' => {
          x = 0;
          y = y.checked_add(num.take().unwrap_or(1))
            .ok_or(ParseError::CellOutOfBounds { row: y, col: x })?;
        }
        '!' => {
          return Ok(Pattern { seed, side, rule });
        }
        c if c.is_whitespace() => {}
        c => {
          return Err(ParseError::UnexpectedChar { ch: c, line: line_no });
        }
      }
    }
  }

  Err(ParseError::UnexpectedEof)
}

/// Write the current generation to a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn write(univ: &Universe) -> String {
  let side = univ.side();
  let mut output = format!("x = {}, y = {}, rule = {}\n", side, side, univ.rule());

  // row ends not yet written; trailing empty rows are never written
  let mut num_next_rows = 0;
  for row in export::rows(univ) {
    let groups = row.into_iter().group_by(|&alive| alive);
    let mut runs: Vec<(RleUnit, usize)> = groups.into_iter()
      .map(|(alive, group)| {
        let unit = if alive { RleUnit::Alive } else { RleUnit::Dead };
        (unit, group.count())
      })
      .collect();

    if matches!(runs.last(), Some((RleUnit::Dead, _))) {
      runs.pop();
    }

    if runs.is_empty() {
      num_next_rows += 1;
      continue;
    }

    if num_next_rows > 0 {
      RleUnit::NextRow.write(num_next_rows, &mut output);
    }
    for (unit, num) in runs {
      unit.write(num, &mut output);
    }
    num_next_rows = 1;
  }

  output.push('!');
  output.push('\n');
  output
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
}

impl RleUnit {
  fn write(&self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    let line_start = s.rfind('\n').map_or(0, |i| i + 1);
    if s.len() - line_start + buf.len() > 70 {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rule::Rule;
  use pretty_assertions::assert_eq;

  #[test]
  fn read_glider() {
    let src = r"
#N Glider
#C comment lines are skipped
x = 3, y = 3
bo$2bo$3o!
";

    let pattern = read(src).unwrap();
    assert_eq!(pattern.side, 3);
    assert_eq!(pattern.rule, GAME_OF_LIFE);
    assert_eq!(pattern.seed.ones().collect::<Vec<_>>(), vec![1, 5, 6, 7, 8]);
  }

  #[test]
  fn read_non_square() {
    let pattern = read("x = 4, y = 2, rule = B36/S23\n4o$o!").unwrap();
    assert_eq!(pattern.side, 4);
    assert_eq!(pattern.rule, "B36/S23".parse::<Rule>().unwrap());
    assert_eq!(pattern.seed.ones().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn read_multiline_body() {
    let pattern = read("x = 3, y = 3\nbo$\n2bo$3\no!").unwrap();
    assert_eq!(pattern.seed.ones().collect::<Vec<_>>(), vec![1, 5, 6, 7, 8]);
  }

  #[test]
  fn read_errors() {
    assert_eq!(read(""), Err(ParseError::MissingHeader));
    assert_eq!(read("bo$2bo$3o!"), Err(ParseError::MissingHeader));
    assert_eq!(read("x = 3, y = 3, rule = 23/3\no!"),
      Err(ParseError::InvalidRule("23/3".to_owned())));
    assert_eq!(read("x = 3, y = 3\nbo$2bo$3o"), Err(ParseError::UnexpectedEof));
    assert_eq!(read("x = 3, y = 3\nbo$\n2bq!"),
      Err(ParseError::UnexpectedChar { ch: 'q', line: 3 }));
    assert_eq!(read("x = 3, y = 3\n4o!"),
      Err(ParseError::CellOutOfBounds { row: 0, col: 3 }));
    // run counts saturate; adding one to an offset that is already past the
    // start must fail instead of wrapping
    assert_eq!(read("x = 3, y = 3\nb99999999999999999999999b!"),
      Err(ParseError::CellOutOfBounds { row: 0, col: 1 }));
    assert_eq!(read("x = 3, y = 3\n$99999999999999999999999$o!"),
      Err(ParseError::CellOutOfBounds { row: 1, col: 0 }));
    assert_eq!(read("x = 51, y = 1\no!"), Err(ParseError::PatternTooLarge(51)));
    assert_eq!(read("x = 0, y = 0\n!"), Err(ParseError::EmptyPattern));
  }

  #[test]
  fn write_glider() {
    let univ = read("x = 3, y = 3\nbo$2bo$3o!").unwrap().into_universe().unwrap();
    assert_eq!(write(&univ), "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n");
  }

  #[test]
  fn write_skips_empty_rows() {
    let univ = Universe::new(vec![6, 7, 18].into_iter().collect(), 5).unwrap();
    assert_eq!(write(&univ), "x = 5, y = 5, rule = B3/S23\n$b2o2$3bo!\n");

    let empty = Universe::new(Generation::empty(), 5).unwrap();
    assert_eq!(write(&empty), "x = 5, y = 5, rule = B3/S23\n!\n");
  }

  #[test]
  fn write_wraps_long_lines() {
    let checkerboard = (0..50 * 50).filter(|i| (i / 50 + i % 50) % 2 == 0).collect();
    let univ = Universe::new(checkerboard, 50).unwrap();
    let output = write(&univ);
    assert!(output.lines().all(|line| line.len() <= 70));
    assert_eq!(read(&output).unwrap().seed, *univ.state());
  }
}
