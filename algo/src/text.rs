//! Plain-text worlds: rows of `0` and `1`, top row first.
//!
//! Line breaks are ignored, so the file is really one run of characters: the
//! i-th character is cell `i`. A `1` is a live cell and anything else a dead
//! one. The side length is the integer square root of the number of
//! characters; characters past `side * side` are dropped.

use itertools::Itertools;
use crate::error::ParseError;
use crate::export;
use crate::generation::MAX_SIDE;
use crate::pattern::Pattern;
use crate::rule::GAME_OF_LIFE;
use crate::universe::Universe;

pub fn read(src: impl AsRef<str>) -> Result<Pattern, ParseError> {
  let cells: Vec<char> = src.as_ref()
    .chars()
    .filter(|&c| c != '\r' && c != '\n')
    .collect();

  if cells.is_empty() {
    return Err(ParseError::EmptyPattern);
  }

  let side = isqrt(cells.len());
  if side > MAX_SIDE {
    return Err(ParseError::PatternTooLarge(side));
  }

  let seed = cells.iter()
    .take(side * side)
    .positions(|&c| c == '1')
    .collect();

  Ok(Pattern {
    seed,
    side,
    rule: GAME_OF_LIFE,
  })
}

/// Writes the current generation as one line of `0`/`1` per row.
pub fn write(univ: &Universe) -> String {
  let mut output = export::rows(univ)
    .map(|row| row.into_iter().map(|alive| if alive { '1' } else { '0' }).collect::<String>())
    .join("\n");
  output.push('\n');
  output
}

fn isqrt(n: usize) -> usize {
  let mut r = (n as f64).sqrt() as usize;
  while r * r > n {
    r -= 1;
  }
  while (r + 1) * (r + 1) <= n {
    r += 1;
  }
  r
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generation::Generation;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_read_glider() {
    let pattern = read("010\r\n001\r\n111\r\n").unwrap();
    assert_eq!(pattern.side, 3);
    assert_eq!(pattern.seed.ones().collect::<Vec<_>>(), vec![1, 5, 6, 7, 8]);
    assert_eq!(pattern.rule, GAME_OF_LIFE);
  }

  #[test]
  fn test_first_character_is_lowest_bit() {
    let pattern = read("1101").unwrap();
    assert_eq!(pattern.side, 2);
    assert_eq!(pattern.seed, Generation::from(0b1011u64));
  }

  #[test]
  fn test_extra_characters_are_dropped() {
    // 11 characters: a 3x3 world, the last two are ignored
    let pattern = read("000\n010\n000\n11").unwrap();
    assert_eq!(pattern.side, 3);
    assert_eq!(pattern.seed.ones().collect::<Vec<_>>(), vec![4]);
  }

  #[test]
  fn test_other_characters_are_dead() {
    let pattern = read(".#1\n1x.\n  1").unwrap();
    assert_eq!(pattern.seed.ones().collect::<Vec<_>>(), vec![2, 3, 8]);
  }

  #[test]
  fn test_read_errors() {
    assert_eq!(read("\r\n\n"), Err(ParseError::EmptyPattern));
    assert_eq!(read("0".repeat(51 * 51)), Err(ParseError::PatternTooLarge(51)));
  }

  #[test]
  fn test_write() {
    let univ = read("010\n001\n111\n").unwrap().into_universe().unwrap();
    assert_eq!(write(&univ), "010\n001\n111\n");
  }

  #[test]
  fn test_isqrt() {
    assert_eq!(isqrt(1), 1);
    assert_eq!(isqrt(3), 1);
    assert_eq!(isqrt(4), 2);
    assert_eq!(isqrt(2499), 49);
    assert_eq!(isqrt(2500), 50);
  }
}
