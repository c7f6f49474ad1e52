//! Errors raised by the engine and by the pattern readers.

use thiserror::Error;
use crate::generation::{CAPACITY, MAX_SIDE};

/// Errors raised when constructing a [`Universe`](crate::universe::Universe).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid grid size {0}: side length must be between 1 and {}", MAX_SIDE)]
  InvalidGridSize(i64),
}

/// Errors raised while reading seeds, rules and pattern files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("seed {0:?} is not a non-negative decimal number")]
  InvalidSeed(String),
  #[error("seed does not fit in {} bits", CAPACITY)]
  SeedOverflow,
  #[error("invalid rule {0:?}, expected something like B3/S23")]
  InvalidRule(String),
  #[error("missing or malformed RLE header line")]
  MissingHeader,
  #[error("unexpected character {ch:?} on line {line}")]
  UnexpectedChar {
    ch: char,
    line: usize,
  },
  #[error("cell at row {row}, column {col} lies outside the pattern")]
  CellOutOfBounds {
    row: usize,
    col: usize,
  },
  #[error("pattern ended before the closing '!'")]
  UnexpectedEof,
  #[error("pattern side {0} exceeds the maximum of {}", MAX_SIDE)]
  PatternTooLarge(usize),
  #[error("pattern contains no cells")]
  EmptyPattern,
}
