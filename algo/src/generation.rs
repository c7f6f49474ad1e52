use std::fmt::{self, Debug, Display};
use std::iter::{self, FromIterator};
use std::str::FromStr;
use crate::error::ParseError;

/// Largest supported side length of a world.
pub const MAX_SIDE: usize = 50;

const WORDS: usize = (MAX_SIDE * MAX_SIDE + 63) / 64;

/// Number of bits a generation can hold.
pub const CAPACITY: usize = WORDS * 64;

/// 10^19, the largest power of ten that fits in a `u64`.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// The cells of a square world packed into one unsigned integer.
///
/// # Bit-cell correspondence
///
/// ```ignored
/// [0]       [1]         ... [N-1]
/// [N]       [N+1]       ... [2N-1]
/// ...
/// [N(N-1)]  [N(N-1)+1]  ... [N^2-1]
/// ```
///
/// I.e. bit 0 (the lowest bit of word 0) is the top left cell, and rows follow
/// each other. Read as a number, the bits form the decimal seed accepted on
/// the command line.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation {
  words: [u64; WORDS],
}

impl Generation {
  pub const fn empty() -> Self {
    Self { words: [0; WORDS] }
  }

  /// Returns 1 if bit `index` is set, 0 otherwise. Indices past
  /// [`CAPACITY`] read as 0.
  pub fn get(&self, index: usize) -> u8 {
    match self.words.get(index >> 6) {
      Some(word) => (word >> (index & 63) & 1) as u8,
      None => 0,
    }
  }

  /// # Panics
  ///
  /// Panics if `index >= CAPACITY`.
  pub fn set(&mut self, index: usize) {
    self.words[index >> 6] |= 1 << (index & 63);
  }

  /// # Panics
  ///
  /// Panics if `index >= CAPACITY`.
  pub fn clear(&mut self, index: usize) {
    self.words[index >> 6] &= !(1 << (index & 63));
  }

  /// # Panics
  ///
  /// Panics if `index >= CAPACITY`.
  pub fn toggle(&mut self, index: usize) {
    self.words[index >> 6] ^= 1 << (index & 63);
  }

  /// Clears every bit at index `len` and above.
  pub fn truncate(&mut self, len: usize) {
    if len >= CAPACITY {
      return;
    }

    let mut word = len >> 6;
    let bit = len & 63;
    if bit != 0 {
      self.words[word] &= (1 << bit) - 1;
      word += 1;
    }
    for w in &mut self.words[word..] {
      *w = 0;
    }
  }

  /// Number of set bits.
  pub fn population(&self) -> usize {
    self.words.iter().map(|w| w.count_ones() as usize).sum()
  }

  pub fn is_zero(&self) -> bool {
    self.words.iter().all(|&w| w == 0)
  }

  /// Index of the highest set bit plus one, or 0 for an empty generation.
  pub fn bit_len(&self) -> usize {
    match self.words.iter().rposition(|&w| w != 0) {
      Some(i) => i * 64 + 64 - self.words[i].leading_zeros() as usize,
      None => 0,
    }
  }

  /// Indices of the set bits in ascending order.
  pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
    self.words.iter().enumerate().flat_map(|(i, &word)| {
      let mut b = word;
      iter::from_fn(move || {
        if b == 0 {
          return None;
        }
        let bit = b.trailing_zeros() as usize;
        b &= b - 1;
        Some(i * 64 + bit)
      })
    })
  }

  /// `self = self * mul + add`, returning the carry out of the top word.
  fn mul_add(&mut self, mul: u64, add: u64) -> u64 {
    let mut carry = add as u128;
    for w in self.words.iter_mut() {
      let v = *w as u128 * mul as u128 + carry;
      *w = v as u64;
      carry = v >> 64;
    }
    carry as u64
  }

  /// `self = self / div`, returning the remainder.
  fn div_rem(&mut self, div: u64) -> u64 {
    let mut rem = 0u128;
    for w in self.words.iter_mut().rev() {
      let v = rem << 64 | *w as u128;
      *w = (v / div as u128) as u64;
      rem = v % div as u128;
    }
    rem as u64
  }
}

impl Default for Generation {
  fn default() -> Self {
    Self::empty()
  }
}

impl From<u64> for Generation {
  fn from(value: u64) -> Self {
    let mut g = Self::empty();
    g.words[0] = value;
    g
  }
}

impl From<u128> for Generation {
  fn from(value: u128) -> Self {
    let mut g = Self::empty();
    g.words[0] = value as u64;
    g.words[1] = (value >> 64) as u64;
    g
  }
}

/// Collects the indices of live cells.
///
/// # Panics
///
/// Panics if an index is `>= CAPACITY`.
impl FromIterator<usize> for Generation {
  fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
    let mut g = Self::empty();
    for index in iter {
      g.set(index);
    }
    g
  }
}

impl FromStr for Generation {
  type Err = ParseError;

  /// Parses a non-negative decimal number.
  fn from_str(s: &str) -> Result<Self, ParseError> {
    let digits = s.trim();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return Err(ParseError::InvalidSeed(s.to_owned()));
    }

    let mut g = Self::empty();
    for chunk in digits.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
      let value = chunk.iter().fold(0u64, |acc, &b| acc * 10 + (b - b'0') as u64);
      if g.mul_add(10u64.pow(chunk.len() as u32), value) != 0 {
        return Err(ParseError::SeedOverflow);
      }
    }
    Ok(g)
  }
}

impl Display for Generation {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut n = *self;
    let mut chunks = vec![];
    loop {
      chunks.push(n.div_rem(DECIMAL_CHUNK));
      if n.is_zero() {
        break;
      }
    }

    let mut chunks = chunks.into_iter().rev();
    if let Some(top) = chunks.next() {
      write!(f, "{}", top)?;
    }
    for chunk in chunks {
      write!(f, "{:019}", chunk)?;
    }
    Ok(())
  }
}

impl Debug for Generation {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Generation({})", self)
  }
}
