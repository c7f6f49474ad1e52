use std::fmt::{self, Display};
use std::str::FromStr;
use regex::Regex;
use crate::error::ParseError;

/// Outer-totalistic rule: which neighbor counts give birth to a dead cell and
/// which let a live cell survive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

/// Bit `k` is set when `k` live neighbors trigger the transition.
pub(crate) type NeighborMask = u16;

/// B3/S23: a live cell with fewer than 2 or more than 3 neighbors dies, a dead
/// cell with exactly 3 neighbors is born.
pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  /// A rule under which every cell dies.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_birth(&mut self, num: u8) {
    assert!(num < 9);
    self.birth |= 1 << num;
  }

  pub fn set_survival(&mut self, num: u8) {
    assert!(num < 9);
    self.survival |= 1 << num;
  }

  pub fn births(&self, neighbors: u8) -> bool {
    self.birth >> neighbors & 1 != 0
  }

  pub fn survives(&self, neighbors: u8) -> bool {
    self.survival >> neighbors & 1 != 0
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}

impl FromStr for Rule {
  type Err = ParseError;

  /// Parses `B<digits>/S<digits>`, e.g. `B3/S23` or `b36/s23`.
  fn from_str(s: &str) -> Result<Self, ParseError> {
    let re = Regex::new(r"^(?i)B([0-8]*)/S([0-8]*)$").unwrap();
    let caps = re.captures(s.trim())
      .ok_or_else(|| ParseError::InvalidRule(s.to_owned()))?;

    let mut rule = Rule::new();
    for d in caps[1].bytes() {
      rule.set_birth(d - b'0');
    }
    for d in caps[2].bytes() {
      rule.set_survival(d - b'0');
    }
    Ok(rule)
  }
}
