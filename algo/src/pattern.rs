use crate::error::Error;
use crate::generation::Generation;
use crate::rule::Rule;
use crate::universe::Universe;

/// A world read from a pattern file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
  pub seed: Generation,
  pub side: usize,
  pub rule: Rule,
}

impl Pattern {
  pub fn into_universe(self) -> Result<Universe, Error> {
    Universe::with_rule(self.seed, self.side as i64, self.rule)
  }
}
