use indexmap::IndexSet;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use crate::error::Error;
use crate::generation::*;
use crate::rule::*;

/// A square world of `side * side` cells with hard edges.
///
/// Every generation the world has been in is kept, so that a repeat of any
/// earlier generation, not only the previous one, ends the simulation.
#[derive(Clone, Debug)]
pub struct Universe {
  side: usize,
  state: Generation,
  /// Distinct generations in the order they were reached, starting with the
  /// seed.
  history: IndexSet<Generation, BuildHasherDefault<FxHasher>>,
  rule: Rule,
  stable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  Running,
  /// The last advance produced a generation that was already in the history.
  /// Terminal.
  Stable,
}

impl Universe {
  /// Creates a Game of Life world. `side` must be in `1..=MAX_SIDE`.
  ///
  /// Bits of `seed` at index `side * side` and above do not belong to any
  /// cell and are cleared.
  pub fn new(seed: Generation, side: i64) -> Result<Self, Error> {
    Self::with_rule(seed, side, GAME_OF_LIFE)
  }

  pub fn with_rule(mut seed: Generation, side: i64, rule: Rule) -> Result<Self, Error> {
    if side < 1 || side > MAX_SIDE as i64 {
      return Err(Error::InvalidGridSize(side));
    }

    let side = side as usize;
    seed.truncate(side * side);

    let mut history = IndexSet::default();
    history.insert(seed);

    Ok(Self {
      side,
      state: seed,
      history,
      rule,
      stable: false,
    })
  }

  pub fn side(&self) -> usize {
    self.side
  }

  /// Number of cells.
  pub fn len(&self) -> usize {
    self.side * self.side
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  pub fn state(&self) -> &Generation {
    &self.state
  }

  pub fn is_stable(&self) -> bool {
    self.stable
  }

  pub fn status(&self) -> Status {
    if self.stable {
      Status::Stable
    } else {
      Status::Running
    }
  }

  /// Number of transitions accepted since the seed.
  pub fn generation(&self) -> usize {
    self.history.len() - 1
  }

  pub fn history(&self) -> impl ExactSizeIterator<Item = &Generation> + '_ {
    self.history.iter()
  }

  pub fn population(&self) -> usize {
    self.state.population()
  }

  /// State of cell `index` (row-major, 0 is the top left cell): 1 if alive,
  /// 0 if dead. Indices outside the world read as 0.
  pub fn cell(&self, index: usize) -> u8 {
    self.state.get(index)
  }

  /// Number of live cells among the up to 8 cells adjacent to `index`.
  /// Neighbors past an edge do not exist; nothing wraps around.
  ///
  /// `index` must be a cell of this world.
  pub fn count_neighbors(&self, index: usize) -> u8 {
    debug_assert!(index < self.len(), "cell {} outside a world of {} cells", index, self.len());
    let n = self.side;

    let first_col = index % n == 0;
    let last_col = (index + 1) % n == 0;
    let first_row = index < n;
    let last_row = index >= n * n - n;

    let mut count = 0;

    if !first_col {
      count += self.cell(index - 1);
    }
    if !last_col {
      count += self.cell(index + 1);
    }

    if !first_row {
      count += self.cell(index - n);
      if !first_col {
        count += self.cell(index - n - 1);
      }
      if !last_col {
        count += self.cell(index - n + 1);
      }
    }

    if !last_row {
      count += self.cell(index + n);
      if !first_col {
        count += self.cell(index + n - 1);
      }
      if !last_col {
        count += self.cell(index + n + 1);
      }
    }

    count
  }

  /// Computes the next generation. If it was seen before, the world becomes
  /// stable and keeps its current state; otherwise it becomes the current
  /// state. Does nothing once stable.
  pub fn advance(&mut self) {
    if self.stable {
      return;
    }

    // every cell reads `self.state`; only `next` is written
    let mut next = self.state;
    for index in 0..self.len() {
      let alive = self.cell(index) == 1;
      let neighbors = self.count_neighbors(index);

      if alive && !self.rule.survives(neighbors) {
        next.clear(index);
      } else if !alive && self.rule.births(neighbors) {
        next.set(index);
      }
    }

    if self.history.contains(&next) {
      self.stable = true;
      return;
    }

    self.state = next;
    self.history.insert(next);
  }

  /// Advances at most `num_gen` times, stopping early once stable. Returns
  /// the number of generations actually reached.
  pub fn simulate(&mut self, num_gen: usize) -> usize {
    let start = self.generation();
    for _ in 0..num_gen {
      self.advance();
      if self.stable {
        break;
      }
    }
    self.generation() - start
  }
}
