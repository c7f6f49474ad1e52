pub mod error;
pub mod export;
pub mod generation;
pub mod pattern;
pub mod rle;
pub mod rule;
pub mod text;
pub mod universe;

pub use error::{Error, ParseError};
pub use generation::{Generation, CAPACITY, MAX_SIDE};
pub use pattern::Pattern;
pub use rule::{Rule, GAME_OF_LIFE};
pub use universe::{Status, Universe};
