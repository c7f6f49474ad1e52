//! Command line options and the files they point at.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use algo::{rle, text, Generation, ParseError, Rule, Universe, GAME_OF_LIFE};
use bitlife_image::ImageError;
use thiserror::Error;

const DEFAULT_WORLD_SIZE: i64 = 3;
const DEFAULT_DELAY_MS: u64 = 500;
const DEFAULT_SCALE: u32 = 8;

#[derive(Debug, Error)]
pub enum Error {
  #[error("missing value for {0}")]
  MissingValue(String),
  #[error("invalid value {value:?} for {flag}")]
  InvalidValue {
    flag: String,
    value: String,
  },
  #[error("unknown argument {0:?}")]
  UnknownArgument(String),
  #[error("the seed must be a non-zero number")]
  ZeroSeed,
  #[error(transparent)]
  Parse(#[from] ParseError),
  #[error(transparent)]
  Universe(#[from] algo::Error),
  #[error("{}: {}", .path.display(), .source)]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error(transparent)]
  Image(#[from] ImageError),
  #[error("cannot write to the terminal: {0}")]
  Terminal(#[source] io::Error),
}

impl Error {
  /// Whether the usage text should be shown along with the error.
  pub fn is_usage(&self) -> bool {
    matches!(self,
      Error::MissingValue(_) | Error::InvalidValue { .. } |
      Error::UnknownArgument(_) | Error::ZeroSeed)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub seed: Generation,
  pub world_size: i64,
  pub rule: Rule,
  pub delay: Duration,
  /// Stop after this many generations even if the world is not stable.
  pub generations: Option<usize>,
  pub output: Option<PathBuf>,
  pub image: Option<PathBuf>,
  pub scale: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      seed: Generation::empty(),
      world_size: DEFAULT_WORLD_SIZE,
      rule: GAME_OF_LIFE,
      delay: Duration::from_millis(DEFAULT_DELAY_MS),
      generations: None,
      output: None,
      image: None,
      scale: DEFAULT_SCALE,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Run(Config),
  Help,
}

pub fn usage(program: &str) -> String {
  format!(
r"Conway's Game of life simulation
Usage:
    {0} [OPTIONS] ..

Command Line Arguments:
    -f, --file <file>          : Parse seed and world size from file. Files ending in .rle
                                 are read as RLE, anything else as rows of 0 and 1.
                                 Options after it override what the file sets
    -s, --seed <num>           : The initial value of the world, written as a decimal number
    -w, --world-size <num>     : Side length of the square world (Default {1})
    -r, --rule <rule>          : Birth/survival rule, e.g. B36/S23 (Default B3/S23)
    -d, --delay <ms>           : Pause between generations (Default {2})
    -g, --generations <num>    : Stop after this many generations
    -o, --output <file>        : Write the final generation, as RLE if the file ends in .rle
    -i, --image <file>         : Save the final generation as an image
    -x, --scale <num>          : Pixels per cell in the image (Default {3})
    -h, --help                 : Print this message

Example:
    {0} -f world.txt    : Parse seed and world size from 'world.txt'
    {0} -s 23 -w 4      : Creates a 4 x 4 world with the starting value of 23",
    program, DEFAULT_WORLD_SIZE, DEFAULT_DELAY_MS, DEFAULT_SCALE)
}

/// Parses the arguments following the program name.
///
/// Options apply in order and a later one wins. `--file` is read as soon as it
/// is seen and sets the seed, the world size and, for RLE, the rule.
pub fn parse_args<I>(args: I) -> Result<Command, Error>
where
  I: IntoIterator,
  I::Item: Into<String>,
{
  let mut config = Config::default();
  let mut args = args.into_iter().map(Into::<String>::into);

  while let Some(arg) = args.next() {
    let mut value = || args.next().ok_or_else(|| Error::MissingValue(arg.clone()));

    match arg.as_str() {
      "--seed" | "-s" => {
        let v = value()?;
        config.seed = v.parse().map_err(|_| invalid(&arg, &v))?;
      }
      "--world-size" | "-w" => {
        let v = value()?;
        config.world_size = v.parse().map_err(|_| invalid(&arg, &v))?;
      }
      "--file" | "-f" => {
        let path = PathBuf::from(value()?);
        let src = read_file(&path)?;
        let pattern = if is_rle(&path) {
          let pattern = rle::read(src)?;
          config.rule = pattern.rule;
          pattern
        } else {
          text::read(src)?
        };
        config.seed = pattern.seed;
        config.world_size = pattern.side as i64;
      }
      "--rule" | "-r" => {
        let v = value()?;
        config.rule = v.parse().map_err(|_| invalid(&arg, &v))?;
      }
      "--delay" | "-d" => {
        let v = value()?;
        config.delay = Duration::from_millis(v.parse().map_err(|_| invalid(&arg, &v))?);
      }
      "--generations" | "-g" => {
        let v = value()?;
        config.generations = Some(v.parse().map_err(|_| invalid(&arg, &v))?);
      }
      "--output" | "-o" => {
        config.output = Some(PathBuf::from(value()?));
      }
      "--image" | "-i" => {
        config.image = Some(PathBuf::from(value()?));
      }
      "--scale" | "-x" => {
        let v = value()?;
        config.scale = v.parse().map_err(|_| invalid(&arg, &v))?;
      }
      "--help" | "-h" => {
        return Ok(Command::Help);
      }
      _ => {
        return Err(Error::UnknownArgument(arg));
      }
    }
  }

  Ok(Command::Run(config))
}

fn invalid(flag: &str, value: &str) -> Error {
  Error::InvalidValue {
    flag: flag.to_owned(),
    value: value.to_owned(),
  }
}

fn is_rle(path: &Path) -> bool {
  path.extension()
    .and_then(OsStr::to_str)
    .map_or(false, |ext| ext.eq_ignore_ascii_case("rle"))
}

fn read_file(path: &Path) -> Result<String, Error> {
  fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_owned(), source })
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
  fs::write(path, contents).map_err(|source| Error::Io { path: path.to_owned(), source })
}

impl Config {
  /// Builds the world from the seed, world size and rule.
  pub fn load(&self) -> Result<Universe, Error> {
    if self.seed.is_zero() {
      return Err(Error::ZeroSeed);
    }

    Ok(Universe::with_rule(self.seed, self.world_size, self.rule)?)
  }

  /// Writes the requested output files for the final generation.
  pub fn save(&self, uni: &Universe) -> Result<(), Error> {
    if let Some(path) = &self.output {
      let contents = if is_rle(path) { rle::write(uni) } else { text::write(uni) };
      write_file(path, &contents)?;
    }
    if let Some(path) = &self.image {
      bitlife_image::save_image(uni, self.scale, path)?;
    }
    Ok(())
  }
}
