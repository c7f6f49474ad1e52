use bitlife::cli::{self, Command, Config};
use bitlife::render;
use std::env;
use std::io;
use std::process;
use std::thread;

fn main() {
  let mut args = env::args();
  let program = args.next().unwrap_or_else(|| "bitlife".to_owned());

  let config = match cli::parse_args(args) {
    Ok(Command::Run(config)) => config,
    Ok(Command::Help) => {
      println!("{}", cli::usage(&program));
      return;
    }
    Err(err) => exit_with(&program, err),
  };

  if let Err(err) = run(&config) {
    exit_with(&program, err);
  }
}

fn run(config: &Config) -> Result<(), cli::Error> {
  let mut uni = config.load()?;

  let within_limit = |generation: usize| config.generations.map_or(true, |limit| generation < limit);

  while !uni.is_stable() && within_limit(uni.generation()) {
    render::draw(&mut io::stdout(), &uni).map_err(cli::Error::Terminal)?;

    uni.advance();

    thread::sleep(config.delay);
  }

  if uni.is_stable() {
    println!("World is stable.");
  } else {
    println!("Stopped after {} generations.", uni.generation());
  }

  config.save(&uni)
}

fn exit_with(program: &str, err: cli::Error) -> ! {
  eprintln!("Error: {}", err);
  if err.is_usage() {
    println!("{}", cli::usage(program));
  }
  process::exit(1)
}
