use std::{ffi::CString, process::ExitCode};

use clap::{Parser, Subcommand};
use log::debug;
use primops::{Overflow, Point, arith};

/// Calls the exported primitives the way a foreign host would.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
  /// Overflow policy for `add`: wrapping, saturating or checked.
  #[arg(
    long,
    global = true,
    env = "PRIMOPS_OVERFLOW",
    default_value_t = Overflow::Wrapping
  )]
  overflow: Overflow,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Walk through all three primitives.
  Demo,
  /// Add two 32-bit integers.
  Add {
    #[arg(allow_negative_numbers = true)]
    a: i32,
    #[arg(allow_negative_numbers = true)]
    b: i32,
  },
  /// Print a greeting from the library.
  Hello { name: String },
  /// Move a point by an offset.
  Move {
    #[arg(allow_negative_numbers = true)]
    x: i32,
    #[arg(allow_negative_numbers = true)]
    y: i32,
    #[arg(allow_negative_numbers = true)]
    dx: i32,
    #[arg(allow_negative_numbers = true)]
    dy: i32,
  },
}

fn main() -> ExitCode {
  env_logger::init();
  let cli = Cli::parse();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("error: {}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> primops::Result<()> {
  debug!("overflow policy: {}", cli.overflow);

  match cli.command.unwrap_or(Command::Demo) {
    Command::Demo => demo(),
    Command::Add { a, b } => {
      let sum = match cli.overflow {
        Overflow::Wrapping => primops::add(a, b),
        overflow => arith::add_with(a, b, overflow)?,
      };
      println!("{}", sum);
      Ok(())
    }
    Command::Hello { name } => hello(&name),
    Command::Move { x, y, dx, dy } => {
      let mut p = Point::new(x, y);
      primops::move_point(&mut p, dx, dy);
      println!("{}", p);
      Ok(())
    }
  }
}

fn hello(name: &str) -> primops::Result<()> {
  let name = CString::new(name)?;
  unsafe { primops::print_hello(name.as_ptr()) };
  Ok(())
}

fn demo() -> primops::Result<()> {
  println!("--- primops: calling the C surface ---");

  let result = primops::add(10, 20);
  println!("1. add(10, 20) -> {}", result);

  println!("2. print_hello:");
  hello("Rustacean")?;

  let mut p = Point::new(1, 1);
  println!("3. Point before move: {:?}", p);
  primops::move_point(&mut p, 5, -2);
  println!("   Point after move: {:?}", p);

  Ok(())
}
