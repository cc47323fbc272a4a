//! Native primitives with a flat C calling convention.
//!
//! The exported symbols are `add`, `print_hello` and `move_point`. `build.rs`
//! writes their declarations, along with the layout of [`Point`], to
//! `lib/primops.h`. Each symbol delegates to a safe function in one of the
//! modules below.

use std::ffi::CStr;

use libc::c_char;
use log::{trace, warn};

pub mod arith;
pub mod config;
pub mod error;
pub mod greet;
pub mod point;

pub use config::Overflow;
pub use error::{Error, Result};
pub use point::Point;

/// `a + b` with two's complement wraparound.
#[unsafe(no_mangle)]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
  trace!("add({}, {})", a, b);
  arith::add(a, b)
}

/// Writes `Hello from C, {name}!` and a newline to stdout.
///
/// # Safety
///
/// `name` must be non-null and point to a nul-terminated string that stays
/// valid for the duration of the call. The string is not retained.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn print_hello(name: *const c_char) {
  let name = unsafe { CStr::from_ptr(name) };
  trace!("print_hello({:?})", name);
  if let Err(e) = greet::hello(name) {
    warn!("print_hello: {}", e);
  }
}

/// Adds `dx` and `dy` to the point's coordinates in place, wrapping on
/// overflow.
#[unsafe(no_mangle)]
pub extern "C" fn move_point(p: &mut Point, dx: i32, dy: i32) {
  trace!("move_point({}, {}, {})", p, dx, dy);
  p.translate(dx, dy);
}
