use crate::{
  config::Overflow,
  error::{Error, Result},
};

/// Wraparound addition, the policy of the exported `add` symbol.
pub fn add(a: i32, b: i32) -> i32 {
  a.wrapping_add(b)
}

pub fn add_with(a: i32, b: i32, overflow: Overflow) -> Result<i32> {
  match overflow {
    Overflow::Wrapping => Ok(a.wrapping_add(b)),
    Overflow::Saturating => Ok(a.saturating_add(b)),
    Overflow::Checked => a.checked_add(b).ok_or(Error::Overflow { a, b }),
  }
}
