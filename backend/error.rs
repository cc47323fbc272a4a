use std::ffi::NulError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("{a} + {b} overflows a 32-bit signed integer")]
  Overflow { a: i32, b: i32 },

  #[error("name contains an interior nul byte")]
  InteriorNul(#[from] NulError),

  #[error("unknown overflow policy `{0}`, expected wrapping, saturating or checked")]
  UnknownOverflow(String),
}
