use std::{
  ffi::CStr,
  io::{self, Write},
  ptr,
};

pub const GREETING_PREFIX: &[u8] = b"Hello from C, ";
pub const GREETING_SUFFIX: &[u8] = b"!\n";

/// The greeting bytes for `name`. Non-UTF-8 names are copied as is.
pub fn greeting(name: &CStr) -> Vec<u8> {
  let name = name.to_bytes();
  let mut line = Vec::with_capacity(GREETING_PREFIX.len() + name.len() + GREETING_SUFFIX.len());
  line.extend_from_slice(GREETING_PREFIX);
  line.extend_from_slice(name);
  line.extend_from_slice(GREETING_SUFFIX);
  line
}

pub fn write_hello<W: Write>(out: &mut W, name: &CStr) -> io::Result<()> {
  out.write_all(&greeting(name))?;
  out.flush()
}

/// Greets on stdout. The lock is held for the whole line.
///
/// Anything the host has buffered in C stdio is flushed first so the greeting
/// lands after it.
pub fn hello(name: &CStr) -> io::Result<()> {
  flush_host_stdio()?;
  let stdout = io::stdout();
  let mut out = stdout.lock();
  write_hello(&mut out, name)
}

fn flush_host_stdio() -> io::Result<()> {
  if unsafe { libc::fflush(ptr::null_mut()) } != 0 {
    return Err(io::Error::last_os_error());
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn greets_world() {
    let mut out = Vec::new();
    write_hello(&mut out, c"World").unwrap();
    assert_eq!(out, b"Hello from C, World!\n");
  }

  #[test]
  fn empty_name() {
    assert_eq!(greeting(c""), b"Hello from C, !\n");
  }

  #[test]
  fn non_utf8_name_is_verbatim() {
    let name = CStr::from_bytes_with_nul(b"caf\xe9\0").unwrap();
    assert_eq!(greeting(name), b"Hello from C, caf\xe9!\n");
  }

  struct Broken;

  impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn write_errors_propagate() {
    let err = write_hello(&mut Broken, c"World").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
  }
}
