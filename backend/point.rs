use std::fmt;

/// A 2D coordinate shared with C as `struct { int32_t x; int32_t y; }`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

impl Point {
  pub const fn new(x: i32, y: i32) -> Self {
    Point { x, y }
  }

  /// Moves the point in place, wrapping on overflow.
  pub fn translate(&mut self, dx: i32, dy: i32) {
    self.x = self.x.wrapping_add(dx);
    self.y = self.y.wrapping_add(dy);
  }

  pub fn translated(mut self, dx: i32, dy: i32) -> Self {
    self.translate(dx, dy);
    self
  }
}

impl From<(i32, i32)> for Point {
  fn from((x, y): (i32, i32)) -> Self {
    Point { x, y }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
