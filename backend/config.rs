use std::{fmt, str::FromStr};

use crate::error::Error;

/// What `add_with` does when a sum leaves the `i32` range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
  /// Two's complement wraparound. This is what the exported `add` does.
  #[default]
  Wrapping,
  Saturating,
  Checked,
}

impl FromStr for Overflow {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "wrapping" | "wrap" => Ok(Overflow::Wrapping),
      "saturating" | "saturate" => Ok(Overflow::Saturating),
      "checked" | "check" => Ok(Overflow::Checked),
      _ => Err(Error::UnknownOverflow(s.to_string())),
    }
  }
}

impl fmt::Display for Overflow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Overflow::Wrapping => "wrapping",
      Overflow::Saturating => "saturating",
      Overflow::Checked => "checked",
    };
    f.write_str(name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::rstest;

  #[rstest]
  #[case("wrapping", Overflow::Wrapping)]
  #[case("Saturating", Overflow::Saturating)]
  #[case(" CHECKED ", Overflow::Checked)]
  #[case("wrap", Overflow::Wrapping)]
  fn parses_policy(#[case] input: &str, #[case] expected: Overflow) {
    assert_eq!(input.parse::<Overflow>().unwrap(), expected);
  }

  #[test]
  fn rejects_unknown_policy() {
    let err = "modular".parse::<Overflow>().unwrap_err();
    assert!(matches!(err, Error::UnknownOverflow(ref s) if s == "modular"));
  }

  #[test]
  fn display_parses_back() {
    for policy in [Overflow::Wrapping, Overflow::Saturating, Overflow::Checked] {
      assert_eq!(policy.to_string().parse::<Overflow>().unwrap(), policy);
    }
  }
}
