//! Value tokens and magnitudes: the `NUMBER[UNIT]` grammar.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `1.5rem` as Dimension beats `1.5` as Number)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures `10px` matches [`Token::Dimension`] as a single
//! token rather than `Number` followed by stray text.

use logos::Logos;
use std::fmt;

use crate::error::FluidError;

/// Token produced by lexing a single value or viewport token.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Dimension: number with unit suffix like `10px`, `1.5rem`, `-10%`, `.5em`.
    #[regex(r"[-+]?([0-9]+(\.[0-9]*)?|\.[0-9]+)(%|[a-zA-Z]+)")]
    Dimension,

    /// Number: integer or float, possibly signed, no unit.
    #[regex(r"[-+]?([0-9]+(\.[0-9]*)?|\.[0-9]+)")]
    Number,
}

/// A parsed scalar with a unit label, e.g. `10px`, `1.5rem`, `42`.
///
/// An empty unit means unitless/unspecified; the reconciler's fallback
/// rules fill it in before any arithmetic happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnitude {
    pub value: f64,
    pub unit: String,
}

impl Magnitude {
    /// Create a magnitude from a value and a unit label.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Parse a token like `"100px"`, `"10"` or `"1.5rem"`.
    ///
    /// The maximal leading numeric substring becomes the value and the
    /// trailing rest the unit label (empty when nothing remains). Fails
    /// when the token has no leading number or carries anything beyond
    /// the unit suffix.
    pub fn parse(token: &str) -> Result<Self, FluidError> {
        let token = token.trim();
        let parse_err = || FluidError::Parse {
            token: token.to_string(),
        };

        let mut lexer = Token::lexer(token);
        let kind = match lexer.next() {
            Some(Ok(kind)) => kind,
            _ => return Err(parse_err()),
        };
        // The single token must cover the whole input.
        if lexer.span() != (0..token.len()) {
            return Err(parse_err());
        }

        match kind {
            Token::Number => {
                let value = token.parse().map_err(|_| parse_err())?;
                Ok(Self::new(value, ""))
            }
            Token::Dimension => {
                let (num_str, unit_str) = split_dimension(token).ok_or_else(parse_err)?;
                let value = num_str.parse().map_err(|_| parse_err())?;
                Ok(Self::new(value, unit_str))
            }
        }
    }

    /// `true` once a unit label has been assigned.
    pub fn has_unit(&self) -> bool {
        !self.unit.is_empty()
    }
}

impl fmt::Display for Magnitude {
    /// Minimal CSS number formatting: integral values print without a
    /// fractional part (`10px`, never `10.0px`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0.0 {
            write!(f, "{}{}", self.value as i64, self.unit)
        } else {
            write!(f, "{}{}", self.value, self.unit)
        }
    }
}

/// Split a dimension token into its numeric prefix and unit suffix.
fn split_dimension(s: &str) -> Option<(&str, &str)> {
    let unit_start = s
        .char_indices()
        .find(|(i, c)| {
            !c.is_ascii_digit() && *c != '.' && !((*c == '-' || *c == '+') && *i == 0)
        })
        .map(|(i, _)| i)?;

    if unit_start == 0 || unit_start >= s.len() {
        return None;
    }

    Some((&s[..unit_start], &s[unit_start..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        let m = Magnitude::parse("100px").unwrap();
        assert_eq!(m, Magnitude::new(100.0, "px"));
    }

    #[test]
    fn test_parse_float_dimension() {
        let m = Magnitude::parse("1.5rem").unwrap();
        assert_eq!(m, Magnitude::new(1.5, "rem"));
    }

    #[test]
    fn test_parse_bare_number() {
        let m = Magnitude::parse("10").unwrap();
        assert_eq!(m.value, 10.0);
        assert!(!m.has_unit());
    }

    #[test]
    fn test_parse_negative() {
        let m = Magnitude::parse("-10%").unwrap();
        assert_eq!(m, Magnitude::new(-10.0, "%"));
    }

    #[test]
    fn test_parse_leading_dot() {
        let m = Magnitude::parse(".5em").unwrap();
        assert_eq!(m, Magnitude::new(0.5, "em"));
    }

    #[test]
    fn test_parse_explicit_plus() {
        let m = Magnitude::parse("+2pt").unwrap();
        assert_eq!(m, Magnitude::new(2.0, "pt"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let m = Magnitude::parse("  320px ").unwrap();
        assert_eq!(m, Magnitude::new(320.0, "px"));
    }

    #[test]
    fn test_parse_no_number_fails() {
        assert!(matches!(
            Magnitude::parse("px"),
            Err(FluidError::Parse { .. })
        ));
        assert!(matches!(Magnitude::parse(""), Err(FluidError::Parse { .. })));
    }

    #[test]
    fn test_parse_trailing_junk_fails() {
        assert!(matches!(
            Magnitude::parse("10px 20px"),
            Err(FluidError::Parse { .. })
        ));
    }

    #[test]
    fn test_display_integral() {
        assert_eq!(Magnitude::new(10.0, "px").to_string(), "10px");
        assert_eq!(Magnitude::new(-140.0, "px").to_string(), "-140px");
    }

    #[test]
    fn test_display_fractional() {
        assert_eq!(Magnitude::new(12.79, "vw").to_string(), "12.79vw");
        assert_eq!(Magnitude::new(-30.91, "px").to_string(), "-30.91px");
    }

    #[test]
    fn test_display_unitless() {
        assert_eq!(Magnitude::new(42.0, "").to_string(), "42");
    }

    #[test]
    fn test_split_dimension() {
        assert_eq!(split_dimension("10px"), Some(("10", "px")));
        assert_eq!(split_dimension("-1.5rem"), Some(("-1.5", "rem")));
        assert_eq!(split_dimension("50%"), Some(("50", "%")));
        assert_eq!(split_dimension("10"), None);
    }
}
