//! Permissive input parsing.
//!
//! Loose input never rejects a request in this service; it falls back to the
//! caller's default. Keeping the fallback in one utility makes the coercion
//! auditable instead of scattering it through handlers and config.

use std::fmt::Display;
use std::str::FromStr;

/// Parse `raw` as a `T`, falling back to `default` when absent, empty, or
/// unparseable.
///
/// Absent and empty values fall back silently; an unparseable value logs a
/// warning with the field name so the coercion stays visible in operation.
pub fn parse_or_default<T>(field: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(field, raw, fallback = %default, "unparseable value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_parses() {
        assert_eq!(parse_or_default("iterations", Some("100000"), 7_i64), 100_000);
        assert_eq!(parse_or_default("port", Some("8080"), 3001_u16), 8080);
    }

    #[test]
    fn absent_input_uses_default() {
        assert_eq!(parse_or_default("iterations", None, 42_i64), 42);
    }

    #[test]
    fn empty_input_uses_default() {
        assert_eq!(parse_or_default("port", Some(""), 3001_u16), 3001);
        assert_eq!(parse_or_default("port", Some("   "), 3001_u16), 3001);
    }

    #[test]
    fn non_numeric_input_uses_default() {
        assert_eq!(parse_or_default("iterations", Some("abc"), 42_i64), 42);
        assert_eq!(parse_or_default("iterations", Some("12x"), 42_i64), 42);
    }

    #[test]
    fn negative_values_parse_for_signed_targets() {
        assert_eq!(parse_or_default("iterations", Some("-5"), 42_i64), -5);
        // ...but fall back for unsigned ones.
        assert_eq!(parse_or_default("port", Some("-5"), 3001_u16), 3001);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_or_default("iterations", Some(" 99 "), 42_i64), 99);
    }
}
