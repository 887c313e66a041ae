//! Side-count text input
//!
//! The text field delivers raw strings on every edit. Anything that is not an
//! integer of at least three is rejected here and the caller keeps its value.

use crate::geometry::SideCountError;

/// Side count used by the "Create circle" shortcut
pub const CIRCLE_SIDES: i64 = 100;

/// Parse raw text from the side-count field
///
/// Surrounding whitespace is ignored. Digit-group underscores (`1_0`) are
/// not accepted. The range check is left to
/// `TransformState::set_side_count` so both paths reject the same values.
pub fn parse_side_count(raw: &str) -> Result<i64, SideCountError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SideCountError::NotAnInteger(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_side_count("5"), Ok(5));
        assert_eq!(parse_side_count(" 12 "), Ok(12));
        assert_eq!(parse_side_count("+7"), Ok(7));
        assert_eq!(parse_side_count("2"), Ok(2));
        assert_eq!(parse_side_count("-3"), Ok(-3));
    }

    #[test]
    fn test_parse_invalid() {
        for raw in ["", "abc", "5.0", "3 4", "0x10", "1_0"] {
            assert_eq!(
                parse_side_count(raw),
                Err(SideCountError::NotAnInteger(raw.to_string()))
            );
        }
    }
}
