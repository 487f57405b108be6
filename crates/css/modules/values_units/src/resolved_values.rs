//! Whole-pixel reads and writes of resolved style values.
//! Spec: <https://drafts.csswg.org/cssom/#resolved-values>
//!
//! Hosts report resolved values as strings (`"16px"`, `"normal"`, `"1.5px"`).
//! Style shrinking works in whole pixels, so reads keep only the integer part
//! of the leading numeric token and writes always emit a `px` length.

use crate::chapter_4_numbers::Number;
use cssparser::{Parser, ParserInput, Token};

/// Read the leading numeric component of a resolved value as whole pixels.
///
/// The unit is ignored and the fractional part is truncated toward zero, so
/// `"1.9px"` reads as `1` and `"-2.5px"` as `-2`. Keywords (`normal`), empty
/// strings and anything else without a leading number yield `None`.
pub fn parse_integer_px(value: &str) -> Option<i32> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let number = match parser.next().ok()? {
        Token::Number { value, .. } | Token::Dimension { value, .. } => *value,
        Token::Percentage { unit_value, .. } => *unit_value * 100.0,
        _ => return None,
    };
    number
        .is_finite()
        .then(|| Number(number).truncate())
}

/// Serialize a whole-pixel value the way it is written back to an element.
pub fn format_px(value: i32) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pixel_lengths() {
        assert_eq!(parse_integer_px("16px"), Some(16));
        assert_eq!(parse_integer_px("  12px"), Some(12));
        assert_eq!(parse_integer_px("0"), Some(0));
    }

    #[test]
    fn truncates_fractional_pixels() {
        assert_eq!(parse_integer_px("1.9px"), Some(1));
        assert_eq!(parse_integer_px("-2.5px"), Some(-2));
        assert_eq!(parse_integer_px("-0.4px"), Some(0));
    }

    #[test]
    fn keywords_are_not_numeric() {
        assert_eq!(parse_integer_px("normal"), None);
        assert_eq!(parse_integer_px(""), None);
        assert_eq!(parse_integer_px("px"), None);
    }

    #[test]
    fn writes_pixels() {
        assert_eq!(format_px(-1), "-1px");
        assert_eq!(format_px(14), "14px");
    }
}
