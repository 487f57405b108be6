//! CSS Values and Units — the subset needed to read and write resolved
//! `font-size` / `letter-spacing` values as whole pixels.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

pub mod chapter_4_numbers;
pub mod resolved_values;

pub use chapter_4_numbers::Number;
pub use resolved_values::{format_px, parse_integer_px};
