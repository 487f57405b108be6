//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

impl Number {
    /// Whole part of the number, truncated toward zero and saturated to `i32`.
    pub fn truncate(self) -> i32 {
        self.0.trunc() as i32
    }
}
