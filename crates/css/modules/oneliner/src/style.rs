//! Style properties touched by shrinking and the host collaborators that
//! read, write and measure them.

use css_values_units::{format_px, parse_integer_px};
use std::fmt;

/// The two properties a shrink pass mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    FontSize,
    LetterSpacing,
}

impl StyleProperty {
    /// CSS property name as understood by hosts.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::FontSize => "font-size",
            Self::LetterSpacing => "letter-spacing",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.css_name())
    }
}

/// Whole-pixel values of the two shrinkable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSnapshot {
    pub letter_spacing: i32,
    pub font_size: i32,
}

impl StyleSnapshot {
    pub const fn new(font_size: i32, letter_spacing: i32) -> Self {
        Self {
            letter_spacing,
            font_size,
        }
    }

    pub const fn get(&self, property: StyleProperty) -> i32 {
        match property {
            StyleProperty::FontSize => self.font_size,
            StyleProperty::LetterSpacing => self.letter_spacing,
        }
    }
}

/// Read/write access to an element's style.
///
/// Hosts implement the three string-level operations; numeric access is
/// derived from them using whole-pixel semantics.
pub trait StyleAccessor {
    /// The resolved value of `property`, e.g. `"16px"` or `"normal"`.
    fn computed_style(&self, property: StyleProperty) -> String;

    /// Set an explicit override for `property`.
    fn set_style(&mut self, property: StyleProperty, value: &str);

    /// Remove the explicit override so the property falls back to its
    /// inherited/cascaded value.
    fn clear_style(&mut self, property: StyleProperty);

    /// Leading integer of the resolved value; `None` for keywords like `normal`.
    fn numeric_style(&self, property: StyleProperty) -> Option<i32> {
        parse_integer_px(&self.computed_style(property))
    }

    /// Write `value` as a pixel length.
    fn set_numeric_style(&mut self, property: StyleProperty, value: i32) {
        self.set_style(property, &format_px(value));
    }
}

/// Horizontal overflow measurement.
pub trait OverflowProbe {
    /// Width of the rendered content, including any part that overflows.
    fn scroll_width(&self) -> i32;

    /// Visible width of the element.
    fn client_width(&self) -> i32;

    /// Content fits when it cannot be scrolled horizontally.
    fn fits(&self) -> bool {
        self.scroll_width() <= self.client_width()
    }
}

/// Anything that can be shrunk: styleable and measurable.
pub trait ShrinkTarget: StyleAccessor + OverflowProbe {}

impl<T: StyleAccessor + OverflowProbe + ?Sized> ShrinkTarget for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl StyleAccessor for Fixed {
        fn computed_style(&self, _property: StyleProperty) -> String {
            self.0.to_owned()
        }

        fn set_style(&mut self, _property: StyleProperty, _value: &str) {}

        fn clear_style(&mut self, _property: StyleProperty) {}
    }

    #[test]
    fn numeric_reads_go_through_pixel_parsing() {
        assert_eq!(Fixed("14.7px").numeric_style(StyleProperty::FontSize), Some(14));
        assert_eq!(Fixed("normal").numeric_style(StyleProperty::LetterSpacing), None);
    }

    #[test]
    fn css_names() {
        assert_eq!(StyleProperty::LetterSpacing.to_string(), "letter-spacing");
        assert_eq!(StyleProperty::FontSize.css_name(), "font-size");
    }
}
