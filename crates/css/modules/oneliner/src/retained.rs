//! An element held entirely in memory.
//!
//! Style follows a two-level cascade: an inline override, when present, wins
//! over the inherited value. Width is measured with a monospace approximation
//! (every character advances `ceil(font_size * advance / 1000) + letter_spacing`
//! pixels), which is enough for embedders that do not shape text and for
//! exercising the shrink loop without a renderer.

use crate::style::{OverflowProbe, StyleAccessor, StyleProperty};
use rustc_hash::FxHashMap;

/// UA default font-size when nothing else is known.
const DEFAULT_FONT_SIZE: &str = "16px";
/// Initial value of `letter-spacing`.
const DEFAULT_LETTER_SPACING: &str = "normal";
/// Average glyph advance in thousandths of the font-size.
const DEFAULT_ADVANCE_PER_MILLE: u32 = 600;

/// One recorded style change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleMutation {
    Set {
        property: StyleProperty,
        value: String,
    },
    Cleared(StyleProperty),
}

#[derive(Debug, Clone)]
pub struct RetainedElement {
    text: String,
    client_width: i32,
    advance_per_mille: u32,
    inherited: FxHashMap<StyleProperty, String>,
    inline: FxHashMap<StyleProperty, String>,
    mutations: Vec<StyleMutation>,
}

impl RetainedElement {
    pub fn new(text: impl Into<String>, client_width: i32) -> Self {
        let mut inherited = FxHashMap::default();
        inherited.insert(StyleProperty::FontSize, DEFAULT_FONT_SIZE.to_owned());
        inherited.insert(
            StyleProperty::LetterSpacing,
            DEFAULT_LETTER_SPACING.to_owned(),
        );
        Self {
            text: text.into(),
            client_width,
            advance_per_mille: DEFAULT_ADVANCE_PER_MILLE,
            inherited,
            inline: FxHashMap::default(),
            mutations: Vec::new(),
        }
    }

    /// Set the inherited (cascaded) value of `property`.
    #[must_use]
    pub fn with_inherited(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.inherited.insert(property, value.into());
        self
    }

    #[must_use]
    pub fn with_font_size(self, value: impl Into<String>) -> Self {
        self.with_inherited(StyleProperty::FontSize, value)
    }

    #[must_use]
    pub fn with_letter_spacing(self, value: impl Into<String>) -> Self {
        self.with_inherited(StyleProperty::LetterSpacing, value)
    }

    #[must_use]
    pub const fn with_advance_per_mille(mut self, advance_per_mille: u32) -> Self {
        self.advance_per_mille = advance_per_mille;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resize the visible box.
    pub fn set_client_width(&mut self, client_width: i32) {
        self.client_width = client_width;
    }

    /// The inline override for `property`, if any.
    pub fn inline_style(&self, property: StyleProperty) -> Option<&str> {
        self.inline.get(&property).map(String::as_str)
    }

    /// Every set/clear issued against this element, oldest first.
    pub fn mutations(&self) -> &[StyleMutation] {
        &self.mutations
    }

    /// Width a single glyph takes at the current style.
    pub fn advance(&self) -> i32 {
        let font_size = self.numeric_style(StyleProperty::FontSize).unwrap_or(0);
        let letter_spacing = self
            .numeric_style(StyleProperty::LetterSpacing)
            .unwrap_or(0);
        let glyph = (font_size.max(0) as u32)
            .saturating_mul(self.advance_per_mille)
            .div_ceil(1000);
        i32::try_from(glyph)
            .unwrap_or(i32::MAX)
            .saturating_add(letter_spacing)
    }
}

impl StyleAccessor for RetainedElement {
    fn computed_style(&self, property: StyleProperty) -> String {
        self.inline
            .get(&property)
            .or_else(|| self.inherited.get(&property))
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        self.inline.insert(property, value.to_owned());
        self.mutations.push(StyleMutation::Set {
            property,
            value: value.to_owned(),
        });
    }

    fn clear_style(&mut self, property: StyleProperty) {
        self.inline.remove(&property);
        self.mutations.push(StyleMutation::Cleared(property));
    }
}

impl OverflowProbe for RetainedElement {
    fn scroll_width(&self) -> i32 {
        let glyphs = i32::try_from(self.text.chars().count()).unwrap_or(i32::MAX);
        glyphs.saturating_mul(self.advance()).max(0)
    }

    fn client_width(&self) -> i32 {
        self.client_width
    }
}
