//! Shrink floors and their host-facing option names.

use anyhow::{Context as _, Result, bail};
use serde::Deserialize;

/// Default floor for `font-size`, in pixels.
pub const DEFAULT_MIN_FONT_SIZE: i32 = 10;
/// Default floor for `letter-spacing`, in pixels below zero.
pub const DEFAULT_MIN_LETTER_SPACING: i32 = 1;

const fn default_min_font_size() -> i32 {
    DEFAULT_MIN_FONT_SIZE
}

const fn default_min_letter_spacing() -> i32 {
    DEFAULT_MIN_LETTER_SPACING
}

/// Floors bounding a shrink pass.
///
/// Options use the property names hosts pass in (`font-size`,
/// `letter-spacing`); any option left out keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShrinkConfig {
    /// Font-size is never decremented below this value.
    #[serde(rename = "font-size", default = "default_min_font_size")]
    pub min_font_size: i32,
    /// Letter-spacing is decremented while it is above the negation of this value.
    #[serde(rename = "letter-spacing", default = "default_min_letter_spacing")]
    pub min_letter_spacing: i32,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            min_letter_spacing: DEFAULT_MIN_LETTER_SPACING,
        }
    }
}

impl ShrinkConfig {
    #[must_use]
    pub const fn with_min_font_size(mut self, min_font_size: i32) -> Self {
        self.min_font_size = min_font_size;
        self
    }

    #[must_use]
    pub const fn with_min_letter_spacing(mut self, min_letter_spacing: i32) -> Self {
        self.min_letter_spacing = min_letter_spacing;
        self
    }

    /// The letter-spacing value at which decrementing stops.
    pub const fn letter_spacing_floor(&self) -> i32 {
        self.min_letter_spacing.saturating_neg()
    }

    /// Parse options from JSON, e.g. `{"font-size": 12}`.
    ///
    /// # Errors
    /// Returns an error for malformed JSON, unknown option names or negative floors.
    pub fn from_json(options: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(options).context("failed to parse oneliner options")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both floors are non-negative.
    ///
    /// # Errors
    /// Returns an error naming the first negative floor.
    pub fn validate(&self) -> Result<()> {
        if self.min_font_size < 0 {
            bail!("font-size floor must be non-negative, got {}", self.min_font_size);
        }
        if self.min_letter_spacing < 0 {
            bail!(
                "letter-spacing floor must be non-negative, got {}",
                self.min_letter_spacing
            );
        }
        Ok(())
    }
}
