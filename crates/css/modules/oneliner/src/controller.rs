//! The shrink loop.
//!
//! ```text
//! Created ──run()──▶ Shrinking ──▶ Finished(Fitted)
//!                              └─▶ Finished(LimitReached)
//! ```
//!
//! Search order at a given font-size: letter-spacing walks down from the
//! original value to the floor. Once the floor is hit the letter-spacing
//! override is cleared and font-size drops by one, so every font-size gets
//! the full letter-spacing range again.

use crate::config::ShrinkConfig;
use crate::style::{ShrinkTarget, StyleProperty, StyleSnapshot};
use log::{debug, trace, warn};

/// Terminal result of a shrink pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShrinkOutcome {
    /// The element no longer overflows.
    Fitted,
    /// Both properties hit their floors and the element still overflows.
    LimitReached,
}

impl ShrinkOutcome {
    pub const fn is_fit(self) -> bool {
        matches!(self, Self::Fitted)
    }
}

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShrinkState {
    Created,
    Shrinking,
    Finished(ShrinkOutcome),
}

/// Final bookkeeping of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShrinkReport {
    pub outcome: ShrinkOutcome,
    /// Values read at construction.
    pub original: StyleSnapshot,
    /// Values after the last step.
    pub current: StyleSnapshot,
    /// Loop iterations taken.
    pub steps: u64,
    /// Style writes and clears issued against the element.
    pub writes: u64,
}

impl ShrinkReport {
    pub const fn fit_achieved(&self) -> bool {
        self.outcome.is_fit()
    }
}

/// Upper bound on loop iterations for a given starting point.
///
/// Each font-size epoch spends at most `letter_spacing + min_letter_spacing`
/// decrements plus one reset step, and there are at most
/// `font_size - min_font_size + 1` epochs.
pub fn max_steps(original: StyleSnapshot, config: &ShrinkConfig) -> u64 {
    let epochs = i64::from(original.font_size) - i64::from(config.min_font_size) + 1;
    let spacing_range =
        i64::from(original.letter_spacing) - i64::from(config.letter_spacing_floor());
    let per_epoch = spacing_range.max(0) + 1;
    epochs.max(1).saturating_mul(per_epoch) as u64
}

/// Shrinks one element. Single use: `run` consumes the controller, and a
/// later re-measure builds a new controller whose `original` is whatever the
/// element shows at that point.
pub struct ShrinkController<'element, E: ShrinkTarget + ?Sized> {
    element: &'element mut E,
    config: ShrinkConfig,
    original: StyleSnapshot,
    current: StyleSnapshot,
    state: ShrinkState,
    steps: u64,
    writes: u64,
}

impl<'element, E: ShrinkTarget + ?Sized> ShrinkController<'element, E> {
    /// Read the element's current letter-spacing and font-size. Nothing is
    /// written until [`Self::run`].
    ///
    /// A letter-spacing without a numeric value (`normal`) counts as 0. A
    /// non-numeric font-size starts at the configured floor, which leaves
    /// font-size untouched for the whole pass.
    pub fn new(element: &'element mut E, config: ShrinkConfig) -> Self {
        let letter_spacing = element
            .numeric_style(StyleProperty::LetterSpacing)
            .unwrap_or_else(|| {
                trace!(target: "oneliner", "letter-spacing is not numeric, using 0");
                0
            });
        let font_size = element
            .numeric_style(StyleProperty::FontSize)
            .unwrap_or_else(|| {
                warn!(
                    target: "oneliner",
                    "font-size is not numeric, pinning it to the floor {}",
                    config.min_font_size
                );
                config.min_font_size
            });
        let original = StyleSnapshot::new(font_size, letter_spacing);
        debug!(
            target: "oneliner",
            "created: font-size={font_size} letter-spacing={letter_spacing} floors=({}, {})",
            config.min_font_size,
            config.letter_spacing_floor()
        );
        Self {
            element,
            config,
            original,
            current: original,
            state: ShrinkState::Created,
            steps: 0,
            writes: 0,
        }
    }

    pub const fn state(&self) -> ShrinkState {
        self.state
    }

    pub const fn original(&self) -> StyleSnapshot {
        self.original
    }

    pub const fn current(&self) -> StyleSnapshot {
        self.current
    }

    pub const fn config(&self) -> &ShrinkConfig {
        &self.config
    }

    pub fn element(&self) -> &E {
        &*self.element
    }

    /// Shrink until the element fits or both floors are exhausted.
    pub fn run(mut self) -> ShrinkReport {
        self.state = ShrinkState::Shrinking;
        let bound = max_steps(self.original, &self.config);
        let mut limit_reached = false;

        while !limit_reached && !self.element.fits() {
            self.steps += 1;
            debug_assert!(self.steps <= bound, "shrink exceeded {bound} steps");

            if self.current.letter_spacing > self.config.letter_spacing_floor() {
                self.current.letter_spacing -= 1;
                self.write(StyleProperty::LetterSpacing, self.current.letter_spacing);
                continue;
            }

            self.current.letter_spacing = self.original.letter_spacing;
            self.clear(StyleProperty::LetterSpacing);

            if self.current.font_size > self.config.min_font_size {
                self.current.font_size -= 1;
                self.write(StyleProperty::FontSize, self.current.font_size);
            } else {
                limit_reached = true;
            }
        }

        let outcome = if limit_reached {
            ShrinkOutcome::LimitReached
        } else {
            ShrinkOutcome::Fitted
        };
        self.state = ShrinkState::Finished(outcome);
        debug!(
            target: "oneliner",
            "{outcome:?} after {} steps: font-size {} -> {}, letter-spacing {} -> {}",
            self.steps,
            self.original.font_size,
            self.current.font_size,
            self.original.letter_spacing,
            self.current.letter_spacing
        );

        ShrinkReport {
            outcome,
            original: self.original,
            current: self.current,
            steps: self.steps,
            writes: self.writes,
        }
    }

    fn write(&mut self, property: StyleProperty, value: i32) {
        trace!(target: "oneliner", "{property} = {value}px");
        self.element.set_numeric_style(property, value);
        self.writes += 1;
    }

    fn clear(&mut self, property: StyleProperty) {
        trace!(target: "oneliner", "{property} cleared");
        self.element.clear_style(property);
        self.writes += 1;
    }
}
