//! Shrink text onto a single line.
//!
//! A [`ShrinkController`] reduces an element's `letter-spacing`, then its
//! `font-size`, one pixel at a time until the content no longer overflows
//! horizontally or both configured floors are reached. Hosts plug in through
//! [`StyleAccessor`] and [`OverflowProbe`]; [`RetainedElement`] is an
//! in-memory implementation of both.
//!
//! ```
//! use css_oneliner::{Callbacks, RetainedElement, ShrinkConfig, shrink_to_fit};
//!
//! let mut headline = RetainedElement::new("Breaking news", 100).with_font_size("14px");
//! let report = shrink_to_fit(&mut headline, ShrinkConfig::default(), Callbacks::new());
//! assert!(report.fit_achieved());
//! ```

#![allow(
    clippy::module_name_repetitions,
    reason = "ShrinkConfig and ShrinkController read better than Config and Controller"
)]

mod callbacks;
mod config;
mod controller;
mod registry;
mod retained;
mod style;

pub use callbacks::{Callbacks, shrink_to_fit};
pub use config::{DEFAULT_MIN_FONT_SIZE, DEFAULT_MIN_LETTER_SPACING, ShrinkConfig};
pub use controller::{ShrinkController, ShrinkOutcome, ShrinkReport, ShrinkState, max_steps};
pub use registry::{OneLinerRegistry, PLUGIN_MARKER};
pub use retained::{RetainedElement, StyleMutation};
pub use style::{OverflowProbe, ShrinkTarget, StyleAccessor, StyleProperty, StyleSnapshot};
