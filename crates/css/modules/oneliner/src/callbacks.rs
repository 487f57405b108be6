//! Callback-style outcome signalling on top of [`ShrinkReport`].

use crate::config::ShrinkConfig;
use crate::controller::{ShrinkController, ShrinkOutcome, ShrinkReport};
use crate::style::ShrinkTarget;
use std::fmt;

type Callback<'callback, E> = Box<dyn FnOnce(&E) + 'callback>;

/// Optional `fit` / `noFit` hooks. Missing hooks are no-ops.
pub struct Callbacks<'callback, E: ?Sized> {
    on_fit: Option<Callback<'callback, E>>,
    on_no_fit: Option<Callback<'callback, E>>,
}

impl<E: ?Sized> Default for Callbacks<'_, E> {
    fn default() -> Self {
        Self {
            on_fit: None,
            on_no_fit: None,
        }
    }
}

impl<E: ?Sized> fmt::Debug for Callbacks<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Callbacks")
            .field("on_fit", &self.on_fit.is_some())
            .field("on_no_fit", &self.on_no_fit.is_some())
            .finish()
    }
}

impl<'callback, E: ?Sized> Callbacks<'callback, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the element when it fits.
    #[must_use]
    pub fn on_fit(mut self, callback: impl FnOnce(&E) + 'callback) -> Self {
        self.on_fit = Some(Box::new(callback));
        self
    }

    /// Called with the element when both floors were reached without a fit.
    #[must_use]
    pub fn on_no_fit(mut self, callback: impl FnOnce(&E) + 'callback) -> Self {
        self.on_no_fit = Some(Box::new(callback));
        self
    }

    /// Invoke the hook matching `outcome`; the other one is dropped unused.
    pub fn dispatch(self, outcome: ShrinkOutcome, element: &E) {
        let hook = match outcome {
            ShrinkOutcome::Fitted => self.on_fit,
            ShrinkOutcome::LimitReached => self.on_no_fit,
        };
        if let Some(callback) = hook {
            callback(element);
        }
    }
}

/// Run a fresh controller over `element` and fire exactly one of the hooks
/// before returning.
pub fn shrink_to_fit<E: ShrinkTarget + ?Sized>(
    element: &mut E,
    config: ShrinkConfig,
    callbacks: Callbacks<'_, E>,
) -> ShrinkReport {
    let report = ShrinkController::new(element, config).run();
    callbacks.dispatch(report.outcome, element);
    report
}
