//! One-shot-per-element bookkeeping.
//!
//! Elements are processed at most once while they carry the
//! [`PLUGIN_MARKER`]. Re-measuring (after a resize, say) means forgetting the
//! marker first so a fresh controller starts from the already-shrunk style.

use crate::callbacks::{Callbacks, shrink_to_fit};
use crate::config::ShrinkConfig;
use crate::controller::ShrinkReport;
use crate::style::ShrinkTarget;
use log::trace;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Marker name under which processed elements are recorded.
pub const PLUGIN_MARKER: &str = "plugin_oneliner";

/// Reports of already-shrunk elements, keyed by a host element id.
#[derive(Debug, Clone)]
pub struct OneLinerRegistry<K> {
    applied: FxHashMap<K, ShrinkReport>,
}

impl<K> Default for OneLinerRegistry<K> {
    fn default() -> Self {
        Self {
            applied: FxHashMap::default(),
        }
    }
}

impl<K: Hash + Eq + Clone + Debug> OneLinerRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn marker(&self) -> &'static str {
        PLUGIN_MARKER
    }

    /// Shrink `element` unless `key` is already marked.
    ///
    /// Returns `None` without touching the element or calling any hook when
    /// the key was processed before.
    pub fn apply<E: ShrinkTarget + ?Sized>(
        &mut self,
        key: K,
        element: &mut E,
        config: ShrinkConfig,
        callbacks: Callbacks<'_, E>,
    ) -> Option<ShrinkReport> {
        if self.applied.contains_key(&key) {
            trace!(target: "oneliner", "{key:?} already carries {PLUGIN_MARKER}, skipping");
            return None;
        }
        let report = shrink_to_fit(element, config, callbacks);
        self.applied.insert(key, report);
        Some(report)
    }

    /// Shrink every element not yet marked, with the same floors. `callbacks`
    /// builds the hooks for each element actually processed; marked elements
    /// never reach it. Returns the reports of the elements processed by this
    /// call.
    pub fn apply_all<'element, 'callback, E, I, F>(
        &mut self,
        elements: I,
        config: ShrinkConfig,
        mut callbacks: F,
    ) -> Vec<(K, ShrinkReport)>
    where
        E: ShrinkTarget + ?Sized + 'element,
        I: IntoIterator<Item = (K, &'element mut E)>,
        F: FnMut(&K) -> Callbacks<'callback, E>,
    {
        let mut reports = Vec::new();
        for (key, element) in elements {
            if self.applied.contains_key(&key) {
                trace!(target: "oneliner", "{key:?} already carries {PLUGIN_MARKER}, skipping");
                continue;
            }
            let report = shrink_to_fit(element, config, callbacks(&key));
            self.applied.insert(key.clone(), report);
            reports.push((key, report));
        }
        reports
    }

    pub fn contains(&self, key: &K) -> bool {
        self.applied.contains_key(key)
    }

    pub fn report(&self, key: &K) -> Option<&ShrinkReport> {
        self.applied.get(key)
    }

    /// Drop the marker for `key`, returning its last report.
    pub fn forget(&mut self, key: &K) -> Option<ShrinkReport> {
        self.applied.remove(key)
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}
