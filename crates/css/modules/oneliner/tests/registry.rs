//! One-shot-per-element behaviour of the registry.

use css_oneliner::{
    Callbacks, OneLinerRegistry, PLUGIN_MARKER, RetainedElement, ShrinkConfig, StyleProperty,
    StyleSnapshot,
};
use std::cell::{Cell, RefCell};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn second_application_is_a_no_op() {
    init_logging();
    let mut registry = OneLinerRegistry::new();
    let mut element = RetainedElement::new("0123456789", 90);
    let calls = Cell::new(0);

    let first = registry.apply(
        "title",
        &mut element,
        ShrinkConfig::default(),
        Callbacks::new().on_fit(|_| calls.set(calls.get() + 1)),
    );
    assert!(first.is_some());
    assert_eq!(element.mutations().len(), 1);

    let second = registry.apply(
        "title",
        &mut element,
        ShrinkConfig::default(),
        Callbacks::new().on_fit(|_| calls.set(calls.get() + 1)),
    );
    assert!(second.is_none());
    assert_eq!(calls.get(), 1);
    assert_eq!(element.mutations().len(), 1);
    assert_eq!(registry.report(&"title"), first.as_ref());
    assert_eq!(registry.marker(), PLUGIN_MARKER);
}

#[test]
fn forgetting_allows_a_fresh_pass_from_shrunk_style() {
    init_logging();
    let mut registry = OneLinerRegistry::new();
    let mut element = RetainedElement::new("0123456789", 90);
    let first = registry
        .apply(1_u32, &mut element, ShrinkConfig::default(), Callbacks::new())
        .unwrap();
    assert_eq!(first.current, StyleSnapshot::new(16, -1));

    // Window got narrower. The new pass starts from -1, which is already the
    // letter-spacing floor, so only font-size moves: 15px and 14px give 9px
    // glyphs, 13px gives 8px.
    element.set_client_width(80);
    assert!(registry.contains(&1));
    assert!(registry.forget(&1).is_some());

    let second = registry
        .apply(1, &mut element, ShrinkConfig::default(), Callbacks::new())
        .unwrap();
    assert_eq!(second.original, StyleSnapshot::new(16, -1));
    assert!(second.fit_achieved());
    assert_eq!(second.current, StyleSnapshot::new(13, -1));
    assert_eq!(element.inline_style(StyleProperty::FontSize), Some("13px"));
    assert_eq!(element.inline_style(StyleProperty::LetterSpacing), None);
}

#[test]
fn apply_all_skips_marked_elements() {
    init_logging();
    let mut registry = OneLinerRegistry::new();
    let mut headline = RetainedElement::new("0123456789", 90);
    let mut caption = RetainedElement::new("fits", 200);
    let mut footer = RetainedElement::new("overflowing footer text", 0);

    registry.apply("caption", &mut caption, ShrinkConfig::default(), Callbacks::new());

    let reports = registry.apply_all(
        [
            ("headline", &mut headline),
            ("caption", &mut caption),
            ("footer", &mut footer),
        ],
        ShrinkConfig::default(),
        |_| Callbacks::new(),
    );

    let keys: Vec<_> = reports.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec!["headline", "footer"]);
    assert!(reports[0].1.fit_achieved());
    assert!(!reports[1].1.fit_achieved());
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
}

#[test]
fn apply_all_fires_hooks_per_processed_element() {
    init_logging();
    let mut registry = OneLinerRegistry::new();
    let mut headline = RetainedElement::new("0123456789", 90);
    let mut footer = RetainedElement::new("overflowing footer text", 0);
    let mut caption = RetainedElement::new("fits", 200);
    registry.apply("caption", &mut caption, ShrinkConfig::default(), Callbacks::new());

    let fitted = RefCell::new(Vec::new());
    let not_fitted = RefCell::new(Vec::new());
    let (fitted_log, not_fitted_log) = (&fitted, &not_fitted);
    let reports = registry.apply_all(
        [
            ("headline", &mut headline),
            ("caption", &mut caption),
            ("footer", &mut footer),
        ],
        ShrinkConfig::default(),
        move |key| {
            let key = *key;
            Callbacks::new()
                .on_fit(move |_: &RetainedElement| fitted_log.borrow_mut().push(key))
                .on_no_fit(move |_: &RetainedElement| not_fitted_log.borrow_mut().push(key))
        },
    );

    assert_eq!(reports.len(), 2);
    assert_eq!(fitted.into_inner(), vec!["headline"]);
    assert_eq!(not_fitted.into_inner(), vec!["footer"]);
}
