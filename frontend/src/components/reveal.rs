//! Reveal-on-scroll for `[data-reveal]` sections.
//!
//! Elements get `is-visible` the first time they intersect the viewport and
//! are then unobserved.  Browsers without `IntersectionObserver` get every
//! section revealed up front instead.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::constants::{ATTR_REVEAL, CSS_REVEALED, REVEAL_THRESHOLD};
use crate::dom_utils;

pub fn setup_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = reveal_targets(document)?;
    if targets.is_empty() {
        return Ok(());
    }

    if !observer_available() {
        crate::debug_log!("IntersectionObserver unavailable – revealing {} sections", targets.len());
        for el in &targets {
            dom_utils::set_class(el, CSS_REVEALED, true);
        }
        return Ok(());
    }

    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(e) => e,
                    Err(_) => continue,
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom_utils::set_class(&target, CSS_REVEALED, true);
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    for el in &targets {
        observer.observe(el);
    }
    // The observer and its callback live as long as the page.
    cb.forget();
    Ok(())
}

fn observer_available() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn reveal_targets(document: &Document) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(&format!("[{}]", ATTR_REVEAL))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}
