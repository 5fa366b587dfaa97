//! Browser tests for the reveal-on-scroll sections.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

use crate::components::reveal;
use crate::constants::CSS_REVEALED;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A small fixed box in the top-left corner, always inside the viewport.
fn mount_section(document: &Document, id: &str) -> Element {
    let section = document.create_element("section").unwrap();
    section.set_id(id);
    section.set_attribute("data-reveal", "").unwrap();
    section
        .set_attribute(
            "style",
            "position: fixed; top: 0; left: 0; width: 100px; height: 100px;",
        )
        .unwrap();
    document.body().unwrap().append_child(&section).unwrap();
    section
}

#[wasm_bindgen_test]
async fn visible_section_gets_revealed_by_observer() {
    let document = document();
    let section = mount_section(&document, "reveal-observed");
    assert!(!section.class_list().contains(CSS_REVEALED));

    reveal::setup_reveal(&document).unwrap();

    // Observer callbacks arrive after layout; poll for a short while.
    for _ in 0..50 {
        if section.class_list().contains(CSS_REVEALED) {
            break;
        }
        TimeoutFuture::new(20).await;
    }
    assert!(section.class_list().contains(CSS_REVEALED));

    section.remove();
}

#[wasm_bindgen_test]
fn missing_observer_reveals_everything_up_front() {
    let window = web_sys::window().unwrap();
    let document = document();
    let key = JsValue::from_str("IntersectionObserver");
    let saved = js_sys::Reflect::get(&window, &key).unwrap();
    assert!(js_sys::Reflect::delete_property(&window, &key).unwrap());

    let first = mount_section(&document, "reveal-fallback-a");
    let second = mount_section(&document, "reveal-fallback-b");
    let result = reveal::setup_reveal(&document);

    js_sys::Reflect::set(&window, &key, &saved).unwrap();

    result.unwrap();
    assert!(first.class_list().contains(CSS_REVEALED));
    assert!(second.class_list().contains(CSS_REVEALED));

    first.remove();
    second.remove();
}
