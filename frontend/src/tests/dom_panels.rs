//! Browser tests for the expandable panel groups.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

use crate::components::panels;
use crate::config::SiteConfig;
use crate::messages::Message;
use crate::models::ToggleGroup;
use crate::state::{dispatch_global_message, init_app_state, APP_STATE};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Two technology items with triggers and panels.
fn mount(document: &Document) -> Element {
    let root = document.create_element("section").unwrap();
    root.set_inner_html(
        r#"
        <button data-toggle-group="technology" data-toggle-index="0">CBCT</button>
        <div data-panel-group="technology" data-panel-index="0"><a href="#">More</a></div>
        <button data-toggle-group="technology" data-toggle-index="1">Laser</button>
        <div data-panel-group="technology" data-panel-index="1"><a href="#">More</a></div>
        <button data-toggle-group="bogus" data-toggle-index="0">Ignored</button>
        "#,
    );
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn panel(root: &Element, index: usize) -> Element {
    root.query_selector(&format!(
        "[data-panel-group=technology][data-panel-index=\"{}\"]",
        index
    ))
    .unwrap()
    .unwrap()
}

fn trigger(root: &Element, index: usize) -> HtmlElement {
    root.query_selector(&format!(
        "[data-toggle-group=technology][data-toggle-index=\"{}\"]",
        index
    ))
    .unwrap()
    .unwrap()
    .dyn_into::<HtmlElement>()
    .unwrap()
}

#[wasm_bindgen_test]
fn trigger_clicks_keep_one_panel_open() {
    init_app_state(SiteConfig::default());
    let document = document();
    let root = mount(&document);
    panels::setup_panels(&document).unwrap();

    // Initial render collapses everything.
    assert!(panel(&root, 0).has_attribute("hidden"));
    assert!(panel(&root, 1).has_attribute("hidden"));

    trigger(&root, 0).click();
    assert!(!panel(&root, 0).has_attribute("hidden"));
    assert_eq!(
        trigger(&root, 0).get_attribute("aria-expanded").as_deref(),
        Some("true")
    );

    trigger(&root, 1).click();
    assert!(panel(&root, 0).has_attribute("hidden"));
    assert!(panel(&root, 1).class_list().contains("expanded"));
    assert!(APP_STATE.with(|s| s.borrow().is_expanded(ToggleGroup::Technology, 1)));

    dispatch_global_message(Message::CollapseGroup(ToggleGroup::Technology));
    assert!(panel(&root, 1).has_attribute("hidden"));

    panels::unregister_panel(ToggleGroup::Technology, 0);
    panels::unregister_panel(ToggleGroup::Technology, 1);
    root.remove();
}

fn press(target: &EventTarget) {
    let mut init = MouseEventInit::new();
    init.bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn open_bio_collapses_on_press_outside_only() {
    init_app_state(SiteConfig::default());
    let document = document();
    let root = document.create_element("section").unwrap();
    root.set_inner_html(
        r#"
        <button id="bio-trigger" data-toggle-group="staff" data-toggle-index="0">Dr. Ortiz</button>
        <div id="bio-panel" data-panel-group="staff" data-panel-index="0"><p>Bio</p></div>
        <p id="bio-elsewhere">Hours</p>
        "#,
    );
    document.body().unwrap().append_child(&root).unwrap();
    panels::setup_panels(&document).unwrap();

    let trigger = document
        .get_element_by_id("bio-trigger")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    trigger.click();
    assert!(APP_STATE.with(|s| s.borrow().is_expanded(ToggleGroup::StaffBios, 0)));

    // Pressing the bio's own trigger or inside the bio keeps it open.
    press(&trigger);
    press(&document.get_element_by_id("bio-panel").unwrap());
    TimeoutFuture::new(0).await;
    assert!(APP_STATE.with(|s| s.borrow().is_expanded(ToggleGroup::StaffBios, 0)));

    press(&document.get_element_by_id("bio-elsewhere").unwrap());
    TimeoutFuture::new(0).await;
    assert!(!APP_STATE.with(|s| s.borrow().is_expanded(ToggleGroup::StaffBios, 0)));
    assert!(document
        .get_element_by_id("bio-panel")
        .unwrap()
        .has_attribute("hidden"));

    panels::unregister_panel(ToggleGroup::StaffBios, 0);
    root.remove();
}

#[wasm_bindgen_test]
fn oversized_index_is_not_registered() {
    init_app_state(SiteConfig::default());
    let document = document();
    let root = document.create_element("section").unwrap();
    root.set_inner_html(
        r#"<div id="huge-panel" data-panel-group="values" data-panel-index="4000000000">Care</div>"#,
    );
    document.body().unwrap().append_child(&root).unwrap();
    panels::setup_panels(&document).unwrap();

    // Registered panels are rendered collapsed; this one was skipped.
    let huge = document.get_element_by_id("huge-panel").unwrap();
    assert!(!huge.has_attribute("hidden"));
    assert!(panels::unregister_panel(ToggleGroup::ClinicValues, 0).is_none());

    root.remove();
}
