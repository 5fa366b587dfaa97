//! Global (window-level) event handlers and the declarative modal triggers.
//!
//! Panel triggers are wired by `components::panels`; the modal's own close /
//! swipe / focus-trap listeners live in `components::modal`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, MouseEvent, Window};

use crate::constants::{ATTR_MODAL_TEMPLATE, ATTR_MODAL_TITLE};
use crate::dom_utils;
use crate::messages::Message;
use crate::models::OriginPoint;
use crate::state::dispatch_global_message;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Entry point – call once after the page markup is in place.  Attaches all
/// global event handlers.
pub fn setup_ui_event_handlers(window: &Window, document: &Document) -> Result<(), JsValue> {
    setup_scroll_handler(window)?;
    setup_resize_handler(window)?;
    setup_orientation_handler(window)?;
    setup_modal_triggers(document)?;
    Ok(())
}

/// Page coordinates of a pointer event.
pub fn event_origin(event: &MouseEvent) -> OriginPoint {
    OriginPoint {
        x: event.page_x() as f64,
        y: event.page_y() as f64,
    }
}

/// Build the `OpenModal` message; the current scroll offset and viewport are
/// read from `window`.
pub fn open_modal_message(
    window: &Window,
    title: String,
    body_html: String,
    origin: Option<OriginPoint>,
) -> Message {
    Message::OpenModal {
        title,
        body_html,
        origin,
        scroll_y: dom_utils::scroll_y(window),
        viewport: dom_utils::viewport(window),
    }
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

/// window `scroll` – passive, coalesced per frame by the header reducer
fn setup_scroll_handler(window: &Window) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        dispatch_global_message(Message::ScrollEvent);
    }));
    let mut options = AddEventListenerOptions::new();
    options.passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// window `resize`
fn setup_resize_handler(window: &Window) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        if let Some(window) = web_sys::window() {
            dispatch_global_message(Message::ViewportResized(dom_utils::viewport(&window)));
        }
    }));
    window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// window `orientationchange` – dimensions are only final after a short delay
fn setup_orientation_handler(window: &Window) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        dispatch_global_message(Message::OrientationChanged);
    }));
    window.add_event_listener_with_callback("orientationchange", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// `<button data-modal-title="Implants" data-modal-template="implants-more">`
/// opens the modal with the inner HTML of `<template id="implants-more">`.
fn setup_modal_triggers(document: &Document) -> Result<(), JsValue> {
    let list = document.query_selector_all(&format!("[{}]", ATTR_MODAL_TITLE))?;
    for i in 0..list.length() {
        let trigger = match list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let title = trigger.get_attribute(ATTR_MODAL_TITLE).unwrap_or_default();
        let template_id = trigger.get_attribute(ATTR_MODAL_TEMPLATE);

        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let body_html = template_id
                .as_deref()
                .and_then(|id| window.document().and_then(|d| d.get_element_by_id(id)))
                .map(|tpl| tpl.inner_html())
                .unwrap_or_default();
            // Keyboard activation fires a synthetic click with `detail == 0`
            // and no meaningful coordinates: use the default placement.
            let origin = (e.detail() != 0).then(|| event_origin(&e));
            dispatch_global_message(open_modal_message(&window, title.clone(), body_html, origin));
        }));
        trigger.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}
