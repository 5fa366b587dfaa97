//! The page-level "read more" modal.
//!
//! Keeps creation / render / dismissal wiring in one place.  State lives in
//! `AppState::modal`; this module only mirrors it into the DOM and owns the
//! browser-side resources (listeners, saved body styles, focus memory).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, TouchEvent};

use crate::constants::{
    CSS_MODAL, CSS_MODAL_CONTENT, CSS_MODAL_HEADER, CSS_MODAL_MOBILE, ID_MODAL, ID_MODAL_BODY,
    ID_MODAL_CLOSE, ID_MODAL_TITLE, SNAP_BACK_TRANSITION_MS,
};
use crate::dom_utils;
use crate::focus::{self, FocusMemory};
use crate::messages::Message;
use crate::models::DismissReason;
use crate::outside::OutsideInteraction;
use crate::scroll_lock::BodyStyle;
use crate::state::{dispatch_global_message, APP_STATE};
use crate::swipe::{SwipeGesture, SwipeOutcome};

thread_local! {
    static DISMISSAL: RefCell<Option<OutsideInteraction>> = RefCell::new(None);
    static SAVED_BODY_STYLE: RefCell<Option<BodyStyle>> = RefCell::new(None);
    static FOCUS_MEMORY: RefCell<FocusMemory<HtmlElement>> = RefCell::new(FocusMemory::new(true));
    static SWIPE: RefCell<Option<SwipeGesture>> = RefCell::new(None);
}

/// Ensure `<div id="site-modal" class="modal">…` exists in the DOM and
/// return it.  The returned backdrop holds a `.modal-content` dialog with a
/// header (title + close button) and a body container.
///
/// Returns `(backdrop, content)`.
pub fn ensure_modal(document: &Document) -> Result<(Element, Element), JsValue> {
    if let Some(backdrop) = document.get_element_by_id(ID_MODAL) {
        if let Some(content) = backdrop.query_selector(&format!(".{}", CSS_MODAL_CONTENT))? {
            return Ok((backdrop, content));
        }
    }

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    // Backdrop first ------------------------------------------------------
    let backdrop = document.create_element("div")?;
    backdrop.set_id(ID_MODAL);
    backdrop.set_class_name(CSS_MODAL);
    dom_utils::hide(&backdrop);

    // Dialog ----------------------------------------------------------------
    let content = document.create_element("div")?;
    content.set_class_name(CSS_MODAL_CONTENT);
    content.set_attribute("role", "dialog")?;
    content.set_attribute("aria-modal", "true")?;
    content.set_attribute("aria-labelledby", ID_MODAL_TITLE)?;

    let header = document.create_element("div")?;
    header.set_class_name(CSS_MODAL_HEADER);

    let title = document.create_element("h2")?;
    title.set_id(ID_MODAL_TITLE);

    let close = document.create_element("button")?;
    close.set_id(ID_MODAL_CLOSE);
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Close")?;
    close.set_inner_html("&times;");

    let modal_body = document.create_element("div")?;
    modal_body.set_id(ID_MODAL_BODY);

    header.append_child(&title)?;
    header.append_child(&close)?;
    content.append_child(&header)?;
    content.append_child(&modal_body)?;
    backdrop.append_child(&content)?;
    body.append_child(&backdrop)?;

    attach_close_button(&close)?;
    attach_focus_trap(&content)?;
    attach_swipe(&header, &content)?;

    Ok((backdrop, content))
}

/// Mirror `AppState::modal` into the DOM.
pub fn render(document: &Document) -> Result<(), JsValue> {
    let (backdrop, content) = ensure_modal(document)?;

    let (is_open, title, body_html, placement) = APP_STATE.with(|state| {
        let state = state.borrow();
        (
            state.modal.is_open,
            state.modal.title.clone(),
            state.modal.body_html.clone(),
            state.modal_placement(),
        )
    });

    reset_drag_style(&content);

    if !is_open {
        dom_utils::hide(&backdrop);
        return Ok(());
    }

    if let Some(title_el) = document.get_element_by_id(ID_MODAL_TITLE) {
        title_el.set_text_content(Some(&title));
    }
    if let Some(body_el) = document.get_element_by_id(ID_MODAL_BODY) {
        // Trusted markup supplied by the page itself.
        body_el.set_inner_html(&body_html);
    }

    content.set_attribute("style", &placement.inline_style())?;
    dom_utils::set_class(&content, CSS_MODAL_MOBILE, placement.is_sheet());
    dom_utils::show(&backdrop);

    let focus_inside = document.active_element().map_or(false, |active| {
        let node: &web_sys::Node = &active;
        content.contains(Some(node))
    });
    if !focus_inside {
        dom_utils::focus_first_interactive(&content);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Dismissal listeners
// ---------------------------------------------------------------------------

/// Close on a pointer-down outside the dialog or on Escape.
pub fn watch_dismissal(document: &Document) -> Result<(), JsValue> {
    let (_, content) = ensure_modal(document)?;
    let detector = OutsideInteraction::install(
        document,
        Some(content),
        Vec::new(),
        Rc::new(|| dispatch_global_message(Message::CloseModal(DismissReason::OutsideClick))),
        Rc::new(|| dispatch_global_message(Message::CloseModal(DismissReason::Escape))),
    )?;
    // Replacing an older detector drops it, which removes its listeners.
    DISMISSAL.with(|slot| slot.replace(Some(detector)));
    Ok(())
}

pub fn unwatch_dismissal() {
    let detector = DISMISSAL.with(|slot| slot.borrow_mut().take());
    drop(detector);
}

// ---------------------------------------------------------------------------
// Scroll lock
// ---------------------------------------------------------------------------

pub fn lock_body_scroll(document: &Document, offset: f64) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    SAVED_BODY_STYLE.with(|saved| {
        let mut saved = saved.borrow_mut();
        if saved.is_none() {
            *saved = Some(dom_utils::read_body_style(&body));
        }
    });
    dom_utils::write_body_style(&body, &BodyStyle::locked(offset))
}

pub fn unlock_body_scroll(document: &Document, offset: f64) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let prior = SAVED_BODY_STYLE
        .with(|saved| saved.borrow_mut().take())
        .unwrap_or_default();
    dom_utils::write_body_style(&body, &prior)?;

    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, offset);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Focus memory
// ---------------------------------------------------------------------------

pub fn capture_focus(document: &Document) {
    let active = focus::active_focusable(document);
    FOCUS_MEMORY.with(|mem| mem.borrow_mut().capture(active));
}

pub fn restore_focus() {
    FOCUS_MEMORY.with(|mem| focus::restore(&mut mem.borrow_mut()));
}

// ---------------------------------------------------------------------------
// One-time wiring
// ---------------------------------------------------------------------------

fn attach_close_button(close: &Element) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: web_sys::MouseEvent| {
        dispatch_global_message(Message::CloseModal(DismissReason::CloseButton));
    }));
    close.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn attach_focus_trap(content: &Element) -> Result<(), JsValue> {
    let container = content.clone();
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
        focus::trap_tab(&container, &e);
    }));
    content.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn attach_swipe(header: &Element, content: &Element) -> Result<(), JsValue> {
    // touchstart – only gestures that begin on the header count
    {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                let gesture = SwipeGesture::begin(touch.client_y() as f64);
                SWIPE.with(|s| s.replace(Some(gesture)));
            }
        }));
        header.add_event_listener_with_callback("touchstart", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // touchmove – follow the finger
    {
        let content = content.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: TouchEvent| {
            let touch = match e.touches().get(0) {
                Some(t) => t,
                None => return,
            };
            let threshold = APP_STATE.with(|s| s.borrow().config.swipe_dismiss_px);
            let frame = SWIPE.with(|s| {
                s.borrow_mut().as_mut().map(|g| {
                    g.move_to(touch.client_y() as f64);
                    (g.offset(), g.opacity(threshold))
                })
            });
            if let Some((offset, opacity)) = frame {
                if let Some(el) = content.dyn_ref::<HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("transition", "none");
                    let _ = style.set_property("translate", &format!("0 {}px", offset));
                    let _ = style.set_property("opacity", &opacity.to_string());
                }
            }
        }));
        header.add_event_listener_with_callback("touchmove", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // touchend – dismiss or snap back
    {
        let content = content.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: TouchEvent| {
            let gesture = match SWIPE.with(|s| s.borrow_mut().take()) {
                Some(g) => g,
                None => return,
            };
            let threshold = APP_STATE.with(|s| s.borrow().config.swipe_dismiss_px);
            match gesture.finish(threshold) {
                SwipeOutcome::Dismiss => {
                    dispatch_global_message(Message::CloseModal(DismissReason::Swipe));
                }
                SwipeOutcome::SnapBack => snap_back(&content),
            }
        }));
        header.add_event_listener_with_callback("touchend", cb.as_ref().unchecked_ref())?;
        header.add_event_listener_with_callback("touchcancel", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

/// Animate the dialog back to rest, then drop the temporary transition.
fn snap_back(content: &Element) {
    let el = match content.dyn_ref::<HtmlElement>() {
        Some(el) => el.clone(),
        None => return,
    };
    let style = el.style();
    let _ = style.set_property(
        "transition",
        &format!(
            "translate {ms}ms ease-out, opacity {ms}ms ease-out",
            ms = SNAP_BACK_TRANSITION_MS
        ),
    );
    let _ = style.remove_property("translate");
    let _ = style.remove_property("opacity");

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(SNAP_BACK_TRANSITION_MS).await;
        let _ = el.style().remove_property("transition");
    });
}

fn reset_drag_style(content: &Element) {
    if let Some(el) = content.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = style.remove_property("translate");
        let _ = style.remove_property("opacity");
        let _ = style.remove_property("transition");
    }
}
