//! Sticky site header: class updates plus the frame/timer plumbing behind
//! the scroll tracker.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::constants::{CSS_HEADER_HIDDEN, CSS_HEADER_SCROLLED, ID_SITE_HEADER};
use crate::dom_utils;
use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};

thread_local! {
    static RESAMPLE_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

/// Apply `header--scrolled` / `header--hidden` from state.  Pages without a
/// `#site-header` (404) simply have nothing to update.
pub fn render(document: &Document) {
    let header = match document.get_element_by_id(ID_SITE_HEADER) {
        Some(el) => el,
        None => return,
    };
    let snapshot = APP_STATE.with(|s| s.borrow().header_snapshot());
    dom_utils::set_class(&header, CSS_HEADER_SCROLLED, snapshot.is_scrolled);
    dom_utils::set_class(&header, CSS_HEADER_HIDDEN, !snapshot.is_header_visible);
}

/// One `requestAnimationFrame` that samples the scroll offset at frame time.
pub fn request_frame() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let cb = Closure::once_into_js(move || {
        let scroll_y = web_sys::window()
            .map(|w| dom_utils::scroll_y(&w))
            .unwrap_or(0.0);
        dispatch_global_message(Message::AnimationFrame { scroll_y });
    });
    if let Err(e) = window.request_animation_frame(cb.unchecked_ref()) {
        crate::warn_log!("requestAnimationFrame failed: {:?}", e);
        // Sample right away so the pending flag does not stick.
        dispatch_global_message(Message::AnimationFrame {
            scroll_y: dom_utils::scroll_y(&window),
        });
    }
}

/// Re-measure once an orientation change has settled.  A newer change
/// replaces (and thereby cancels) an older pending one.
pub fn schedule_resample(delay_ms: u32) {
    let timeout = Timeout::new(delay_ms, || {
        if let Some(window) = web_sys::window() {
            dispatch_global_message(Message::ViewportResized(dom_utils::viewport(&window)));
        }
    });
    RESAMPLE_TIMER.with(|t| t.replace(Some(timeout)));
}
