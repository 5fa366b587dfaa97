use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

#[macro_use]
pub mod macros;

pub mod arena;
mod command_executors;
pub mod components;
pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod focus;
pub mod header_tracker;
pub mod messages; // Message / Command enums
pub mod models;
pub mod outside;
pub mod placement;
pub mod reducers;
pub mod scroll_lock;
pub mod state;
pub mod swipe;
pub mod toggle_set;
mod ui;
pub mod update; // Root update function

#[cfg(test)]
mod tests;

use crate::config::SiteConfig;
use crate::messages::Message;
use crate::models::{DismissReason, ToggleGroup};
use crate::state::{dispatch_global_message, APP_STATE};

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    state::init_app_state(SiteConfig::load());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Modal markup first so dismissal / focus wiring has something to hold.
    components::modal::ensure_modal(&document)?;
    components::panels::setup_panels(&document)?;
    components::reveal::setup_reveal(&document)?;
    ui::events::setup_ui_event_handlers(&window, &document)?;

    // Initial measurement: stores the viewport and samples the offset the
    // page was restored at.
    dispatch_global_message(Message::ViewportResized(dom_utils::viewport(&window)));

    debug_log!("Interaction coordinator ready");
    Ok(())
}

// ---------------------------------------------------------------------------
// JS-facing API
// ---------------------------------------------------------------------------

/// Open the page modal.  `body_html` must be trusted markup.  When
/// `origin_event` is given the modal is anchored near its coordinates.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(title: String, body_html: String, origin_event: Option<MouseEvent>) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let origin = origin_event.as_ref().map(ui::events::event_origin);
    let msg = ui::events::open_modal_message(&window, title, body_html, origin);
    dispatch_global_message(msg);
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    dispatch_global_message(Message::CloseModal(DismissReason::Api));
}

#[wasm_bindgen]
pub fn toggle(group: &str, index: usize) -> Result<(), JsValue> {
    let group = group.parse::<ToggleGroup>().map_err(|e| JsValue::from_str(&e))?;
    dispatch_global_message(Message::ToggleItem { group, index });
    Ok(())
}

#[wasm_bindgen(js_name = isExpanded)]
pub fn is_expanded(group: &str, index: usize) -> bool {
    match group.parse::<ToggleGroup>() {
        Ok(group) => APP_STATE.with(|s| s.borrow().is_expanded(group, index)),
        Err(e) => {
            warn_log!("{}", e);
            false
        }
    }
}

/// `{ isScrolled, isHeaderVisible, scrollY, direction }`
#[wasm_bindgen(js_name = headerState)]
pub fn header_state() -> Result<JsValue, JsValue> {
    let snapshot = APP_STATE.with(|s| s.borrow().header_snapshot());
    serde_wasm_bindgen::to_value(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
}
