//! Expandable panel groups (services, technology, staff bios, values).
//!
//! Markup contract:
//!
//! ```html
//! <button data-toggle-group="services" data-toggle-index="0">Implants</button>
//! <div data-panel-group="services" data-panel-index="0" hidden>…</div>
//! ```
//!
//! Panels and triggers are kept in per-group arenas keyed by their index.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::arena::HandleArena;
use crate::constants::{
    ATTR_PANEL_GROUP, ATTR_PANEL_INDEX, ATTR_TOGGLE_GROUP, ATTR_TOGGLE_INDEX, MAX_PANEL_INDEX,
};
use crate::dom_utils;
use crate::messages::Message;
use crate::models::ToggleGroup;
use crate::outside::OutsideInteraction;
use crate::state::{dispatch_global_message, APP_STATE};
use crate::toggle_set::FocusTicket;

thread_local! {
    static PANELS: RefCell<HashMap<ToggleGroup, HandleArena<Element>>> = RefCell::new(HashMap::new());
    static TRIGGERS: RefCell<HashMap<ToggleGroup, HandleArena<Element>>> = RefCell::new(HashMap::new());
    static FOCUS_TIMERS: RefCell<HashMap<ToggleGroup, Timeout>> = RefCell::new(HashMap::new());
    static DISMISSAL: RefCell<HashMap<ToggleGroup, OutsideInteraction>> = RefCell::new(HashMap::new());
}

/// Scan the document for panels and triggers, wire the triggers and render
/// every group once so markup and state agree from the start.
pub fn setup_panels(document: &Document) -> Result<(), JsValue> {
    for (el, group, index) in collect(document, ATTR_PANEL_GROUP, ATTR_PANEL_INDEX)? {
        register_panel(group, index, el);
    }

    for (el, group, index) in collect(document, ATTR_TOGGLE_GROUP, ATTR_TOGGLE_INDEX)? {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            dispatch_global_message(Message::ToggleItem { group, index });
        }));
        el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
        TRIGGERS.with(|t| t.borrow_mut().entry(group).or_default().register(index, el));
    }

    for group in ToggleGroup::ALL {
        render_group(group);
    }
    Ok(())
}

/// Elements carrying both a known group name and a numeric index.
fn collect(
    document: &Document,
    group_attr: &str,
    index_attr: &str,
) -> Result<Vec<(Element, ToggleGroup, usize)>, JsValue> {
    let list = document.query_selector_all(&format!("[{}]", group_attr))?;
    let mut found = Vec::new();
    for i in 0..list.length() {
        let el = match list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let group = match el.get_attribute(group_attr).map(|g| g.parse::<ToggleGroup>()) {
            Some(Ok(group)) => group,
            Some(Err(e)) => {
                crate::warn_log!("Skipping element: {}", e);
                continue;
            }
            None => continue,
        };
        match dom_utils::index_attribute(&el, index_attr) {
            Some(index) if index <= MAX_PANEL_INDEX => found.push((el, group, index)),
            Some(index) => crate::warn_log!(
                "Skipping {} element: {}={} exceeds {}",
                group,
                index_attr,
                index,
                MAX_PANEL_INDEX
            ),
            None => crate::warn_log!("Skipping {} element without a valid {}", group, index_attr),
        }
    }
    Ok(found)
}

pub fn register_panel(group: ToggleGroup, index: usize, panel: Element) {
    PANELS.with(|p| {
        p.borrow_mut().entry(group).or_default().register(index, panel);
    });
}

pub fn unregister_panel(group: ToggleGroup, index: usize) -> Option<Element> {
    PANELS.with(|p| p.borrow_mut().get_mut(&group).and_then(|a| a.unregister(index)))
}

fn panel(group: ToggleGroup, index: usize) -> Option<Element> {
    PANELS.with(|p| p.borrow().get(&group).and_then(|a| a.get(index).cloned()))
}

fn trigger(group: ToggleGroup, index: usize) -> Option<Element> {
    TRIGGERS.with(|t| t.borrow().get(&group).and_then(|a| a.get(index).cloned()))
}

/// Mirror the group's expanded index onto its panels and triggers.
pub fn render_group(group: ToggleGroup) {
    let expanded = APP_STATE.with(|s| s.borrow().panels.get(group).expanded());

    PANELS.with(|p| {
        if let Some(arena) = p.borrow().get(&group) {
            for (index, el) in arena.iter() {
                dom_utils::set_panel_expanded(el, expanded == Some(index));
            }
        }
    });
    TRIGGERS.with(|t| {
        if let Some(arena) = t.borrow().get(&group) {
            for (index, el) in arena.iter() {
                dom_utils::set_trigger_expanded(el, expanded == Some(index));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Delayed focus transfer
// ---------------------------------------------------------------------------

pub fn schedule_focus_transfer(ticket: FocusTicket, delay_ms: u32) {
    let timeout = Timeout::new(delay_ms, move || {
        dispatch_global_message(Message::FocusTransferDue(ticket));
    });
    // Dropping a previous timeout for the group cancels it.
    FOCUS_TIMERS.with(|t| t.borrow_mut().insert(ticket.group, timeout));
}

pub fn cancel_focus_transfer(group: ToggleGroup) {
    let pending = FOCUS_TIMERS.with(|t| t.borrow_mut().remove(&group));
    drop(pending);
}

/// Move focus into an expanded panel: its first focusable child, or the
/// panel itself when it has none.
pub fn focus_panel(group: ToggleGroup, index: usize) {
    let el = match panel(group, index) {
        Some(el) => el,
        None => {
            crate::debug_log!("No panel registered for {} #{}", group, index);
            return;
        }
    };
    if dom_utils::focus_first_interactive(&el) {
        return;
    }
    if !el.has_attribute("tabindex") {
        let _ = el.set_attribute("tabindex", "-1");
    }
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        if let Err(e) = html.focus() {
            crate::warn_log!("Could not focus {} #{}: {:?}", group, index, e);
        }
    }
}

// ---------------------------------------------------------------------------
// Popover-style dismissal
// ---------------------------------------------------------------------------

/// Collapse the group on a click outside the open panel (its trigger does
/// not count) or on Escape.
pub fn watch_dismissal(document: &Document, group: ToggleGroup, index: usize) -> Result<(), JsValue> {
    let excluded = trigger(group, index).into_iter().collect();
    let collapse: Rc<dyn Fn()> = Rc::new(move || {
        dispatch_global_message(Message::CollapseGroup(group));
    });
    let detector = OutsideInteraction::install(
        document,
        panel(group, index),
        excluded,
        collapse.clone(),
        collapse,
    )?;
    DISMISSAL.with(|d| d.borrow_mut().insert(group, detector));
    Ok(())
}

pub fn unwatch_dismissal(group: ToggleGroup) {
    let detector = DISMISSAL.with(|d| d.borrow_mut().remove(&group));
    drop(detector);
}
