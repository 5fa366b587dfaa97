//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for show / hide / expand patterns and the body style
//! juggling of the scroll lock, so the rest of the crate does not sprinkle
//! `set_attribute("style", …)` calls everywhere.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Window};

use crate::constants::{ATTR_ARIA_EXPANDED, CSS_PANEL_EXPANDED, FOCUSABLE_SELECTOR};
use crate::models::Viewport;
use crate::scroll_lock::BodyStyle;

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Add or remove a single class.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Panel expanded/collapsed: `expanded` class plus the `hidden` attribute
/// so collapsed content drops out of the tab order.
pub fn set_panel_expanded(panel: &Element, expanded: bool) {
    set_class(panel, CSS_PANEL_EXPANDED, expanded);
    if expanded {
        let _ = panel.remove_attribute("hidden");
    } else {
        let _ = panel.set_attribute("hidden", "");
    }
}

/// Mirror panel state on its trigger for assistive tech.
pub fn set_trigger_expanded(trigger: &Element, expanded: bool) {
    let _ = trigger.set_attribute(ATTR_ARIA_EXPANDED, if expanded { "true" } else { "false" });
}

/// Parse a numeric data attribute, e.g. `data-panel-index="2"`.
pub fn index_attribute(el: &Element, name: &str) -> Option<usize> {
    el.get_attribute(name)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
}

// ---------------------------------------------------------------------------
// Focus Management Utilities
// ---------------------------------------------------------------------------

/// Get all focusable elements within a container, in document order.
pub fn get_focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let mut focusable = Vec::new();
    let list = match container.query_selector_all(FOCUSABLE_SELECTOR) {
        Ok(list) => list,
        Err(_) => return focusable,
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                focusable.push(el);
            }
        }
    }
    focusable
}

/// Focus the first interactive element within the given container.
/// Returns true if an element was focused, false otherwise.
pub fn focus_first_interactive(container: &Element) -> bool {
    match get_focusable_elements(container).first() {
        Some(el) => el.focus().is_ok(),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Window metrics
// ---------------------------------------------------------------------------

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport(window: &Window) -> Viewport {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
    let fallback = Viewport::default();
    Viewport {
        width: read(window.inner_width()).unwrap_or(fallback.width),
        height: read(window.inner_height()).unwrap_or(fallback.height),
    }
}

// ---------------------------------------------------------------------------
// Body style (scroll lock)
// ---------------------------------------------------------------------------

pub fn read_body_style(body: &HtmlElement) -> BodyStyle {
    let style = body.style();
    let get = |name: &str| style.get_property_value(name).unwrap_or_default();
    BodyStyle {
        position: get("position"),
        top: get("top"),
        width: get("width"),
        overflow: get("overflow"),
    }
}

/// Write the four lock properties.  Empty values remove the property so an
/// originally unset style really ends up unset again.
pub fn write_body_style(body: &HtmlElement, values: &BodyStyle) -> Result<(), JsValue> {
    let style = body.style();
    for (name, value) in [
        ("position", &values.position),
        ("top", &values.top),
        ("width", &values.width),
        ("overflow", &values.overflow),
    ] {
        if value.is_empty() {
            style.remove_property(name)?;
        } else {
            style.set_property(name, value)?;
        }
    }
    Ok(())
}
