//! Focus restoration and Tab trapping for overlays.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom_utils;

/// Remembers what had focus before a region opened.  Generic over the
/// handle type so the bookkeeping can be tested without a DOM.
#[derive(Debug, Clone)]
pub struct FocusMemory<T> {
    restore_focus: bool,
    saved: Option<T>,
}

impl<T> Default for FocusMemory<T> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> FocusMemory<T> {
    pub fn new(restore_focus: bool) -> Self {
        Self {
            restore_focus,
            saved: None,
        }
    }

    /// Record `active`.  A second capture while something is already saved
    /// keeps the first one: that is the element focus has to go back to.
    pub fn capture(&mut self, active: Option<T>) {
        if !self.restore_focus || self.saved.is_some() {
            return;
        }
        self.saved = active;
    }

    /// Consume the saved handle.
    pub fn take(&mut self) -> Option<T> {
        self.saved.take()
    }

    pub fn is_holding(&self) -> bool {
        self.saved.is_some()
    }
}

/// Where focus must jump when Tab is pressed inside a trap of `len`
/// focusable elements.  `None` means "let the browser move focus normally".
pub fn wrap_focus_index(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, backwards) {
        // Focus escaped the container: pull it back in at the matching end.
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// DOM side
// ---------------------------------------------------------------------------

/// Active element if it is an `HTMLElement` other than `<body>`.
pub fn active_focusable(document: &Document) -> Option<HtmlElement> {
    let active = document.active_element()?;
    if active.tag_name().eq_ignore_ascii_case("body") {
        return None;
    }
    active.dyn_into::<HtmlElement>().ok()
}

/// Put focus back.  Detached elements or a throwing `focus()` are logged and
/// swallowed.
pub fn restore(memory: &mut FocusMemory<HtmlElement>) {
    let el = match memory.take() {
        Some(el) => el,
        None => return,
    };
    if !el.is_connected() {
        crate::warn_log!("Focus restore skipped: element is no longer in the document");
        return;
    }
    if let Err(e) = el.focus() {
        crate::warn_log!("Focus restore failed: {:?}", e);
    }
}

/// Keydown handler body for a focus trap around `container`.  The focusable
/// list is queried on every Tab since the content can change while the trap
/// is active.
pub fn trap_tab(container: &Element, event: &KeyboardEvent) {
    if event.key() != "Tab" {
        return;
    }
    let focusable = dom_utils::get_focusable_elements(container);
    let current = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .and_then(|active| {
            focusable.iter().position(|el| {
                let el: &Element = el;
                *el == active
            })
        });

    if let Some(target) = wrap_focus_index(focusable.len(), current, event.shift_key()) {
        event.prevent_default();
        if let Err(e) = focusable[target].focus() {
            crate::warn_log!("Focus trap could not move focus: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_then_take() {
        let mut mem = FocusMemory::new(true);
        mem.capture(Some("read-more-3"));
        assert!(mem.is_holding());
        assert_eq!(mem.take(), Some("read-more-3"));
        assert_eq!(mem.take(), None);
    }

    #[test]
    fn first_capture_wins_until_consumed() {
        let mut mem = FocusMemory::new(true);
        mem.capture(Some("trigger"));
        mem.capture(Some("modal-close"));
        assert_eq!(mem.take(), Some("trigger"));
    }

    #[test]
    fn disabled_memory_never_holds() {
        let mut mem = FocusMemory::new(false);
        mem.capture(Some(1));
        assert!(!mem.is_holding());
    }

    #[test]
    fn tab_wraps_at_boundaries_only() {
        assert_eq!(wrap_focus_index(3, Some(2), false), Some(0));
        assert_eq!(wrap_focus_index(3, Some(0), true), Some(2));
        assert_eq!(wrap_focus_index(3, Some(1), false), None);
        assert_eq!(wrap_focus_index(3, Some(1), true), None);
    }

    #[test]
    fn focus_outside_container_is_pulled_back() {
        assert_eq!(wrap_focus_index(4, None, false), Some(0));
        assert_eq!(wrap_focus_index(4, None, true), Some(3));
        assert_eq!(wrap_focus_index(0, None, false), None);
    }

    #[test]
    fn single_element_always_wraps_to_itself() {
        assert_eq!(wrap_focus_index(1, Some(0), false), Some(0));
        assert_eq!(wrap_focus_index(1, Some(0), true), Some(0));
    }
}
