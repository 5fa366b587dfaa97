//! Outside-interaction detection (click/tap elsewhere, Escape).
//!
//! `OutsideInteraction` listens on `document` for `mousedown`, `touchstart`
//! and `keydown`.  Handlers run in a microtask rather than inside the DOM
//! callback: they usually dispatch a message whose side effects tear this
//! very detector down, and a closure must not be dropped while it runs.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, Node};

const POINTER_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Decide whether an interaction happened outside.  `contains(r)` answers
/// "is the event target inside `r`".  A missing primary counts as outside:
/// detection fails open instead of swallowing the dismissal.
pub fn is_outside<R>(primary: Option<&R>, excluded: &[R], contains: impl Fn(&R) -> bool) -> bool {
    match primary {
        None => true,
        Some(p) => !contains(p) && !excluded.iter().any(|r| contains(r)),
    }
}

pub struct OutsideInteraction {
    target: EventTarget,
    pointer_cb: Closure<dyn FnMut(Event)>,
    key_cb: Closure<dyn FnMut(KeyboardEvent)>,
    attached: bool,
}

impl OutsideInteraction {
    pub fn install(
        document: &Document,
        primary: Option<Element>,
        excluded: Vec<Element>,
        on_outside: Rc<dyn Fn()>,
        on_escape: Rc<dyn Fn()>,
    ) -> Result<Self, JsValue> {
        let pointer_cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: Event| {
            let node = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let outside = is_outside(primary.as_ref(), &excluded, |el: &Element| {
                node.as_ref().map_or(false, |n| el.contains(Some(n)))
            });
            if outside {
                let handler = on_outside.clone();
                wasm_bindgen_futures::spawn_local(async move { handler() });
            }
        }));

        let key_cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                let handler = on_escape.clone();
                wasm_bindgen_futures::spawn_local(async move { handler() });
            }
        }));

        let target: EventTarget = document.clone().into();
        for name in POINTER_EVENTS {
            target.add_event_listener_with_callback(name, pointer_cb.as_ref().unchecked_ref())?;
        }
        target.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())?;

        Ok(Self {
            target,
            pointer_cb,
            key_cb,
            attached: true,
        })
    }

    /// Remove every listener.  Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.attached {
            return;
        }
        for name in POINTER_EVENTS {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, self.pointer_cb.as_ref().unchecked_ref());
        }
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.key_cb.as_ref().unchecked_ref());
        self.attached = false;
    }
}

impl Drop for OutsideInteraction {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Axis-aligned box standing in for an element.
    struct Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    }

    fn hit(px: f64, py: f64) -> impl Fn(&Rect) -> bool {
        move |r: &Rect| px >= r.x && px <= r.x + r.w && py >= r.y && py <= r.y + r.h
    }

    fn modal() -> Rect {
        Rect { x: 100.0, y: 100.0, w: 400.0, h: 300.0 }
    }

    #[test]
    fn click_on_primary_is_inside() {
        assert!(!is_outside(Some(&modal()), &[], hit(150.0, 150.0)));
    }

    #[test]
    fn click_elsewhere_is_outside() {
        assert!(is_outside(Some(&modal()), &[], hit(10.0, 10.0)));
    }

    #[test]
    fn excluded_regions_do_not_dismiss() {
        let trigger = Rect { x: 0.0, y: 0.0, w: 50.0, h: 20.0 };
        assert!(!is_outside(Some(&modal()), &[trigger], hit(10.0, 10.0)));
    }

    #[test]
    fn missing_primary_fails_open() {
        let none: Option<&Rect> = None;
        assert!(is_outside(none, &[], hit(150.0, 150.0)));
    }
}
