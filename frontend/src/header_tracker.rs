//! Scroll-direction aware visibility for the fixed site header.
//!
//! ```text
//!   y <= style            -> VisibleTop
//!   moving up             -> VisibleStyled
//!   moving down, y > hide -> Hidden
//!   otherwise             -> keep previous visibility
//! ```
//!
//! Scroll events are coalesced: `request_frame()` tells the caller whether a
//! new animation frame must be scheduled and `on_frame()` performs the one
//! sample for that frame, reading the offset at frame time.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
    None,
}

impl ScrollDirection {
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            ScrollDirection::Down
        } else if current < previous {
            ScrollDirection::Up
        } else {
            ScrollDirection::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVisibility {
    VisibleTop,
    VisibleStyled,
    Hidden,
}

/// The read-only pair (plus context) exposed to page scripts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSnapshot {
    pub scroll_y: f64,
    pub direction: ScrollDirection,
    pub is_scrolled: bool,
    pub is_header_visible: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderTracker {
    style_threshold: f64,
    hide_threshold: f64,
    last_y: f64,
    direction: ScrollDirection,
    visible: bool,
    past_style: bool,
    frame_pending: bool,
}

impl HeaderTracker {
    pub fn new(style_threshold: f64, hide_threshold: f64) -> Self {
        Self {
            style_threshold,
            hide_threshold,
            last_y: 0.0,
            direction: ScrollDirection::None,
            visible: true,
            past_style: false,
            frame_pending: false,
        }
    }

    pub fn visibility(&self) -> HeaderVisibility {
        if !self.visible {
            HeaderVisibility::Hidden
        } else if self.past_style {
            HeaderVisibility::VisibleStyled
        } else {
            HeaderVisibility::VisibleTop
        }
    }

    pub fn snapshot(&self) -> HeaderSnapshot {
        HeaderSnapshot {
            scroll_y: self.last_y,
            direction: self.direction,
            is_scrolled: self.past_style,
            is_header_visible: self.visible,
        }
    }

    /// Returns `true` when no frame is pending yet, i.e. the caller has to
    /// schedule one.  Further calls before `on_frame()` return `false`.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Frame callback: clears the pending flag and samples `y`.  Returns the
    /// new visibility when it changed.
    pub fn on_frame(&mut self, y: f64) -> Option<HeaderVisibility> {
        self.frame_pending = false;
        let before = self.visibility();
        let after = self.sample(y);
        (before != after).then_some(after)
    }

    /// Frame callback for a frame whose offset must not be sampled.
    pub fn on_frame_skipped(&mut self) {
        self.frame_pending = false;
    }

    pub fn sample(&mut self, y: f64) -> HeaderVisibility {
        let direction = ScrollDirection::between(self.last_y, y);
        self.past_style = y > self.style_threshold;

        if !self.past_style || direction == ScrollDirection::Up {
            self.visible = true;
        } else if direction == ScrollDirection::Down && y > self.hide_threshold {
            self.visible = false;
        }

        self.direction = direction;
        self.last_y = y;
        self.visibility()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> HeaderTracker {
        HeaderTracker::new(20.0, 100.0)
    }

    #[test]
    fn starts_visible_at_top() {
        let t = tracker();
        assert_eq!(t.visibility(), HeaderVisibility::VisibleTop);
        assert!(t.snapshot().is_header_visible);
        assert!(!t.snapshot().is_scrolled);
    }

    #[test]
    fn hides_past_threshold_and_returns_on_any_upward_move() {
        let mut t = tracker();
        assert_eq!(t.sample(150.0), HeaderVisibility::Hidden);
        assert_eq!(t.sample(140.0), HeaderVisibility::VisibleStyled);
        assert_eq!(t.snapshot().direction, ScrollDirection::Up);
    }

    #[test]
    fn between_thresholds_keeps_previous_visibility() {
        let mut t = tracker();
        assert_eq!(t.sample(60.0), HeaderVisibility::VisibleStyled);
        assert_eq!(t.sample(90.0), HeaderVisibility::VisibleStyled);
        assert_eq!(t.sample(130.0), HeaderVisibility::Hidden);
        // Same offset again: no direction, previous visibility kept.
        assert_eq!(t.sample(130.0), HeaderVisibility::Hidden);
    }

    #[test]
    fn back_at_top_is_always_visible() {
        let mut t = tracker();
        t.sample(500.0);
        assert_eq!(t.sample(10.0), HeaderVisibility::VisibleTop);
        // Overscroll bounce reports negative offsets.
        assert_eq!(t.sample(-30.0), HeaderVisibility::VisibleTop);
    }

    #[test]
    fn frames_are_coalesced() {
        let mut t = tracker();
        assert!(t.request_frame());
        assert!(!t.request_frame());
        assert!(!t.request_frame());
        assert_eq!(t.on_frame(300.0), Some(HeaderVisibility::Hidden));
        assert!(!t.frame_pending());
        assert!(t.request_frame());
        assert_eq!(t.on_frame(310.0), None);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let mut t = tracker();
        t.sample(42.0);
        let json = serde_json::to_value(t.snapshot()).unwrap();
        assert_eq!(json["isScrolled"], true);
        assert_eq!(json["isHeaderVisible"], true);
        assert_eq!(json["direction"], "down");
    }

    #[test]
    fn hidden_only_ever_past_hide_threshold() {
        let mut runner = proptest::test_runner::TestRunner::default();
        let strategy = prop::collection::vec(-50.0f64..2_000.0, 1..60);

        runner
            .run(&strategy, |offsets| {
                let mut t = tracker();
                for y in offsets {
                    let v = t.sample(y);
                    if v == HeaderVisibility::Hidden {
                        prop_assert!(y > 100.0);
                    }
                    if y <= 20.0 {
                        prop_assert_eq!(v, HeaderVisibility::VisibleTop);
                    }
                }
                Ok(())
            })
            .expect("property test failed");
    }
}
