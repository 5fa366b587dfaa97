//! Body scroll lock bookkeeping.
//!
//! Locking pins `<body>` with `position: fixed` and a negative `top` equal to
//! the current scroll offset, so the page keeps its visual position while the
//! modal is up.  While the body is pinned `window.scrollY` reads 0, which is
//! why a second acquire must never overwrite the recorded offset.

/// Inline body styles touched by the lock.  Captured before locking and put
/// back verbatim on release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyStyle {
    pub position: String,
    pub top: String,
    pub width: String,
    pub overflow: String,
}

impl BodyStyle {
    pub fn locked(offset: f64) -> Self {
        let top = if offset > 0.0 {
            format!("-{}px", offset)
        } else {
            "0px".to_string()
        };
        Self {
            position: "fixed".to_string(),
            top,
            width: "100%".to_string(),
            overflow: "hidden".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollLock {
    offset: Option<f64>,
}

impl ScrollLock {
    pub fn is_held(&self) -> bool {
        self.offset.is_some()
    }

    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// Take the lock at `scroll_y`.  Returns the offset to apply, or `None`
    /// when the lock is already held.
    pub fn acquire(&mut self, scroll_y: f64) -> Option<f64> {
        if self.offset.is_some() {
            return None;
        }
        let offset = scroll_y.max(0.0);
        self.offset = Some(offset);
        Some(offset)
    }

    /// Drop the lock.  Returns the offset the page must scroll back to, or
    /// `None` when nothing was held.
    pub fn release(&mut self) -> Option<f64> {
        self.offset.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_keeps_first_offset() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.acquire(640.0), Some(640.0));
        // Body is pinned now, so the window reports 0.
        assert_eq!(lock.acquire(0.0), None);
        assert_eq!(lock.release(), Some(640.0));
    }

    #[test]
    fn release_is_idempotent() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.release(), None);
        lock.acquire(12.0);
        assert!(lock.is_held());
        lock.release();
        assert_eq!(lock.release(), None);
        assert!(!lock.is_held());
    }

    #[test]
    fn locked_style_pins_body() {
        let style = BodyStyle::locked(250.0);
        assert_eq!(style.position, "fixed");
        assert_eq!(style.top, "-250px");
        assert_eq!(BodyStyle::locked(-4.0).top, "0px");
    }
}
