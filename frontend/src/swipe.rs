//! Swipe-down-to-dismiss for the modal header.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Dismiss,
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    start_y: f64,
    offset: f64,
}

impl SwipeGesture {
    pub fn begin(start_y: f64) -> Self {
        Self {
            start_y,
            offset: 0.0,
        }
    }

    /// Track the finger.  Only downward travel counts; dragging up past the
    /// start pins the sheet at rest.
    pub fn move_to(&mut self, y: f64) -> f64 {
        self.offset = (y - self.start_y).max(0.0);
        self.offset
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Opacity to render while dragging: fades out linearly, reaching 0.4
    /// after twice the dismissal distance.
    pub fn opacity(&self, threshold: f64) -> f64 {
        if threshold <= 0.0 {
            return 1.0;
        }
        (1.0 - self.offset / (threshold * 2.0) * 0.6).clamp(0.4, 1.0)
    }

    pub fn finish(&self, threshold: f64) -> SwipeOutcome {
        if self.offset > threshold {
            SwipeOutcome::Dismiss
        } else {
            SwipeOutcome::SnapBack
        }
    }
}
