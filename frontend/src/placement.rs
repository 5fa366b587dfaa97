//! Where the modal sits on screen.
//!
//! Desktop: near the click that opened it, clamped so the (estimated) modal
//! height stays inside the viewport.  Mobile: a bottom sheet, origin ignored.

use crate::config::SiteConfig;
use crate::constants::MODAL_MOBILE_BOTTOM_GAP;
use crate::models::{OriginPoint, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalPlacement {
    /// Fixed `top` offset in viewport pixels, horizontally centered.
    Anchored { top: f64 },
    /// No origin known: dead center.
    Centered,
    /// Mobile sheet pinned near the bottom edge.
    BottomSheet,
}

impl ModalPlacement {
    /// Inline style for the `.modal-content` element (positioned `fixed` by
    /// the site stylesheet).
    pub fn inline_style(&self) -> String {
        match self {
            ModalPlacement::Anchored { top } => {
                format!("top: {}px; left: 50%; transform: translateX(-50%);", top)
            }
            ModalPlacement::Centered => {
                "top: 50%; left: 50%; transform: translate(-50%, -50%);".to_string()
            }
            ModalPlacement::BottomSheet => format!(
                "bottom: {}px; left: 50%; transform: translateX(-50%);",
                MODAL_MOBILE_BOTTOM_GAP
            ),
        }
    }

    pub fn is_sheet(&self) -> bool {
        matches!(self, ModalPlacement::BottomSheet)
    }
}

/// `origin` is in document coordinates and `scroll_y` is the page offset at
/// the time of the click, so `origin.y - scroll_y` is the click's viewport y.
pub fn compute_placement(
    origin: Option<OriginPoint>,
    scroll_y: f64,
    viewport: Viewport,
    cfg: &SiteConfig,
) -> ModalPlacement {
    if viewport.is_mobile(cfg.mobile_breakpoint) {
        return ModalPlacement::BottomSheet;
    }

    let origin = match origin {
        Some(o) => o,
        None => return ModalPlacement::Centered,
    };

    let min_top = cfg.modal_margin;
    // Viewports shorter than the modal collapse the range onto the margin.
    let max_top = (viewport.height - cfg.modal_estimated_height - cfg.modal_margin).max(min_top);
    // `f64::clamp` panics on NaN bounds; max/min simply yield the other side.
    let top = (origin.y - scroll_y - cfg.modal_origin_offset)
        .max(min_top)
        .min(max_top);

    ModalPlacement::Anchored { top }
}
