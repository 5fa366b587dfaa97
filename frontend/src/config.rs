//! Interaction tuning knobs.
//!
//! The page may inject `window.SITE_CONFIG = { hideThreshold: 120, ... }`
//! before the module starts.  Every field is optional; anything missing
//! falls back to the defaults in `constants.rs`.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::{
    DEFAULT_FOCUS_DELAY_MS, DEFAULT_HIDE_THRESHOLD, DEFAULT_MOBILE_BREAKPOINT,
    DEFAULT_MODAL_ESTIMATED_HEIGHT, DEFAULT_MODAL_MARGIN, DEFAULT_MODAL_ORIGIN_OFFSET,
    DEFAULT_ORIENTATION_SETTLE_MS, DEFAULT_STYLE_THRESHOLD, DEFAULT_SWIPE_DISMISS_PX,
    SITE_CONFIG_GLOBAL,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Scroll offset past which the header switches to its compact style.
    pub style_threshold: f64,
    /// Scroll offset past which a downward scroll hides the header.
    pub hide_threshold: f64,
    pub focus_delay_ms: u32,
    pub orientation_settle_ms: u32,
    /// Viewports narrower than this use the bottom-sheet modal.
    pub mobile_breakpoint: f64,
    pub swipe_dismiss_px: f64,
    pub modal_estimated_height: f64,
    pub modal_margin: f64,
    pub modal_origin_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            style_threshold: DEFAULT_STYLE_THRESHOLD,
            hide_threshold: DEFAULT_HIDE_THRESHOLD,
            focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
            orientation_settle_ms: DEFAULT_ORIENTATION_SETTLE_MS,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            swipe_dismiss_px: DEFAULT_SWIPE_DISMISS_PX,
            modal_estimated_height: DEFAULT_MODAL_ESTIMATED_HEIGHT,
            modal_margin: DEFAULT_MODAL_MARGIN,
            modal_origin_offset: DEFAULT_MODAL_ORIGIN_OFFSET,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document, e.g. the contents of an inline
    /// `<script type="application/json">` block.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str::<Self>(raw)
            .map(Self::sanitized)
            .map_err(|e| format!("Invalid site config: {}", e))
    }

    /// Convert the JS object the page injected.
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        serde_wasm_bindgen::from_value::<Self>(value)
            .map(Self::sanitized)
            .map_err(|e| format!("Invalid site config: {}", e))
    }

    /// Read `window.SITE_CONFIG`.  Missing global → defaults; malformed
    /// object → warning + defaults.
    pub fn load() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };

        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(SITE_CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }

        match Self::from_js(raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                crate::warn_log!("{} – falling back to defaults", e);
                Self::default()
            }
        }
    }

    /// Replace non-finite numbers with their defaults, then make the
    /// thresholds consistent.  The hide threshold can never sit below the
    /// style threshold, otherwise the header would vanish before it ever got
    /// its compact style.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        for (name, value, fallback) in [
            ("styleThreshold", &mut self.style_threshold, defaults.style_threshold),
            ("hideThreshold", &mut self.hide_threshold, defaults.hide_threshold),
            ("mobileBreakpoint", &mut self.mobile_breakpoint, defaults.mobile_breakpoint),
            ("swipeDismissPx", &mut self.swipe_dismiss_px, defaults.swipe_dismiss_px),
            (
                "modalEstimatedHeight",
                &mut self.modal_estimated_height,
                defaults.modal_estimated_height,
            ),
            ("modalMargin", &mut self.modal_margin, defaults.modal_margin),
            (
                "modalOriginOffset",
                &mut self.modal_origin_offset,
                defaults.modal_origin_offset,
            ),
        ] {
            if !value.is_finite() {
                crate::warn_log!("Site config {} is not a finite number – using {}", name, fallback);
                *value = fallback;
            }
        }

        if self.hide_threshold < self.style_threshold {
            self.hide_threshold = self.style_threshold;
        }
        if self.modal_margin < 0.0 {
            self.modal_margin = 0.0;
        }
        self
    }
}
