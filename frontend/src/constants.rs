// Default values for interaction tuning - these are the single source of truth for defaults
pub const DEFAULT_STYLE_THRESHOLD: f64 = 20.0;
pub const DEFAULT_HIDE_THRESHOLD: f64 = 100.0;
pub const DEFAULT_FOCUS_DELAY_MS: u32 = 350; // must outlast the expand transition
pub const DEFAULT_ORIENTATION_SETTLE_MS: u32 = 100;
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_SWIPE_DISMISS_PX: f64 = 100.0;

// Modal placement defaults
pub const DEFAULT_MODAL_ESTIMATED_HEIGHT: f64 = 400.0;
pub const DEFAULT_MODAL_MARGIN: f64 = 20.0;
pub const DEFAULT_MODAL_ORIGIN_OFFSET: f64 = 100.0;
pub const MODAL_MOBILE_BOTTOM_GAP: f64 = 16.0;
pub const SNAP_BACK_TRANSITION_MS: u32 = 200;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Global config object injected by the page before the module loads
pub const SITE_CONFIG_GLOBAL: &str = "SITE_CONFIG";

// Element ids
pub const ID_SITE_HEADER: &str = "site-header";
pub const ID_MODAL: &str = "site-modal";
pub const ID_MODAL_TITLE: &str = "site-modal-title";
pub const ID_MODAL_BODY: &str = "site-modal-body";
pub const ID_MODAL_CLOSE: &str = "site-modal-close";

// CSS classes
pub const CSS_MODAL: &str = "modal";
pub const CSS_MODAL_CONTENT: &str = "modal-content";
pub const CSS_MODAL_HEADER: &str = "modal-header";
pub const CSS_MODAL_MOBILE: &str = "modal-content--sheet";
pub const CSS_HEADER_SCROLLED: &str = "header--scrolled";
pub const CSS_HEADER_HIDDEN: &str = "header--hidden";
pub const CSS_PANEL_EXPANDED: &str = "expanded";
pub const CSS_REVEALED: &str = "is-visible";

// Data attributes used by the static markup
pub const ATTR_MODAL_TITLE: &str = "data-modal-title";
pub const ATTR_MODAL_TEMPLATE: &str = "data-modal-template";
pub const ATTR_TOGGLE_GROUP: &str = "data-toggle-group";
pub const ATTR_TOGGLE_INDEX: &str = "data-toggle-index";
pub const ATTR_PANEL_GROUP: &str = "data-panel-group";
pub const ATTR_PANEL_INDEX: &str = "data-panel-index";
/// Highest `data-panel-index` / `data-toggle-index` accepted from markup.
pub const MAX_PANEL_INDEX: usize = 255;
pub const ATTR_REVEAL: &str = "data-reveal";
pub const ATTR_ARIA_EXPANDED: &str = "aria-expanded";

pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";
