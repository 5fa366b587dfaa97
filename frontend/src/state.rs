use std::cell::RefCell;

use crate::config::SiteConfig;
use crate::header_tracker::{HeaderSnapshot, HeaderTracker};
use crate::messages::{Command, Message};
use crate::models::{ModalState, ToggleGroup, Viewport};
use crate::placement::{compute_placement, ModalPlacement};
use crate::scroll_lock::ScrollLock;
use crate::toggle_set::ToggleGroups;
use crate::update::update;

// Store global interaction state
pub struct AppState {
    pub config: SiteConfig,
    // The single page-level modal
    pub modal: ModalState,
    // Held iff the modal is open
    pub scroll_lock: ScrollLock,
    // One exclusive toggle set per panel group
    pub panels: ToggleGroups,
    // Sticky header visibility
    pub header: HeaderTracker,
    // Last known window size
    pub viewport: Viewport,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(SiteConfig::default())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        let header = HeaderTracker::new(config.style_threshold, config.hide_threshold);
        Self {
            config,
            modal: ModalState::default(),
            scroll_lock: ScrollLock::default(),
            panels: ToggleGroups::default(),
            header,
            viewport: Viewport::default(),
        }
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    pub fn is_expanded(&self, group: ToggleGroup, index: usize) -> bool {
        self.panels.is_expanded(group, index)
    }

    pub fn header_snapshot(&self) -> HeaderSnapshot {
        self.header.snapshot()
    }

    /// Placement for the modal as it is currently stored.
    pub fn modal_placement(&self) -> ModalPlacement {
        compute_placement(
            self.modal.origin,
            self.modal.scroll_y,
            self.viewport,
            &self.config,
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Replace the global state, e.g. once the page config has been read.
pub fn init_app_state(config: SiteConfig) {
    APP_STATE.with(|state| {
        *crate::mut_borrow!(state) = AppState::with_config(config);
    });
}

// Global helper function for dispatching messages.  The mutable borrow is
// released before any command runs, so executors are free to read state or
// dispatch follow-up messages.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| crate::mut_borrow!(state).dispatch(msg));
    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
