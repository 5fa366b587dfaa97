use crate::components::{header, modal, panels};
use crate::debug_log;
use crate::messages::Command;
use crate::state::dispatch_global_message;

/// Run one side effect requested by a reducer.  Called with no borrow of
/// `APP_STATE` held, so executors may read state or dispatch again.
pub fn execute(cmd: Command) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            debug_log!("No document – skipping {:?}", cmd);
            return;
        }
    };

    match cmd {
        Command::SendMessage(msg) => dispatch_global_message(msg),

        Command::LockBodyScroll { offset } => {
            if let Err(e) = modal::lock_body_scroll(&document, offset) {
                crate::error_log!("Failed to lock body scroll: {:?}", e);
            }
        }
        Command::UnlockBodyScroll { offset } => {
            if let Err(e) = modal::unlock_body_scroll(&document, offset) {
                crate::error_log!("Failed to release body scroll lock: {:?}", e);
            }
        }

        Command::CaptureFocus => modal::capture_focus(&document),
        Command::RestoreFocus => modal::restore_focus(),

        Command::RenderModal => {
            if let Err(e) = modal::render(&document) {
                crate::error_log!("Failed to render modal: {:?}", e);
            }
        }
        Command::WatchModalDismissal => {
            if let Err(e) = modal::watch_dismissal(&document) {
                crate::error_log!("Failed to install modal dismissal listeners: {:?}", e);
            }
        }
        Command::UnwatchModalDismissal => modal::unwatch_dismissal(),

        Command::RenderGroup(group) => panels::render_group(group),
        Command::ScheduleFocusTransfer { ticket, delay_ms } => {
            panels::schedule_focus_transfer(ticket, delay_ms)
        }
        Command::CancelFocusTransfer(group) => panels::cancel_focus_transfer(group),
        Command::FocusPanel { group, index } => panels::focus_panel(group, index),
        Command::WatchGroupDismissal { group, index } => {
            if let Err(e) = panels::watch_dismissal(&document, group, index) {
                crate::error_log!("Failed to install dismissal listeners for {}: {:?}", group, e);
            }
        }
        Command::UnwatchGroupDismissal(group) => panels::unwatch_dismissal(group),

        Command::RequestAnimationFrame => header::request_frame(),
        Command::ScheduleResample { delay_ms } => header::schedule_resample(delay_ms),
        Command::RenderHeader => header::render(&document),
    }
}
