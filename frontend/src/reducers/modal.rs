//! Modal domain reducer: open/close, scroll lock pairing, viewport changes.

use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Handles modal-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::OpenModal {
            title,
            body_html,
            origin,
            scroll_y,
            viewport,
        } => {
            let was_open = state.modal.is_open;
            if !was_open {
                // Grab the trigger before the modal steals focus.
                commands.push(Command::CaptureFocus);
            }

            state.modal.is_open = true;
            state.modal.title = title.clone();
            state.modal.body_html = body_html.clone();
            state.modal.origin = *origin;
            state.modal.scroll_y = *scroll_y;
            state.viewport = *viewport;

            // While the body is pinned the window reports a zero offset, so
            // only the first open records the one to restore.
            if let Some(offset) = state.scroll_lock.acquire(*scroll_y) {
                commands.push(Command::LockBodyScroll { offset });
            }

            commands.push(Command::RenderModal);
            if !was_open {
                commands.push(Command::WatchModalDismissal);
            }
            debug_log!("Modal opened: '{}' (replaced={})", title, was_open);
            true
        }
        Message::CloseModal(reason) => {
            if !state.modal.is_open {
                return true;
            }

            state.modal.is_open = false;
            state.modal.title.clear();
            state.modal.body_html.clear();
            state.modal.origin = None;

            commands.push(Command::UnwatchModalDismissal);
            commands.push(Command::RenderModal);
            if let Some(offset) = state.scroll_lock.release() {
                commands.push(Command::UnlockBodyScroll { offset });
            }
            commands.push(Command::RestoreFocus);
            debug_log!("Modal closed ({:?})", reason);
            true
        }
        Message::ViewportResized(viewport) => {
            state.viewport = *viewport;
            if state.modal.is_open {
                commands.push(Command::RenderModal);
            }
            // Resizes can move the scroll offset as well.
            commands.push(Command::send(Message::ScrollEvent));
            true
        }
        _ => false,
    }
}
