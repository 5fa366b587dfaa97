//! Header domain reducer: frame-coalesced scroll sampling.

use crate::messages::{Command, Message};
use crate::state::AppState;

/// Handles header-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ScrollEvent => {
            if state.header.request_frame() {
                commands.push(Command::RequestAnimationFrame);
            }
            true
        }
        Message::AnimationFrame { scroll_y } => {
            // The body is pinned while the modal is open and reports 0;
            // sampling that would flash the header back to its top style.
            if state.scroll_lock.is_held() {
                state.header.on_frame_skipped();
                return true;
            }
            if state.header.on_frame(*scroll_y).is_some() {
                commands.push(Command::RenderHeader);
            }
            true
        }
        Message::OrientationChanged => {
            commands.push(Command::ScheduleResample {
                delay_ms: state.config.orientation_settle_ms,
            });
            true
        }
        _ => false,
    }
}
