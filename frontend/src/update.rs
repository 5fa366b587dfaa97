// frontend/src/update.rs
//
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new(); // Collect commands to return

    // ---------------------------------------------------------------
    // Delegate to domain-specific reducers.  The first one that
    // consumes the message wins.
    // ---------------------------------------------------------------

    if crate::reducers::modal::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::panels::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::header::update(state, &msg, &mut commands) {
        return commands;
    }

    crate::warn_log!("Unhandled message: {:?}", msg);
    commands
}
