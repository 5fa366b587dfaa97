//! Panel domain reducer: exclusive expand/collapse per group, delayed focus
//! transfer and popover-style dismissal for staff bios.

use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::toggle_set::ToggleOutcome;

/// Handles panel-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ToggleItem { group, index } => {
            let group = *group;
            let focus_delay = state.config.focus_delay_ms;

            // Whatever was pending belongs to the previous expansion.
            commands.push(Command::CancelFocusTransfer(group));

            match state.panels.get_mut(group).toggle(*index) {
                ToggleOutcome::Expanded {
                    index,
                    previous,
                    ticket,
                } => {
                    if group.dismiss_on_outside() {
                        if previous.is_some() {
                            commands.push(Command::UnwatchGroupDismissal(group));
                        }
                        commands.push(Command::WatchGroupDismissal { group, index });
                    }
                    if let Some(ticket) = ticket {
                        commands.push(Command::ScheduleFocusTransfer {
                            ticket,
                            delay_ms: focus_delay,
                        });
                    }
                    debug_log!("{} #{} expanded (previous: {:?})", group, index, previous);
                }
                ToggleOutcome::Collapsed { index } => {
                    if group.dismiss_on_outside() {
                        commands.push(Command::UnwatchGroupDismissal(group));
                    }
                    debug_log!("{} #{} collapsed", group, index);
                }
            }

            commands.push(Command::RenderGroup(group));
            true
        }
        Message::CollapseGroup(group) => {
            if let Some(index) = state.panels.get_mut(*group).collapse() {
                commands.push(Command::CancelFocusTransfer(*group));
                if group.dismiss_on_outside() {
                    commands.push(Command::UnwatchGroupDismissal(*group));
                }
                commands.push(Command::RenderGroup(*group));
                debug_log!("{} #{} dismissed", group, index);
            }
            true
        }
        Message::FocusTransferDue(ticket) => {
            if state.panels.get(ticket.group).ticket_is_current(ticket) {
                commands.push(Command::FocusPanel {
                    group: ticket.group,
                    index: ticket.index,
                });
            } else {
                debug_log!("Dropping stale focus transfer for {} #{}", ticket.group, ticket.index);
            }
            true
        }
        _ => false,
    }
}
