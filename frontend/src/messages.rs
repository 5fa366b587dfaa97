// frontend/src/messages.rs
//
// Everything that can happen to the interaction state, plus the side
// effects the reducers ask for.
//
use crate::models::{DismissReason, OriginPoint, ToggleGroup, Viewport};
use crate::toggle_set::FocusTicket;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Modal
    OpenModal {
        title: String,
        body_html: String,
        origin: Option<OriginPoint>,
        scroll_y: f64,
        viewport: Viewport,
    },
    CloseModal(DismissReason),

    // Expandable panels
    ToggleItem {
        group: ToggleGroup,
        index: usize,
    },
    CollapseGroup(ToggleGroup),
    FocusTransferDue(FocusTicket),

    // Header
    ScrollEvent,                         // raw scroll / resize notification
    AnimationFrame { scroll_y: f64 },    // coalesced sample
    OrientationChanged,
    ViewportResized(Viewport),
}

/// Commands represent side effects that should be executed after state updates.
/// This separates pure state changes from effects like DOM writes and timers.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Chain another message to be processed
    SendMessage(Message),

    /// Pin `<body>` at the given offset
    LockBodyScroll { offset: f64 },
    /// Restore body styles and scroll back to `offset`
    UnlockBodyScroll { offset: f64 },

    /// Remember `document.activeElement` for later
    CaptureFocus,
    /// Focus the remembered element again
    RestoreFocus,

    /// Re-render the modal from state
    RenderModal,
    /// Install / remove the modal's outside-click + Escape listeners
    WatchModalDismissal,
    UnwatchModalDismissal,

    /// Re-render every panel of a group
    RenderGroup(ToggleGroup),
    /// Start the delayed focus move into a freshly expanded panel
    ScheduleFocusTransfer { ticket: FocusTicket, delay_ms: u32 },
    /// Drop any pending focus move for the group
    CancelFocusTransfer(ToggleGroup),
    /// Focus the first focusable element inside a panel
    FocusPanel { group: ToggleGroup, index: usize },
    /// Install / remove popover-style dismissal for a group
    WatchGroupDismissal { group: ToggleGroup, index: usize },
    UnwatchGroupDismissal(ToggleGroup),

    /// Ask the browser for an animation frame that samples the scroll offset
    RequestAnimationFrame,
    /// Sample again once the orientation change has settled
    ScheduleResample { delay_ms: u32 },
    /// Apply header classes from state
    RenderHeader,
}

impl Command {
    /// Helper to create a SendMessage command
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(msg)
    }
}
