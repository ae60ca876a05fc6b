use crate::{DelayRange, Epoch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::TimerFired { epoch }` after a delay drawn from `delay`.
    ScheduleWake { epoch: Epoch, delay: DelayRange },
    Render(Frame),
    /// Leave the page. Terminal for the page instance.
    Navigate { url: String },
    ShowShareLink { url: String },
    /// Re-prompt the user for a query.
    FocusQuery,
}

/// One visible step of a playback run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Typed { text: String },
    Progress { index: usize, message: &'static str },
    Success,
}
