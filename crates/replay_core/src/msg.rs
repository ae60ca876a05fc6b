#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The page was opened from a replay link carrying this payload.
    LinkOpened(crate::SearchPayload),
    /// A wake-up scheduled by `Effect::ScheduleWake` elapsed.
    TimerFired { epoch: crate::Epoch },
    /// User edited the query input.
    QueryEdited(String),
    /// User edited the custom destination input.
    CustomDestinationEdited(String),
    /// User picked an engine button.
    EngineSelected(String),
    /// User submitted the search form.
    SubmitClicked,
    /// User asked for a share link.
    ShareClicked,
    /// The page is being torn down; nothing may run afterwards.
    PageUnloaded,
    /// Fallback for placeholder wiring.
    NoOp,
}
