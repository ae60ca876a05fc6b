use crate::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub phase: Phase,
    /// Contents of the query input; the typed prefix while a playback runs.
    pub query_buffer: String,
    pub custom_destination: String,
    pub selected_engine: String,
    pub share_link: Option<String>,
    pub cursor_active: bool,
    pub progress_message: Option<&'static str>,
    pub success_visible: bool,
    pub dirty: bool,
}
