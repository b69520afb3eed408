use crate::selection::DetailResponse;
use crate::session::PageResponse;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchRequested,
    PageLoaded(PageResponse),
    SelectResult(usize),
    /// The last loaded row is on screen
    ResultsEndVisible,
    RetrySearch,
    NextSuggestion,

    // Selection events
    EnterSelection,
    DetailLoaded(DetailResponse),
    ConfirmSelection,
    ExitSelection,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // Terminal events
    CancelAndClose,
}
