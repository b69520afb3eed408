use crate::api::PhotoSummary;
use crate::handoff::HostStatus;
use crate::interactive::constants::*;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::selection::SelectionFlow;
use crate::session::{SearchCoordinator, SearchSession};

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub host_status: HostStatus,
    pub search: SearchState,
    pub selection: SelectionFlow,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    pub sessions: SearchCoordinator,
    pub selected_index: usize,
    pub suggestion_index: usize,
}

pub struct UiState {
    pub message: Option<String>,
    /// Mode to return to when the help dialog closes
    pub previous_mode: Mode,
}

impl AppState {
    pub fn new(host_status: HostStatus) -> Self {
        Self {
            mode: Mode::Search,
            host_status,
            search: SearchState {
                query: String::new(),
                sessions: SearchCoordinator::new(),
                selected_index: 0,
                suggestion_index: 0,
            },
            selection: SelectionFlow::new(),
            ui: UiState {
                message: None,
                previous_mode: Mode::Search,
            },
        }
    }

    pub fn current_session(&self) -> Option<&SearchSession> {
        self.search.sessions.current()
    }

    /// False when a host is present but accepts none of the offered forms.
    pub fn can_hand_off(&self) -> bool {
        self.host_status != HostStatus::Incompatible
    }

    pub fn results(&self) -> &[PhotoSummary] {
        self.current_session()
            .map(SearchSession::results)
            .unwrap_or_default()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                if self.search.query.trim().is_empty() {
                    // Back to the welcome screen right away
                    self.search.sessions.clear();
                    self.search.selected_index = 0;
                    self.ui.message = None;
                    return Command::None;
                }
                self.ui.message = Some("typing...".to_string());
                Command::ScheduleSearch(SEARCH_DEBOUNCE_MS)
            }
            Message::SearchRequested => {
                self.ui.message = None;
                self.start_search()
            }
            Message::PageLoaded(response) => {
                self.search.sessions.apply(response);
                Command::None
            }
            Message::SelectResult(index) => {
                let len = self.results().len();
                if index < len {
                    self.search.selected_index = index;
                }
                if len.saturating_sub(self.search.selected_index) <= LOAD_MORE_THRESHOLD {
                    if let Some(request) = self.search.sessions.load_more() {
                        return Command::FetchPage(request);
                    }
                }
                Command::None
            }
            Message::ResultsEndVisible => match self.search.sessions.load_more() {
                Some(request) => Command::FetchPage(request),
                None => Command::None,
            },
            Message::RetrySearch => match self.search.sessions.retry() {
                Some(request) => Command::FetchPage(request),
                None => Command::None,
            },
            Message::NextSuggestion => {
                let query = self.search.query.trim();
                if !query.is_empty() && !SUGGESTIONS.contains(&query) {
                    return Command::None;
                }
                let suggestion = SUGGESTIONS[self.search.suggestion_index % SUGGESTIONS.len()];
                self.search.suggestion_index += 1;
                self.search.query = suggestion.to_string();
                self.ui.message = None;
                self.start_search()
            }
            Message::EnterSelection => {
                if self.mode != Mode::Search {
                    return Command::None;
                }
                let Some(photo) = self.results().get(self.search.selected_index).cloned() else {
                    return Command::None;
                };
                let request = self.selection.select(photo);
                self.mode = Mode::Selection;
                Command::FetchDetail(request)
            }
            Message::DetailLoaded(response) => {
                self.selection.apply_detail(response);
                Command::None
            }
            Message::ConfirmSelection if !self.can_hand_off() => {
                self.ui.message = Some(HANDOFF_UNAVAILABLE.to_string());
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ConfirmSelection => match self.selection.confirm() {
                Ok(payload) => Command::Handoff(payload),
                Err(err) => {
                    self.ui.message = Some(err.to_string());
                    Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                }
            },
            Message::ExitSelection => {
                self.selection.cancel();
                self.mode = Mode::Search;
                Command::None
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.ui.previous_mode = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                self.mode = self.ui.previous_mode;
                Command::None
            }
            Message::CancelAndClose => {
                self.selection.cancel();
                Command::Close
            }
        }
    }

    /// Start a session for the current query unless one is already live
    /// for the same text.
    fn start_search(&mut self) -> Command {
        let query = self.search.query.trim();
        if self
            .current_session()
            .is_some_and(|session| session.query() == query)
        {
            return Command::None;
        }
        self.search.selected_index = 0;
        match self.search.sessions.set_query(&self.search.query) {
            Some(request) => Command::FetchPage(request),
            None => Command::None,
        }
    }
}
