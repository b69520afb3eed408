use crate::interactive::constants::SEARCH_BAR_HEIGHT;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component,
    help_dialog::HelpDialog,
    result_list::{ListFooter, ResultList},
    search_bar::SearchBar,
    selection_overlay::SelectionOverlay,
    welcome::Welcome,
};
use crate::session::SearchSession;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    welcome: Welcome,
    selection_overlay: SelectionOverlay,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new(state: &AppState) -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            welcome: Welcome::new(state.host_status.clone()),
            selection_overlay: SelectionOverlay::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    /// Push app state into the components. Runs before every frame and
    /// before key handling, so components never act on stale rows.
    pub fn sync(&mut self, state: &AppState) {
        let session = state.current_session();

        self.search_bar.set_query(&state.search.query);
        self.search_bar
            .set_searching(session.is_some_and(SearchSession::is_loading));
        self.search_bar.set_message(state.ui.message.clone());

        if let Some(session) = session {
            self.result_list.set_results(session.results());
            self.result_list
                .set_selected_index(state.search.selected_index);
            self.result_list
                .set_footer(ListFooter::for_session(session));
        }

        self.selection_overlay
            .set_handoff_allowed(state.can_hand_off());
        self.selection_overlay
            .set_selection(state.selection.current());
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::Selection => self.render_selection_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Min(0),                    // Results or welcome
            ])
            .split(f.area());

        self.search_bar.render(f, chunks[0]);

        if state.current_session().is_some() {
            self.result_list.render(f, chunks[1]);
        } else {
            self.welcome.render(f, chunks[1]);
        }
    }

    fn render_selection_mode(&mut self, f: &mut Frame, state: &AppState) {
        // Results stay visible around the overlay
        self.render_search_mode(f, state);
        self.selection_overlay.render(f, f.area());
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        match state.ui.previous_mode {
            Mode::Selection => self.render_selection_mode(f, state),
            _ => self.render_search_mode(f, state),
        }

        self.help_dialog.render(f, f.area());
    }

    /// True when the results are shown and their last row is on screen.
    pub fn results_end_visible(&self, state: &AppState) -> bool {
        state.current_session().is_some() && self.result_list.end_visible()
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_welcome_mut(&mut self) -> &mut Welcome {
        &mut self.welcome
    }

    pub fn get_selection_overlay_mut(&mut self) -> &mut SelectionOverlay {
        &mut self.selection_overlay
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
