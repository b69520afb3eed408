//! Full-screen picker: search box, scrolling results and the selection
//! overlay.
//!
//! The loop follows a message/command shape. Key presses become [`Message`]s
//! for [`AppState::update`], which answers with a [`Command`] for the loop to
//! carry out (schedule a search, hit the network, finish). Network calls run on
//! the [`FetchService`] workers and their responses are fed back in as
//! messages between frames.
//!
//! The screen is drawn on stderr. Stdout is reserved for the host response,
//! which is written only after the terminal has been restored.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::api::PhotoSource;
use crate::handoff::{HandoffPayload, HostStatus};

mod application;
pub mod constants;
mod domain;
pub mod ui;


use self::application::fetch_service::FetchService;
use self::constants::*;
use self::domain::models::{FetchResponse, Mode};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// How a picker session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerOutcome {
    Confirmed(HandoffPayload),
    Cancelled,
}

pub struct InteractivePicker {
    state: AppState,
    renderer: Renderer,
    fetcher: FetchService,
    last_search_timer: Option<Instant>,
    scheduled_search_delay: Option<u64>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    outcome: Option<PickerOutcome>,
}

impl InteractivePicker {
    pub fn new(source: Arc<dyn PhotoSource>, host_status: HostStatus) -> Self {
        let state = AppState::new(host_status);
        let renderer = Renderer::new(&state);

        Self {
            state,
            renderer,
            fetcher: FetchService::start(source),
            last_search_timer: None,
            scheduled_search_delay: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            outcome: None,
        }
    }

    /// Take over the terminal until the user confirms a photo or gives up.
    pub fn run(&mut self, initial_query: &str) -> Result<PickerOutcome> {
        let mut terminal = self.setup_terminal()?;

        if !initial_query.trim().is_empty() {
            self.handle_message(Message::QueryChanged(initial_query.to_string()));
            // No need to wait for more typing
            self.scheduled_search_delay = None;
            self.handle_message(Message::SearchRequested);
        }

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<PickerTerminal> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut PickerTerminal) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut PickerTerminal) -> Result<PickerOutcome> {
        loop {
            if let Some(outcome) = self.outcome.take() {
                info!("Picker finished: {outcome:?}");
                return Ok(outcome);
            }

            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;
            self.check_results_end();

            while let Some(response) = self.fetcher.try_recv() {
                self.handle_fetch_response(response);
            }

            // Check for scheduled search
            if let (Some(delay), Some(timer)) = (self.scheduled_search_delay, self.last_search_timer)
            {
                if timer.elapsed() >= Duration::from_millis(delay) {
                    self.scheduled_search_delay = None;
                    self.last_search_timer = None;
                    self.handle_message(Message::SearchRequested);
                }
            }

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.state.ui.message = None;
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }
        }
    }

    /// A short page leaves the end on screen without any scrolling, so the
    /// next page is requested as soon as a frame shows the last row.
    fn check_results_end(&mut self) {
        if self.renderer.results_end_visible(&self.state) {
            self.handle_message(Message::ResultsEndVisible);
        }
    }

    fn handle_fetch_response(&mut self, response: FetchResponse) {
        let message = match response {
            FetchResponse::Page(page) => Message::PageLoaded(page),
            FetchResponse::Detail(detail) => Message::DetailLoaded(detail),
        };
        self.handle_message(message);
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.outcome = Some(PickerOutcome::Cancelled);
                    return;
                }
            }
            // First press or timeout expired
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
            return;
        }

        if key.code == KeyCode::F(1) && self.state.mode != Mode::Help {
            self.handle_message(Message::ShowHelp);
            return;
        }

        // Mode-specific input handling
        self.renderer.sync(&self.state);
        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Selection => self.renderer.get_selection_overlay_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(Message::CancelAndClose),
            // Suggestions cycle while the query is empty or still a suggestion
            KeyCode::Tab => self.renderer.get_welcome_mut().handle_key(key),
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter => self.renderer.get_result_list_mut().handle_key(key),
            KeyCode::Char('p' | 'n' | 'r') if control => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch(delay) => {
                self.last_search_timer = Some(Instant::now());
                self.scheduled_search_delay = Some(delay);
            }
            Command::FetchPage(request) => {
                self.fetcher.submit_page(request);
            }
            Command::FetchDetail(request) => {
                self.fetcher.submit_detail(request);
            }
            Command::Handoff(payload) => {
                self.outcome = Some(PickerOutcome::Confirmed(payload));
            }
            Command::Close => {
                self.outcome = Some(PickerOutcome::Cancelled);
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }
}
