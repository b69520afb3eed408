use crate::api::PhotoSummary;
use crate::interactive::ui::components::{Component, list_viewer::ListViewer, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::session::SearchSession;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// What the line under the results says about the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListFooter {
    #[default]
    Idle,
    Loading,
    Error(String),
    Exhausted(usize),
}

impl ListFooter {
    pub fn for_session(session: &SearchSession) -> Self {
        if session.is_loading() {
            ListFooter::Loading
        } else if let Some(message) = session.error_message() {
            ListFooter::Error(message.to_string())
        } else if !session.has_more() {
            ListFooter::Exhausted(session.results().len())
        } else {
            ListFooter::Idle
        }
    }

    fn line(&self) -> Line<'static> {
        match self {
            ListFooter::Idle => Line::from(""),
            ListFooter::Loading => Line::from(Span::styled("Loading...", Styles::label())),
            ListFooter::Error(message) => Line::from(vec![
                Span::styled(format!("Error: {message}"), Styles::error()),
                Span::raw("  "),
                Span::styled("Ctrl+R: Retry", Styles::action_key()),
            ]),
            ListFooter::Exhausted(count) => Line::from(Span::styled(
                format!("That's all {count} results"),
                Styles::dimmed(),
            )),
        }
    }
}

pub struct ResultList {
    list_viewer: ListViewer<PhotoSummary>,
    footer: ListFooter,
    end_visible: bool,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("Results".to_string(), String::new()),
            footer: ListFooter::Idle,
            end_visible: false,
        }
    }

    /// Sync the rows with the session. Results only ever grow within a
    /// session, so the copy is skipped when nothing arrived.
    pub fn set_results(&mut self, results: &[PhotoSummary]) {
        let items = &self.list_viewer.items;
        if items.len() != results.len() || items.first() != results.first() {
            self.list_viewer.set_items(results.to_vec());
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    pub fn set_footer(&mut self, footer: ListFooter) {
        self.footer = footer;
    }

    pub fn selected_result(&self) -> Option<&PhotoSummary> {
        self.list_viewer.get_selected_item()
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_viewer.selected_index()
    }

    /// Whether the last row was on screen in the latest frame.
    pub fn end_visible(&self) -> bool {
        self.end_visible
    }

    fn select_if(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index()))
    }

    fn empty_message(&self) -> &'static str {
        match self.footer {
            ListFooter::Exhausted(0) => "No photos found",
            _ => "",
        }
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // List
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Status
            ])
            .split(area);

        self.list_viewer.empty_message = self.empty_message().to_string();
        self.list_viewer.render(f, chunks[0]);
        self.end_visible = self
            .list_viewer
            .shows_last_item(chunks[0].height.saturating_sub(2));

        let footer = Paragraph::new(self.footer.line()).alignment(Alignment::Center);
        f.render_widget(footer, chunks[1]);

        let status_text =
            "↑/↓ or Ctrl+P/N: Navigate | Enter: Inspect | Ctrl+R: Retry | Esc: Cancel | F1: Help";
        let status_bar = Paragraph::new(status_text)
            .style(Styles::dimmed())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(status_bar, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                let moved = self.list_viewer.move_up();
                self.select_if(moved)
            }
            KeyCode::Down => {
                let moved = self.list_viewer.move_down();
                self.select_if(moved)
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_up();
                self.select_if(moved)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_down();
                self.select_if(moved)
            }
            KeyCode::PageUp => {
                let moved = self.list_viewer.page_up();
                self.select_if(moved)
            }
            KeyCode::PageDown => {
                let moved = self.list_viewer.page_down();
                self.select_if(moved)
            }
            KeyCode::Home => {
                let moved = self.list_viewer.move_to_start();
                self.select_if(moved)
            }
            KeyCode::End => {
                let moved = self.list_viewer.move_to_end();
                self.select_if(moved)
            }
            KeyCode::Char('r') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::RetrySearch)
            }
            KeyCode::Enter => Some(Message::EnterSelection),
            _ => None,
        }
    }
}
