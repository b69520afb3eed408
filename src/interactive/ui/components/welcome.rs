use crate::handoff::HostStatus;
use crate::interactive::constants::SUGGESTIONS;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Shown while the query is empty.
pub struct Welcome {
    host_status: HostStatus,
}

impl Welcome {
    pub fn new(host_status: HostStatus) -> Self {
        Self { host_status }
    }

    pub fn set_host_status(&mut self, host_status: HostStatus) {
        self.host_status = host_status;
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let status_style = if self.host_status.is_compatible() {
            Styles::success()
        } else {
            Styles::dimmed()
        };

        let mut suggestions = vec![Span::raw("Type a search above to get started. Out of ideas? Try ")];
        for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
            if i > 0 {
                suggestions.push(Span::raw(if i + 1 == SUGGESTIONS.len() {
                    " or "
                } else {
                    ", "
                }));
            }
            suggestions.push(Span::styled(*suggestion, Styles::label()));
        }
        suggestions.push(Span::raw(" (Tab picks one)."));

        vec![
            Line::from(Span::styled("Flickr Commons Picker", Styles::title())),
            Line::from(""),
            Line::from(
                "Pick an image from the Flickr Commons, a collection of archival photos \
                 with no known copyright restrictions, and hand it back to the program \
                 that opened this picker.",
            ),
            Line::from(Span::styled(self.host_status.to_string(), status_style)),
            Line::from(""),
            Line::from(suggestions),
            Line::from(""),
            Line::from(Span::styled(
                "Not affiliated with Flickr or SmugMug; results come from the public Flickr API.",
                Styles::dimmed(),
            )),
        ]
    }
}

impl Component for Welcome {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let welcome = Paragraph::new(self.lines())
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        f.render_widget(welcome, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Tab => Some(Message::NextSuggestion),
            _ => None,
        }
    }
}
