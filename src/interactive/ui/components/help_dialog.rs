use crate::interactive::constants::{DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::{Component, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpDialog;

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Flickr Commons Picker",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Type        - Search (after a short pause)"),
            Line::from("  Tab         - Try a suggestion (empty search)"),
            Line::from("  ↑/↓         - Navigate results, more load near the end"),
            Line::from("  Enter       - Inspect the selected photo"),
            Line::from("  Ctrl+R      - Retry after an error"),
            Line::from("  Esc         - Cancel and close"),
            Line::from(""),
            Self::section("Selected image:"),
            Line::from("  ↑/↓, Tab    - Choose an action"),
            Line::from("  Enter       - Use this image / Back / Cancel"),
            Line::from("  Esc         - Back to results"),
            Line::from(""),
            Self::section("Anywhere:"),
            Line::from("  F1          - Show this help"),
            Line::from("  Ctrl+C x2   - Exit without choosing"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(DIALOG_MARGIN));
        let dialog_area = centered_rect(area, width, height);

        // Clear the area behind the dialog
        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
