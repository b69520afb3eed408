use crate::interactive::constants::{DIALOG_MARGIN, HANDOFF_UNAVAILABLE, OVERLAY_MAX_WIDTH};
use crate::interactive::ui::components::{
    Component, centered_rect, styles::Styles, text::format_taken, text::html_to_text,
};
use crate::interactive::ui::events::Message;
use crate::selection::{DetailState, Selection};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    UseImage,
    BackToResults,
    CancelAndClose,
}

impl OverlayAction {
    pub fn label(self) -> &'static str {
        match self {
            OverlayAction::UseImage => "Use this image",
            OverlayAction::BackToResults => "Back to Results",
            OverlayAction::CancelAndClose => "Cancel and Close",
        }
    }

    pub fn message(self) -> Message {
        match self {
            OverlayAction::UseImage => Message::ConfirmSelection,
            OverlayAction::BackToResults => Message::ExitSelection,
            OverlayAction::CancelAndClose => Message::CancelAndClose,
        }
    }
}

/// Detail box for the photo being inspected.
pub struct SelectionOverlay {
    selection: Option<Selection>,
    cursor: OverlayAction,
    handoff_allowed: bool,
}

impl Default for SelectionOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionOverlay {
    pub fn new() -> Self {
        Self {
            selection: None,
            cursor: OverlayAction::UseImage,
            handoff_allowed: true,
        }
    }

    /// Off when the host asked for something the picker cannot send.
    pub fn set_handoff_allowed(&mut self, allowed: bool) {
        self.handoff_allowed = allowed;
    }

    pub fn set_selection(&mut self, selection: Option<&Selection>) {
        let previous = self.selection.as_ref().map(Selection::id);
        if previous != selection.map(Selection::id) {
            self.cursor = OverlayAction::UseImage;
        }
        self.selection = selection.cloned();
    }

    /// "Use this image" only appears once the details are in and the host
    /// can take the image.
    pub fn actions(&self) -> Vec<OverlayAction> {
        let mut actions = Vec::with_capacity(3);
        if self.handoff_allowed && self.selection.as_ref().is_some_and(Selection::can_confirm) {
            actions.push(OverlayAction::UseImage);
        }
        actions.push(OverlayAction::BackToResults);
        actions.push(OverlayAction::CancelAndClose);
        actions
    }

    pub fn selected_action(&self) -> OverlayAction {
        let actions = self.actions();
        if actions.contains(&self.cursor) {
            self.cursor
        } else {
            actions[0]
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let actions = self.actions();
        let current = actions
            .iter()
            .position(|&action| action == self.selected_action())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % actions.len()
        } else {
            (current + actions.len() - 1) % actions.len()
        };
        self.cursor = actions[next];
    }

    fn content_lines(&self, selection: &Selection) -> Vec<Line<'static>> {
        let photo = selection.photo();
        let mut lines = vec![
            Line::from(Span::styled(photo.title.clone(), Styles::title())),
            Line::from(Span::styled(photo.thumbnail_url(), Styles::dimmed())),
            Line::from(""),
        ];

        let selected = self.selected_action();
        for action in self.actions() {
            let line = if action == selected {
                Line::from(Span::styled(format!("> {}", action.label()), Styles::selected()))
            } else {
                Line::from(Span::styled(format!("  {}", action.label()), Styles::normal()))
            };
            lines.push(line);
        }
        if !self.handoff_allowed {
            lines.push(Line::from(Span::styled(
                HANDOFF_UNAVAILABLE,
                Styles::dimmed(),
            )));
        }
        lines.push(Line::from(""));

        match selection.detail() {
            DetailState::Loading => {
                lines.push(Line::from(Span::styled("Loading...", Styles::label())));
            }
            DetailState::Failed(message) => {
                lines.push(Line::from(Span::styled(
                    format!("Could not load details: {message}"),
                    Styles::error(),
                )));
            }
            DetailState::Loaded(detail) => {
                let source = match &detail.owner.realname {
                    Some(realname) => format!("Source: {} ({realname})", detail.owner.username),
                    None => format!("Source: {}", detail.owner.username),
                };
                lines.push(Line::from(source));
                if let Some(taken) = &detail.taken {
                    lines.push(Line::from(Span::styled(
                        format!("Taken: {}", format_taken(taken)),
                        Styles::dimmed(),
                    )));
                }
                let description = html_to_text(&detail.description);
                if !description.is_empty() {
                    lines.push(Line::from(""));
                    lines.extend(description.lines().map(|line| Line::from(line.to_string())));
                }
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓: Choose | Enter: Activate | Esc: Back to results",
            Styles::dimmed(),
        )));
        lines
    }
}

impl Component for SelectionOverlay {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(selection) = &self.selection else {
            return;
        };
        let lines = self.content_lines(selection);

        let width = OVERLAY_MAX_WIDTH.min(area.width.saturating_sub(DIALOG_MARGIN));
        let height = area.height.saturating_sub(DIALOG_MARGIN);
        let dialog_area = centered_rect(area, width, height);

        f.render_widget(Clear, dialog_area);

        let overlay = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Selected Image ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(overlay, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.move_cursor(false);
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.move_cursor(true);
                None
            }
            KeyCode::Enter => Some(self.selected_action().message()),
            KeyCode::Esc | KeyCode::Backspace => Some(Message::ExitSelection),
            _ => None,
        }
    }
}
