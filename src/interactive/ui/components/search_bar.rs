use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_searching: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the query from app state. Leaves the cursor alone unless the
    /// text actually changed (e.g. a suggestion was picked).
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        // Skip whitespace backwards
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }

        // Skip non-whitespace backwards
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        let len = chars.len();

        // Skip non-whitespace forwards
        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }

        // Skip whitespace forwards
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Delete chars `start..end` and report whether the query changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.query.chars().count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn delete_before_cursor(&mut self) -> Option<Message> {
        if self.cursor_position > 0 && self.delete_range(self.cursor_position - 1, self.cursor_position)
        {
            return self.changed();
        }
        None
    }

    fn delete_at_cursor(&mut self) -> Option<Message> {
        let cursor = self.cursor_position;
        if self.delete_range(cursor, cursor + 1) {
            return self.changed();
        }
        None
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let before: String = self.query.chars().take(self.cursor_position).collect();
        let mut after = self.query.chars().skip(self.cursor_position);
        let input_text = match after.next() {
            Some(under_cursor) => vec![
                Span::raw(before),
                Span::styled(under_cursor.to_string(), cursor_style),
                Span::raw(after.collect::<String>()),
            ],
            None => vec![Span::raw(before), Span::styled(" ", cursor_style)],
        };

        let mut title = "Search Flickr Commons".to_string();
        if self.is_searching {
            title.push_str(" [searching]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let input = Paragraph::new(Line::from(input_text))
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        // Handle Control key combinations
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+A - Move cursor to beginning of line
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                // Ctrl+E - Move cursor to end of line
                KeyCode::Char('e') => {
                    self.cursor_position = self.query.chars().count();
                    None
                }
                // Ctrl+B - Move cursor backward one character
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                // Ctrl+F - Move cursor forward one character
                KeyCode::Char('f') => {
                    if self.cursor_position < self.query.chars().count() {
                        self.cursor_position += 1;
                    }
                    None
                }
                // Ctrl+H - Delete character before cursor (same as backspace)
                KeyCode::Char('h') => self.delete_before_cursor(),
                // Ctrl+D - Delete character under cursor
                KeyCode::Char('d') => self.delete_at_cursor(),
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let new_pos = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(new_pos, self.cursor_position) {
                        return self.changed();
                    }
                    None
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        return self.changed();
                    }
                    None
                }
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => {
                    let len = self.query.chars().count();
                    if self.delete_range(self.cursor_position, len) {
                        return self.changed();
                    }
                    None
                }
                _ => None,
            };
        }

        // Handle Alt key combinations
        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                // Alt+B - Move cursor backward one word
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                // Alt+F - Move cursor forward one word
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
