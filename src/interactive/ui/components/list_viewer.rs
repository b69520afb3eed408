use super::list_item::ListItem;
use super::styles::Styles;
use crate::interactive::constants::PAGE_SIZE;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub title: String,
    pub empty_message: String,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            title,
            empty_message,
        }
    }

    /// Replace the items, keeping the cursor where it was when possible.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len().saturating_sub(1);
        }
        if self.scroll_offset > self.selected_index {
            self.scroll_offset = self.selected_index;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn page_down(&mut self) -> bool {
        let new_index = (self.selected_index + PAGE_SIZE).min(self.items.len().saturating_sub(1));
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn move_to_start(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            true
        } else {
            false
        }
    }

    pub fn move_to_end(&mut self) -> bool {
        let last_index = self.items.len().saturating_sub(1);
        if self.selected_index < last_index {
            self.selected_index = last_index;
            true
        } else {
            false
        }
    }

    pub fn adjust_scroll_offset(&mut self, available_height: u16) {
        let visible_count = (available_height as usize).max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_count {
            self.scroll_offset = self.selected_index + 1 - visible_count;
        }
    }

    /// Whether the last item falls inside a window of `available_height` rows.
    pub fn shows_last_item(&self, available_height: u16) -> bool {
        let visible_count = (available_height as usize).max(1);
        !self.items.is_empty() && self.scroll_offset + visible_count >= self.items.len()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .block(
                    Block::default()
                        .title(self.title.clone())
                        .borders(Borders::ALL),
                )
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty_message, area);
            return;
        }

        let available_height = area.height.saturating_sub(2); // Account for borders
        self.adjust_scroll_offset(available_height);
        let start = self.scroll_offset;
        let end = (start + available_height as usize).min(self.items.len());
        let available_width = area.width.saturating_sub(2) as usize;

        let items: Vec<TuiListItem> = self.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let style = if start + offset == self.selected_index {
                    Styles::selected()
                } else {
                    Style::default()
                };
                TuiListItem::new(item.create_line(available_width)).style(style)
            })
            .collect();

        let title = format!(
            "{} ({}/{}) - Showing {}-{}",
            self.title,
            self.selected_index + 1,
            self.items.len(),
            start + 1,
            end
        );

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

        f.render_widget(list, area);
    }
}
