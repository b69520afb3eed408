use crate::api::PhotoSummary;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Trait for items that can be displayed in a generic list viewer
pub trait ListItem: Clone {
    /// Returns the main text of the row
    fn get_title(&self) -> &str;

    /// Returns the secondary text shown after the title
    fn get_detail(&self) -> String;

    /// Creates the display line for a row of `max_width` columns
    fn create_line(&self, max_width: usize) -> Line<'static> {
        let detail = self.get_detail();
        let detail_width = detail.chars().count();
        let title = match self.get_title() {
            "" => "(untitled)",
            title => title,
        };

        // Drop the detail column when it would leave too little room
        if max_width < detail_width + 12 {
            return Line::from(truncate_message(title, max_width));
        }

        let title_width = max_width - detail_width - 2;
        vec![
            Span::raw(format!(
                "{:title_width$}  ",
                truncate_message(title, title_width)
            )),
            Span::styled(detail, Style::default().fg(Color::DarkGray)),
        ]
        .into()
    }
}

impl ListItem for PhotoSummary {
    fn get_title(&self) -> &str {
        &self.title
    }

    fn get_detail(&self) -> String {
        self.thumbnail_url()
    }
}

pub fn truncate_message(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        text
    } else if max_width < 3 {
        chars.into_iter().take(max_width).collect()
    } else {
        let truncated: String = chars.into_iter().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}
