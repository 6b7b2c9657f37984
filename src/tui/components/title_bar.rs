//! # TitleBar Component
//!
//! Top line of the page: the page title, then the status message when
//! there is one.
//!
//! Stateless: all data arrives as props.
//!
//! 1. **Status message**: `"Chuck Norris Jokes | 4 of 10 jokes"`
//! 2. **Default**: `"Chuck Norris Jokes"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const PAGE_TITLE: &str = "Chuck Norris Jokes";

pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    fn spans(&self) -> Vec<Span<'_>> {
        let mut spans = vec![Span::styled(
            PAGE_TITLE,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Line::from(self.spans()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bar: &TitleBar) -> String {
        bar.spans().iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_title_only() {
        let bar = TitleBar::new(String::new());
        assert_eq!(text(&bar), "Chuck Norris Jokes");
    }

    #[test]
    fn test_title_with_status() {
        let bar = TitleBar::new("4 of 10 jokes".to_string());
        assert_eq!(text(&bar), "Chuck Norris Jokes | 4 of 10 jokes");
    }
}
