//! # FilterBox Component
//!
//! Single-line text input for the joke filter.
//!
//! The buffer is internal state. Every edit emits `FilterEvent::Changed`
//! with the full new text; the parent forwards it to the core, which hands
//! it to the debouncer. The box itself never filters anything.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const FILTER_LABEL: &str = "Filter Jokes:";

/// Border + cursor cell
const HORIZONTAL_OVERHEAD: u16 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Changed(String),
}

#[derive(Default)]
pub struct FilterBox {
    pub buffer: String,
}

impl FilterBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tail of the buffer that fits in `width` columns.
    fn visible_tail(&self, width: u16) -> &str {
        let width = width as usize;
        let mut used = 0;
        let mut start = self.buffer.len();
        for (idx, c) in self.buffer.char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start = idx;
        }
        &self.buffer[start..]
    }
}

impl Component for FilterBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let visible = self.visible_tail(inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(FILTER_LABEL);
        let input = Paragraph::new(visible)
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + visible.width() as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for FilterBox {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.push_str(&line);
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
            }
            TuiEvent::ClearFilter => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
            }
            _ => return None,
        }
        Some(FilterEvent::Changed(self.buffer.clone()))
    }
}
