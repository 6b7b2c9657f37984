//! # JokeTable Component
//!
//! One-column table of the filtered jokes. Long jokes wrap onto several
//! lines, so rows have different heights.
//!
//! `JokeTable` is a transient component (created each frame) that wraps
//! `&'a mut JokeTableState` (persistent scroll state) and the jokes (props).
//! Row heights are cached during render so scrolling can page by what was
//! actually on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Cell, Row, Table, TableState};

use crate::api::Joke;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Borders (2) consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Borders (2) + header row (1) consumed vertically
const VERTICAL_OVERHEAD: u16 = 3;

/// Scroll state for the joke table.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct JokeTableState {
    pub table_state: TableState,
    /// Body height from the last render
    pub viewport_height: u16,
    /// Row heights from the last render
    row_heights: Vec<u16>,
}

impl JokeTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.table_state.offset()
    }

    fn set_offset(&mut self, offset: usize) -> Option<usize> {
        let offset = offset.min(self.max_offset());
        if offset == self.offset() {
            return None;
        }
        *self.table_state.offset_mut() = offset;
        Some(offset)
    }

    /// Smallest offset at which the last row is fully visible.
    fn max_offset(&self) -> usize {
        let mut used: u16 = 0;
        let mut first = self.row_heights.len();
        for (idx, &height) in self.row_heights.iter().enumerate().rev() {
            if used.saturating_add(height) > self.viewport_height && first < self.row_heights.len() {
                break;
            }
            used = used.saturating_add(height);
            first = idx;
        }
        first.min(self.row_heights.len().saturating_sub(1))
    }

    /// Number of rows that fit on screen starting at `start` (at least 1).
    fn rows_fitting_from(&self, start: usize) -> usize {
        let mut used: u16 = 0;
        let mut count = 0;
        for &height in self.row_heights.iter().skip(start) {
            if used.saturating_add(height) > self.viewport_height && count > 0 {
                break;
            }
            used = used.saturating_add(height);
            count += 1;
        }
        count.max(1)
    }

    pub fn scroll_to_top(&mut self) -> Option<usize> {
        self.set_offset(0)
    }

    fn scroll_by(&mut self, delta: isize) -> Option<usize> {
        let target = self.offset().saturating_add_signed(delta);
        self.set_offset(target)
    }

    /// Replace the cached layout (used by render and tests).
    fn update_layout(&mut self, row_heights: Vec<u16>, viewport_height: u16) {
        self.row_heights = row_heights;
        self.viewport_height = viewport_height;
        let clamped = self.offset().min(self.max_offset());
        *self.table_state.offset_mut() = clamped;
    }
}

impl EventHandler for JokeTableState {
    /// The new offset, when it changed.
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageDown => {
                let page = self.rows_fitting_from(self.offset());
                self.scroll_by(page as isize)
            }
            TuiEvent::ScrollPageUp => {
                let page = self.rows_fitting_from(self.offset().saturating_sub(1));
                self.scroll_by(-(page as isize))
            }
            TuiEvent::ScrollToTop => self.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.set_offset(self.max_offset()),
            _ => None,
        }
    }
}

pub struct JokeTable<'a> {
    state: &'a mut JokeTableState,
    jokes: &'a [Joke],
    total: usize,
}

impl<'a> JokeTable<'a> {
    /// `total` is the size of the unfiltered collection, shown in the footer.
    pub fn new(state: &'a mut JokeTableState, jokes: &'a [Joke], total: usize) -> Self {
        Self { state, jokes, total }
    }
}

/// Wrap a joke into lines no wider than `width`.
fn wrap_joke(value: &str, width: u16) -> Vec<Line<'static>> {
    textwrap::wrap(value, (width as usize).max(1))
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}

impl Component for JokeTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);

        let wrapped: Vec<Vec<Line<'static>>> = self
            .jokes
            .iter()
            .map(|joke| wrap_joke(&joke.value, inner_width))
            .collect();
        let heights = wrapped.iter().map(|lines| lines.len().max(1) as u16).collect();
        self.state
            .update_layout(heights, area.height.saturating_sub(VERTICAL_OVERHEAD));

        let rows: Vec<Row> = wrapped
            .into_iter()
            .map(|lines| {
                let height = lines.len().max(1) as u16;
                Row::new(vec![Cell::from(Text::from(lines))]).height(height)
            })
            .collect();

        let header = Row::new(vec![Cell::from("Joke")])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let footer = format!(" showing {} of {} ", self.jokes.len(), self.total);
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(footer).right_aligned());

        let table = Table::new(rows, [Constraint::Percentage(100)])
            .header(header)
            .block(block);

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state_with(heights: Vec<u16>, viewport: u16) -> JokeTableState {
        let mut state = JokeTableState::new();
        state.update_layout(heights, viewport);
        state
    }

    #[test]
    fn test_scroll_down_stops_at_last_page() {
        let mut state = state_with(vec![1; 5], 3);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), Some(1));
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), Some(2));
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(state.offset(), 2);
    }

    #[test]
    fn test_scroll_up_at_top_is_noop() {
        let mut state = state_with(vec![1; 5], 3);
        assert_eq!(state.handle_event(&TuiEvent::ScrollUp), None);
    }

    #[test]
    fn test_page_down_uses_row_heights() {
        // Rows 0 and 1 fill the 4-line viewport, so a page is 2 rows
        let mut state = state_with(vec![2, 2, 1, 1, 1, 1], 4);
        assert_eq!(state.handle_event(&TuiEvent::ScrollPageDown), Some(2));
    }

    #[test]
    fn test_end_and_home() {
        let mut state = state_with(vec![1; 10], 4);
        assert_eq!(state.handle_event(&TuiEvent::ScrollToBottom), Some(6));
        assert_eq!(state.handle_event(&TuiEvent::ScrollToTop), Some(0));
    }

    #[test]
    fn test_everything_fits_means_no_scroll() {
        let mut state = state_with(vec![1, 1], 10);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollToBottom), None);
    }

    #[test]
    fn test_shrinking_rows_clamps_offset() {
        let mut state = state_with(vec![1; 10], 2);
        state.handle_event(&TuiEvent::ScrollToBottom);
        state.update_layout(vec![1; 3], 2);
        assert_eq!(state.offset(), 1);
    }

    #[test]
    fn test_wrap_joke_respects_width() {
        let lines = wrap_joke("Chuck Norris can slam a revolving door.", 12);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }

    #[test]
    fn test_render_shows_header_rows_and_count() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let jokes = vec![
            Joke::new("1", "Chuck Norris counted to infinity."),
            Joke::new("2", "Chuck Norris can unscramble an egg."),
        ];
        let mut state = JokeTableState::new();

        terminal
            .draw(|f| {
                JokeTable::new(&mut state, &jokes, 5).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Joke"));
        assert!(text.contains("Chuck Norris counted to infinity."));
        assert!(text.contains("showing 2 of 5"));
        assert_eq!(state.viewport_height, 7);
    }
}
