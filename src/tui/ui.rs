use crate::core::state::{App, LoadStatus};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{JokeTable, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub const LOADING_TEXT: &str = "Loading the jokes...";
pub const ERROR_TEXT: &str = "Error fetching jokes :(";

const HELP_TEXT: &str = " Type to filter  Ctrl+U Clear  ↑↓ PgUp PgDn Scroll  Esc Quit ";

/// Height of the bordered filter input
const FILTER_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    match &app.status {
        LoadStatus::Idle | LoadStatus::Loading => draw_centered(frame, main_area, LOADING_TEXT, Color::Gray),
        // Every failure kind gets the same view; the detail is in the log
        LoadStatus::Failed(_) => draw_centered(frame, main_area, ERROR_TEXT, Color::Red),
        LoadStatus::Loaded => draw_loaded(frame, main_area, app, tui),
    }

    frame.render_widget(
        Line::from(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_centered(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line_area);
}

fn draw_loaded(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [filter_area, table_area] = Layout::vertical([Length(FILTER_HEIGHT), Min(0)]).areas(area);

    tui.filter_box.render(frame, filter_area);
    JokeTable::new(&mut tui.joke_table, &app.filtered, app.jokes.len()).render(frame, table_area);
}
