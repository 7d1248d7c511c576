//! User interface rendering.

mod status_bar;
mod theme;

use crate::app::App;
use crate::plot;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI: the scatter chart over a one-line status bar.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let background = Block::default().style(Style::default().bg(colors.bg));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    plot::draw_chart(f, chunks[0], app, &colors);
    status_bar::draw_status(f, chunks[1], app, &colors);
}
