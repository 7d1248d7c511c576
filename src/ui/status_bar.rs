//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(crate) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let (dx, dy) = app.translation;
    let text = format!(
        " {} points | translation ({}, {}) | {} ",
        app.original.len(),
        dx,
        dy,
        app.status
    );

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
