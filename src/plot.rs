//! Scatter chart rendering.
//!
//! Draws the original and translated point sets as two labeled scatter
//! layers in one coordinate system, using ratatui's `Chart` widget.

use crate::app::App;
use crate::data::Bounds;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Fraction of the data span added on each side of the chart.
const AXIS_MARGIN: f64 = 0.05;

/// Draw the scatter chart for both point layers.
pub fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let envelope = match combined_bounds(app) {
        Some(b) => b,
        None => {
            let para = Paragraph::new("No points loaded")
                .style(Style::default().fg(colors.text))
                .alignment(Alignment::Center)
                .block(chart_block(app, colors));
            f.render_widget(para, area);
            return;
        },
    };

    let ([x_min, x_max], [y_min, y_max]) = axis_bounds(envelope);

    let original = app.original.coords();
    let translated = app.translated.coords();

    let mut datasets = Vec::new();
    if app.show_original {
        datasets.push(
            Dataset::default()
                .name("Initial Coordinates")
                .marker(ratatui::symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Blue))
                .data(&original),
        );
    }
    if app.show_translated {
        datasets.push(
            Dataset::default()
                .name("Moved Coordinates")
                .marker(ratatui::symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Red))
                .data(&translated),
        );
    }

    let x_labels = vec![
        format_axis_label(x_min),
        format_axis_label((x_min + x_max) / 2.0),
        format_axis_label(x_max),
    ];
    let x_axis = Axis::default()
        .title("X-axis")
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_labels = vec![
        format_axis_label(y_min),
        format_axis_label((y_min + y_max) / 2.0),
        format_axis_label(y_max),
    ];
    let y_axis = Axis::default()
        .title("Y-axis")
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(chart_block(app, colors))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn chart_block(app: &App, colors: &ThemeColors) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" Scatter Plot of Coordinates — {} ", app.file_name()))
        .title_style(Style::default().fg(colors.heading))
}

/// Union envelope of both layers, so toggling a layer never rescales the axes.
fn combined_bounds(app: &App) -> Option<Bounds> {
    match (app.original.bounds(), app.translated.bounds()) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Axis bounds around an envelope, with a margin and protection against
/// zero-width spans (single points and axis-aligned sets).
fn axis_bounds(b: Bounds) -> ([f64; 2], [f64; 2]) {
    let pad = |min: f64, max: f64| {
        let span = max - min;
        let margin = if span > 0.0 { span * AXIS_MARGIN } else { 1.0 };
        [min - margin, max + margin]
    };
    (pad(b.x_min, b.x_max), pad(b.y_min, b.y_max))
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}
