//! Application state and logic.

use std::path::PathBuf;

use crate::data::PointSet;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Path of the loaded point file.
    pub file_path: PathBuf,
    /// The point set as read from the file.
    pub original: PointSet,
    /// The point set after applying the translation.
    pub translated: PointSet,
    /// The applied translation `(dx, dy)`.
    pub translation: (f64, f64),
    /// Whether the original layer is drawn.
    pub show_original: bool,
    /// Whether the translated layer is drawn.
    pub show_translated: bool,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create the application from a loaded point set and a translation.
    ///
    /// The translated set is built once, as a copy, so both the before and
    /// after views stay valid for the whole session.
    pub fn new(file_path: PathBuf, original: PointSet, translation: (f64, f64)) -> Self {
        let (dx, dy) = translation;
        let translated = original.translated(dx, dy);
        Self {
            file_path,
            original,
            translated,
            translation,
            show_original: true,
            show_translated: true,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        }
    }

    /// Toggle visibility of the original scatter layer.
    pub fn toggle_original(&mut self) {
        self.show_original = !self.show_original;
        self.status = format!(
            "Initial coordinates {}",
            if self.show_original { "shown" } else { "hidden" }
        );
    }

    /// Toggle visibility of the translated scatter layer.
    pub fn toggle_translated(&mut self) {
        self.show_translated = !self.show_translated;
        self.status = format!(
            "Moved coordinates {}",
            if self.show_translated { "shown" } else { "hidden" }
        );
    }

    /// Cycle to the next color theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// File name of the loaded point file, for titles and tables.
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Point, PointSet};

    fn make_app() -> App {
        let points: PointSet = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
            .into_iter()
            .collect();
        App::new(PathBuf::from("points.txt"), points, (1.0, 1.0))
    }

    #[test]
    fn keeps_original_and_translated_as_distinct_sets() {
        let app = make_app();
        assert_eq!(app.original.coords(), vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(app.translated.coords(), vec![(2.0, 3.0), (4.0, 5.0)]);
    }

    #[test]
    fn toggles_flip_layer_visibility() {
        let mut app = make_app();
        app.toggle_original();
        assert!(!app.show_original);
        app.toggle_original();
        assert!(app.show_original);
    }

    #[test]
    fn theme_cycle_round_trips() {
        let mut app = make_app();
        let start = app.theme;
        app.cycle_theme();
        assert_ne!(app.theme, start);
        app.cycle_theme();
        assert_eq!(app.theme, start);
    }
}
