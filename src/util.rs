//! Utility functions for Drift.

use crate::clipboard;
use crate::data::PointSet;
use crate::error::Result;

/// Copy the before/after point table to clipboard.
pub fn copy_point_table(
    original: &PointSet,
    translated: &PointSet,
    translation: (f64, f64),
    file_name: Option<&str>,
) -> Result<()> {
    let text = format_point_table(original, translated, translation, file_name);
    clipboard::copy_to_clipboard(&text)
}

/// Format the before/after point table as plain text.
pub fn format_point_table(
    original: &PointSet,
    translated: &PointSet,
    translation: (f64, f64),
    file_name: Option<&str>,
) -> String {
    let mut text = String::new();

    if let Some(name) = file_name {
        text.push_str(&format!("Point Table: {}\n", name));
    } else {
        text.push_str("Point Table\n");
    }

    text.push_str(&"=".repeat(60));
    text.push('\n');
    text.push_str(&format!(
        "Translation: ({}, {})\n\n",
        translation.0, translation.1
    ));

    text.push_str(&format!(
        "{:>4}  {:<24} {:<24}\n",
        "line", "initial", "moved"
    ));
    for (i, (before, after)) in original.iter().zip(translated.iter()).enumerate() {
        text.push_str(&format!(
            "{:>4}  {:<24} {:<24}\n",
            i + 1,
            before.to_string(),
            after.to_string()
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Point, PointSet};

    #[test]
    fn table_lists_every_point_before_and_after() {
        let original: PointSet = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
            .into_iter()
            .collect();
        let translated = original.translated(1.0, 1.0);

        let table =
            format_point_table(&original, &translated, (1.0, 1.0), Some("points.txt"));

        assert!(table.starts_with("Point Table: points.txt\n"));
        assert!(table.contains("Translation: (1, 1)"));
        assert!(table.contains("(1, 2)"));
        assert!(table.contains("(2, 3)"));
        assert!(table.contains("(3, 4)"));
        assert!(table.contains("(4, 5)"));
    }

    #[test]
    fn table_without_file_name_has_generic_header() {
        let table =
            format_point_table(&PointSet::new(), &PointSet::new(), (0.0, 0.0), None);
        assert!(table.starts_with("Point Table\n"));
    }
}
