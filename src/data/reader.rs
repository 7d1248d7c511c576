//! Whitespace-delimited point file reader.

use super::{Point, PointSet};
use crate::error::{DriftError, Result};
use std::path::Path;

/// Reader for plain-text point files: one point per line, two
/// whitespace-separated numeric tokens (`x y`), no header, no comments.
#[derive(Debug)]
pub struct PointReader;

impl PointReader {
    /// Read a point file into a [`PointSet`], one point per non-empty line,
    /// in file order.
    pub fn read_file(path: &Path) -> Result<PointSet> {
        if !path.is_file() {
            return Err(DriftError::file_not_found(path));
        }

        // The handle is scoped to this read and closed before anything else runs.
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!("Read {} bytes from {}", contents.len(), path.display());

        let mut points = PointSet::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            points.push(Self::parse_row(path, idx + 1, line)?);
        }

        tracing::info!("Loaded {} points from {}", points.len(), path.display());
        Ok(points)
    }

    fn parse_row(path: &Path, line_no: usize, line: &str) -> Result<Point> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(DriftError::parse(
                path,
                line_no,
                format!("expected 2 numeric tokens, found {}", tokens.len()),
            ));
        }

        let x = Self::parse_token(path, line_no, tokens[0])?;
        let y = Self::parse_token(path, line_no, tokens[1])?;
        Ok(Point::new(x, y))
    }

    fn parse_token(path: &Path, line_no: usize, token: &str) -> Result<f64> {
        token.parse::<f64>().map_err(|_| {
            DriftError::parse(path, line_no, format!("not a number: '{}'", token))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_points_in_file_order() {
        let file = write_file("1 2\n3 4\n-0.5 6.25\n");
        let points = PointReader::read_file(file.path()).unwrap();
        assert_eq!(
            points.coords(),
            vec![(1.0, 2.0), (3.0, 4.0), (-0.5, 6.25)]
        );
    }

    #[test]
    fn tolerates_extra_whitespace_and_blank_lines() {
        let file = write_file("  1.0\t2.0  \n\n   \n3 4\n");
        let points = PointReader::read_file(file.path()).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn rejects_row_with_one_token() {
        let file = write_file("1 2\n3\n");
        let err = PointReader::read_file(file.path()).unwrap_err();
        match err {
            DriftError::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 1"));
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_row_with_three_tokens() {
        let file = write_file("1 2 3\n");
        let err = PointReader::read_file(file.path()).unwrap_err();
        assert!(matches!(err, DriftError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let file = write_file("1 two\n");
        let err = PointReader::read_file(file.path()).unwrap_err();
        match err {
            DriftError::Parse { line, reason, .. } => {
                assert_eq!(line, 1);
                assert!(reason.contains("two"));
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err =
            PointReader::read_file(Path::new("/nonexistent/points.txt")).unwrap_err();
        assert!(matches!(err, DriftError::FileNotFound { .. }));
    }

    #[test]
    fn empty_file_yields_empty_set() {
        let file = write_file("");
        let points = PointReader::read_file(file.path()).unwrap();
        assert!(points.is_empty());
    }
}
