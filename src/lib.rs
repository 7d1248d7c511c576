//! Drift - A terminal scatter-plot viewer for translated 2D point sets.
//!
//! Drift reads a whitespace-delimited text file of 2D points, applies a fixed
//! translation to every point, and draws the original and translated sets as
//! two labeled scatter layers in one terminal chart.
//!
//! # Features
//!
//! - Plain-text point file reading (`x y` per line)
//! - Side-by-side before/after scatter layers with a legend
//! - Layer visibility toggles
//! - Gruvbox color themes
//! - Clipboard export of the before/after point table
//!
//! # Example
//!
//! ```ignore
//! use drift::data::PointReader;
//! use std::path::Path;
//!
//! // Load a point file
//! let points = PointReader::read_file(Path::new("points.txt"))?;
//!
//! // Apply a translation, keeping the original set intact
//! let moved = points.translated(1.0, 1.0);
//! println!("Loaded {} points", points.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{DriftError, Result};
