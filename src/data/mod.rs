//! Point data reading and representation.
//!
//! This module handles reading whitespace-delimited point files and
//! representing their contents as ordered point sets.

mod point;
mod reader;

pub use point::{Bounds, Point, PointSet};
pub use reader::PointReader;
