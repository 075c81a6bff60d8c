use std::fmt;

use crate::geom::Point;

/// Errors that can occur when reading a board or an obstacle list.
///
/// Line numbers are 1-based and count every line of the input, including
/// blank ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    /// The input contained no grid rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// No `S` tile.
    MissingStart,
    /// No `E` tile.
    MissingEnd,
    /// A start or end marker appears more than once.
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },
    /// An obstacle line is not an `x,y` integer pair.
    BadPoint { line: usize, text: String },
}

impl fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input contains no grid rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: row has {found} columns, expected {expected}"
            ),
            Self::MissingStart => write!(f, "no start marker \u{201c}S\u{201d} found"),
            Self::MissingEnd => write!(f, "no end marker \u{201c}E\u{201d} found"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "marker \u{201c}{marker}\u{201d} appears twice, at {first} and {second}"
            ),
            Self::BadPoint { line, text } => {
                write!(f, "line {line}: expected \u{201c}x,y\u{201d}, got \u{201c}{text}\u{201d}")
            }
        }
    }
}

impl std::error::Error for MalformedInputError {}
