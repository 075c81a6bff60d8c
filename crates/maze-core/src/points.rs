//! Obstacle lists: one `x,y` pair per line.

use crate::error::MalformedInputError;
use crate::geom::Point;

/// Parse a list of `x,y` points, one per line, in input order.
///
/// Blank lines are skipped. Whitespace around either number is allowed.
pub fn parse_points(text: &str) -> Result<Vec<Point>, MalformedInputError> {
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let bad = || MalformedInputError::BadPoint {
            line: i + 1,
            text: line.to_string(),
        };
        let (x, y) = line.split_once(',').ok_or_else(bad)?;
        let x: i32 = x.trim().parse().map_err(|_| bad())?;
        let y: i32 = y.trim().parse().map_err(|_| bad())?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}
