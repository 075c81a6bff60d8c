use maze_core::Point;

/// Cached neighbour enumeration helper.
///
/// Reuses one buffer across queries, so scanning every tile of a board
/// allocates once.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return every point within Manhattan distance `radius` of `p`
    /// (excluding `p` itself), keeping only those for which `keep` returns
    /// `true`. Points come out row by row.
    pub fn diamond(&mut self, p: Point, radius: i32, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        let radius = radius.max(0);
        for dy in -radius..=radius {
            let span = radius - dy.abs();
            for dx in -span..=span {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if keep(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}
