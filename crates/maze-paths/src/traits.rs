use maze_core::{Board, Point, Range};

/// Minimal pathfinding interface - which tiles can be stood on.
pub trait Pather {
    /// The rectangle searches are confined to.
    fn bounds(&self) -> Range;

    /// Whether `p` can be entered. Must be `false` outside [`bounds`](Self::bounds).
    fn passable(&self, p: Point) -> bool;

    /// Append passable cardinal neighbours of `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl Pather for Board {
    #[inline]
    fn bounds(&self) -> Range {
        Board::bounds(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_open(p)
    }
}
