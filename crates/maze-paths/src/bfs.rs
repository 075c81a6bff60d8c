use maze_core::{Point, Range};

use crate::Planner;
use crate::planner::{PathNode, UNREACHABLE};
use crate::traits::Pather;

/// An owned snapshot of a unit-cost distance map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    rng: Range,
    dist: Vec<i32>,
}

impl DistanceField {
    /// Distance to `p`, or [`UNREACHABLE`].
    #[inline]
    pub fn at(&self, p: Point) -> i32 {
        match self.rng.index(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether `p` was reached.
    #[inline]
    pub fn reached(&self, p: Point) -> bool {
        self.at(p) != UNREACHABLE
    }

    /// Every reached point with its distance, row-major.
    pub fn iter(&self) -> impl Iterator<Item = PathNode> + '_ {
        self.rng
            .iter()
            .zip(self.dist.iter().copied())
            .filter(|&(_, d)| d != UNREACHABLE)
            .map(|(pos, cost)| PathNode { pos, cost })
    }
}

impl Planner {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes in visiting order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        self.bfs_rng = pather.bounds();
        let len = self.bfs_rng.len();
        self.bfs_map.clear();
        self.bfs_map.resize(len, UNREACHABLE);
        self.bfs_results.clear();
        self.bfs_queue.clear();

        for &src in sources {
            if !pather.passable(src) {
                continue;
            }
            if let Some(si) = self.bfs_rng.index(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                self.bfs_queue.push_back(si);
                self.bfs_results.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.bfs_queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = self.bfs_rng.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.bfs_rng.index(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                self.bfs_queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Run [`bfs_map`](Self::bfs_map) without a distance limit and keep an
    /// owned copy of the result.
    pub fn distance_field<P: Pather>(&mut self, pather: &P, sources: &[Point]) -> DistanceField {
        self.bfs_map(pather, sources, UNREACHABLE - 1);
        DistanceField {
            rng: self.bfs_rng,
            dist: self.bfs_map.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Board;

    #[test]
    fn bfs_respects_walls_and_limit() {
        let b = Board::parse("S.#.\n..#E\n....\n").unwrap();
        let mut pl = Planner::new();
        let reached = pl.bfs_map(&b, &[b.start()], 3);
        assert_eq!(reached.len(), 6);
        assert_eq!(reached[0], PathNode { pos: b.start(), cost: 0 });
        let cost_of = |p: Point| reached.iter().find(|n| n.pos == p).map(|n| n.cost);
        assert_eq!(cost_of(Point::new(1, 2)), Some(3));
        assert_eq!(cost_of(Point::new(2, 2)), None);
        assert_eq!(cost_of(Point::new(2, 0)), None);
        assert!(reached.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn distance_field_from_both_ends() {
        let b = Board::parse("S.#.\n..#E\n....\n").unwrap();
        let mut pl = Planner::new();
        let from_start = pl.distance_field(&b, &[b.start()]);
        let to_end = pl.distance_field(&b, &[b.end()]);
        assert_eq!(from_start.at(b.end()), 6);
        assert_eq!(to_end.at(b.start()), 6);
        for node in from_start.iter() {
            assert!(to_end.reached(node.pos));
        }
        assert_eq!(from_start.iter().count(), 10);
        assert!(!from_start.reached(Point::new(2, 0)));
    }

    #[test]
    fn walled_sources_are_skipped() {
        let b = Board::parse("S#E\n").unwrap();
        let mut pl = Planner::new();
        assert!(pl.bfs_map(&b, &[Point::new(1, 0)], 10).is_empty());
    }
}
