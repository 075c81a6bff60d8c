//! Re-solving a board while obstacles are dropped onto it.
//!
//! Blocking a tile that the current cheapest route does not use cannot make
//! that route any cheaper or any worse, so the [`Replanner`] only searches
//! again when a drop lands on the route it is holding.

use std::collections::HashSet;

use log::{debug, info};
use maze_core::{Board, Point};
use maze_paths::{Planner, Route, Rules, UNREACHABLE};

/// The drop that first cut the start off from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blockage {
    /// Position of the drop in the event list.
    pub index: usize,
    pub point: Point,
}

/// A board plus its current cheapest route, kept up to date as tiles are
/// blocked.
pub struct Replanner {
    board: Board,
    rules: Rules,
    planner: Planner,
    route: Option<Route>,
    on_route: HashSet<Point>,
}

impl Replanner {
    /// Take ownership of `board` and solve it once.
    pub fn new(board: Board, rules: Rules) -> Self {
        let mut rp = Self {
            board,
            rules,
            planner: Planner::new(),
            route: None,
            on_route: HashSet::new(),
        };
        rp.resolve();
        rp
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cheapest route held right now, `None` once the end is cut off.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Current cheapest cost, [`UNREACHABLE`] once the end is cut off.
    pub fn cost(&self) -> i32 {
        self.route.as_ref().map_or(UNREACHABLE, |r| r.cost)
    }

    /// Searches run so far, the initial solve included.
    pub fn solves(&self) -> usize {
        self.planner.searches()
    }

    /// Block `p` and return the resulting cheapest cost.
    ///
    /// Out-of-bounds points and tiles that are already walls change nothing.
    pub fn block(&mut self, p: Point) -> i32 {
        if !self.board.block(p) {
            debug!("drop at {p} changes nothing");
            return self.cost();
        }
        if self.route.is_none() {
            return UNREACHABLE;
        }
        if self.on_route.contains(&p) {
            debug!("drop at {p} cuts the current route, re-solving");
            self.resolve();
        }
        self.cost()
    }

    /// Apply `events` in order until the end becomes unreachable.
    ///
    /// Returns the drop that cut it off, or `None` if a route survives every
    /// drop (or the end was unreachable before any drop fell).
    pub fn first_blocking(&mut self, events: &[Point]) -> Option<Blockage> {
        if self.route.is_none() {
            return None;
        }
        for (index, &point) in events.iter().enumerate() {
            if self.block(point) == UNREACHABLE {
                info!(
                    "drop #{index} at {point} cuts the board off after {} searches",
                    self.solves()
                );
                return Some(Blockage { index, point });
            }
        }
        None
    }

    /// Apply every event in `events` and return the resulting cost.
    pub fn cost_after(&mut self, events: &[Point]) -> i32 {
        for &p in events {
            self.block(p);
        }
        self.cost()
    }

    fn resolve(&mut self) {
        self.route = self.planner.solve(&self.board, &self.rules);
        self.on_route.clear();
        if let Some(route) = &self.route {
            self.on_route.extend(route.positions.iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::parse_points;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    const DROPS: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn cost_after_first_twelve_drops() {
        let events = parse_points(DROPS).unwrap();
        let mut rp = Replanner::new(Board::open(7, 7), Rules::default());
        assert_eq!(rp.cost(), 12);
        assert_eq!(rp.cost_after(&events[..12]), 22);
    }

    #[test]
    fn finds_first_cutting_drop() {
        let events = parse_points(DROPS).unwrap();
        let mut rp = Replanner::new(Board::open(7, 7), Rules::default());
        let blockage = rp.first_blocking(&events);
        assert_eq!(
            blockage,
            Some(Blockage {
                index: 20,
                point: Point::new(6, 1)
            })
        );
        assert!(rp.route().is_none());
        assert!(rp.solves() <= 22);
    }

    #[test]
    fn drops_off_the_route_skip_the_search() {
        let mut rp = Replanner::new(Board::parse("S..\n...\n..E\n").unwrap(), Rules::default());
        let off = Point::new(1, 1);
        assert!(!rp.route().unwrap().positions.contains(&off));
        assert_eq!(rp.block(off), 4);
        assert_eq!(rp.solves(), 1);

        // Either neighbour of the start carries the route; the other side
        // of the ring is still open.
        let on = rp.route().unwrap().positions[1];
        assert_eq!(rp.block(on), 4);
        assert_eq!(rp.solves(), 2);
        assert!(!rp.route().unwrap().positions.contains(&on));
    }

    #[test]
    fn repeated_and_out_of_bounds_drops_are_ignored() {
        let mut rp = Replanner::new(Board::open(3, 1), Rules::default());
        assert_eq!(rp.block(Point::new(9, 9)), 2);
        assert_eq!(rp.block(Point::new(1, 0)), UNREACHABLE);
        assert_eq!(rp.block(Point::new(1, 0)), UNREACHABLE);
        assert_eq!(rp.solves(), 2);
    }

    #[test]
    fn never_cut_returns_none() {
        let mut rp = Replanner::new(Board::open(3, 3), Rules::default());
        assert_eq!(rp.first_blocking(&[Point::new(1, 1)]), None);
        assert_eq!(rp.cost(), 4);
    }

    #[test]
    fn blocking_the_start_cuts_the_board() {
        let mut rp = Replanner::new(Board::open(4, 4), Rules::with_turns(1000));
        assert_eq!(
            rp.first_blocking(&[Point::new(0, 0)]),
            Some(Blockage {
                index: 0,
                point: Point::new(0, 0)
            })
        );
    }

    #[test]
    fn incremental_costs_match_fresh_solves() {
        let mut rng = StdRng::seed_from_u64(71);
        for rules in [Rules::default(), Rules::with_turns(1000)] {
            let mut rp = Replanner::new(Board::open(11, 11), rules);
            let mut fresh = Planner::new();
            let mut last = rp.cost();
            for _ in 0..60 {
                let p = Point::new(rng.random_range(0..11), rng.random_range(0..11));
                let cost = rp.block(p);
                assert_eq!(cost, fresh.solve_cost(rp.board(), &rules));
                assert!(cost >= last);
                last = cost;
            }
        }
    }
}
