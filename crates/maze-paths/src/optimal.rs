//! Tiles shared by the cheapest routes.

use std::collections::{BTreeSet, VecDeque};

use maze_core::{Board, Point};

use crate::Planner;
use crate::graph::{HeadingGraph, Located, PointGraph, Pose, Rules, StateGraph};
use crate::planner::UNREACHABLE;
use crate::traits::Pather;

impl Planner {
    /// Every position that lies on at least one cheapest route from `from`
    /// to `to`, in row-major order. Empty when `to` is unreachable.
    pub fn optimal_tiles_between<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        rules: &Rules,
    ) -> Vec<Point> {
        if rules.heading_aware() {
            let graph = HeadingGraph::new(pather, rules.step_cost, rules.turn_cost);
            self.mark_optimal(&graph, Pose::new(from, rules.start_heading), to)
        } else {
            let graph = PointGraph::new(pather, rules.step_cost);
            self.mark_optimal(&graph, from, to)
        }
    }

    /// [`optimal_tiles_between`](Self::optimal_tiles_between) the board's
    /// start and end.
    pub fn optimal_tiles(&mut self, board: &Board, rules: &Rules) -> Vec<Point> {
        self.optimal_tiles_between(board, board.start(), board.end(), rules)
    }

    fn mark_optimal<G: StateGraph>(&mut self, graph: &G, start: G::State, to: Point) -> Vec<Point> {
        // A full sweep, so every goal state that ties for best is settled.
        self.search(graph, start, |_| false);

        let goals: Vec<usize> = (0..graph.state_count())
            .filter(|&i| graph.state(i).pos() == to)
            .collect();
        let best = goals.iter().map(|&i| self.g(i)).min().unwrap_or(UNREACHABLE);
        if best == UNREACHABLE {
            return Vec::new();
        }

        let mut seen = vec![false; graph.state_count()];
        let mut queue = VecDeque::new();
        for &i in &goals {
            if self.g(i) == best {
                seen[i] = true;
                queue.push_back(i);
            }
        }

        let mut tiles = BTreeSet::new();
        let mut ebuf = std::mem::take(&mut self.ebuf);
        while let Some(si) = queue.pop_front() {
            let sg = self.g(si);
            tiles.insert(graph.state(si).pos());

            ebuf.clear();
            graph.predecessors(si, &mut ebuf);
            for &(pi, w) in ebuf.iter() {
                if seen[pi] {
                    continue;
                }
                let pg = self.g(pi);
                if pg != UNREACHABLE && pg.saturating_add(w) == sg {
                    seen[pi] = true;
                    queue.push_back(pi);
                }
            }
        }
        self.ebuf = ebuf;

        tiles.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REINDEER: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    #[test]
    fn equal_branches_are_both_marked() {
        let b = Board::parse("S..\n.#.\n..E\n").unwrap();
        let mut pl = Planner::new();
        let tiles = pl.optimal_tiles(&b, &Rules::default());
        assert_eq!(tiles.len(), 8);
        assert!(!tiles.contains(&Point::new(1, 1)));
    }

    #[test]
    fn turn_cost_breaks_the_tie() {
        let b = Board::parse("S..\n.#.\n..E\n").unwrap();
        let mut pl = Planner::new();
        let tiles = pl.optimal_tiles(&b, &Rules::with_turns(1000));
        assert_eq!(
            tiles,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn reindeer_maze_cost_and_tiles() {
        let b = Board::parse(REINDEER).unwrap();
        let rules = Rules::with_turns(1000);
        let mut pl = Planner::new();
        assert_eq!(pl.solve_cost(&b, &rules), 7036);
        let tiles = pl.optimal_tiles(&b, &rules);
        assert_eq!(tiles.len(), 45);
        assert!(tiles.contains(&b.start()));
        assert!(tiles.contains(&b.end()));
        assert!(tiles.iter().all(|&p| b.is_open(p)));
    }

    #[test]
    fn unreachable_end_marks_nothing() {
        let b = Board::parse("S#E\n").unwrap();
        let mut pl = Planner::new();
        assert!(pl.optimal_tiles(&b, &Rules::default()).is_empty());
    }

    #[test]
    fn every_route_tile_is_optimal() {
        let b = Board::parse(REINDEER).unwrap();
        let rules = Rules::with_turns(1000);
        let mut pl = Planner::new();
        let route = pl.solve(&b, &rules).unwrap();
        let tiles = pl.optimal_tiles(&b, &rules);
        for p in route.positions {
            assert!(tiles.contains(&p), "{p} missing");
        }
    }
}
