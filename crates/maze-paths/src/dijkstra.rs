use log::debug;
use maze_core::{Board, Point};

use crate::Planner;
use crate::graph::{HeadingGraph, Located, PointGraph, Pose, Rules, StateGraph};
use crate::planner::{NodeRef, Route, UNREACHABLE};
use crate::traits::Pather;

impl Planner {
    /// Cheapest cost from `start` to the first state satisfying `goal`.
    ///
    /// Returns [`UNREACHABLE`] when the frontier runs dry, or when `start` is
    /// outside the graph or not passable. The search stops as soon as a goal
    /// state is popped; [`route`](Self::route) then rebuilds the path to it.
    /// Passing a goal that never matches sweeps every reachable state.
    pub fn search<G: StateGraph>(
        &mut self,
        graph: &G,
        start: G::State,
        goal: impl Fn(G::State) -> bool,
    ) -> i32 {
        let cur_gen = self.begin(graph.state_count());

        let Some(si) = graph.index(start) else {
            return UNREACHABLE;
        };
        if !graph.passable(si) {
            return UNREACHABLE;
        }

        {
            let n = &mut self.nodes[si];
            n.g = 0;
            n.parent = usize::MAX;
            n.generation = cur_gen;
            n.open = true;
        }
        self.seq += 1;
        self.open.push(NodeRef {
            idx: si,
            cost: 0,
            seq: self.seq,
        });

        let mut ebuf = std::mem::take(&mut self.ebuf);
        let mut pops = 0usize;

        let result = loop {
            let Some(current) = self.open.pop() else {
                break UNREACHABLE;
            };
            let ci = current.idx;

            // Skip stale entries.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open || current.cost > cn.g {
                continue;
            }
            let current_g = cn.g;
            pops += 1;

            if goal(graph.state(ci)) {
                self.reached = Some(ci);
                break current_g;
            }
            self.nodes[ci].open = false;

            ebuf.clear();
            graph.successors(ci, &mut ebuf);

            for &(ni, w) in ebuf.iter() {
                let tentative = current_g.saturating_add(w);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative;
                n.parent = ci;
                n.open = true;

                self.seq += 1;
                self.open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                    seq: self.seq,
                });
            }
        };

        self.ebuf = ebuf;
        debug!(
            "search from {:?}: cost {}, {} states expanded",
            start,
            if result == UNREACHABLE { "unreachable".to_string() } else { result.to_string() },
            pops
        );
        result
    }

    /// The route to the goal reached by the last [`search`](Self::search),
    /// or `None` if that search found nothing.
    pub fn route<G: StateGraph>(&self, graph: &G) -> Option<Route> {
        let goal = self.reached?;
        let cost = self.g(goal);
        let mut positions = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            let p = graph.state(ci).pos();
            if positions.last() != Some(&p) {
                positions.push(p);
            }
            ci = self.nodes[ci].parent;
        }
        positions.reverse();
        Some(Route { cost, positions })
    }

    /// Cost of `s` in the last search, or [`UNREACHABLE`] if it was never
    /// reached (or lies outside the graph).
    pub fn cost_at<G: StateGraph>(&self, graph: &G, s: G::State) -> i32 {
        match graph.index(s) {
            Some(i) => self.g(i),
            None => UNREACHABLE,
        }
    }

    /// Cheapest route from `from` to `to` under `rules`.
    ///
    /// When turns cost something the walker starts facing
    /// `rules.start_heading` and may arrive facing any direction.
    pub fn route_between<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        rules: &Rules,
    ) -> Option<Route> {
        if rules.heading_aware() {
            let graph = HeadingGraph::new(pather, rules.step_cost, rules.turn_cost);
            self.search(&graph, Pose::new(from, rules.start_heading), |s| s.pos == to);
            self.route(&graph)
        } else {
            let graph = PointGraph::new(pather, rules.step_cost);
            self.search(&graph, from, |p| p == to);
            self.route(&graph)
        }
    }

    /// Cheapest route from the board's start to its end.
    pub fn solve(&mut self, board: &Board, rules: &Rules) -> Option<Route> {
        self.route_between(board, board.start(), board.end(), rules)
    }

    /// Cost of [`solve`](Self::solve), [`UNREACHABLE`] when there is no route.
    pub fn solve_cost(&mut self, board: &Board, rules: &Rules) -> i32 {
        self.solve(board, rules).map_or(UNREACHABLE, |r| r.cost)
    }
}
