//! Search-state graphs layered over a [`Pather`].
//!
//! A search runs over states, not tiles. When turning is free a state is a
//! bare [`Point`]; when turning costs something it is a [`Pose`] and each
//! tile carries four states, one per [`Heading`]. Both graphs number their
//! states densely so the planner can cache per-state nodes in flat vectors.

use std::fmt;

use maze_core::{Heading, Point, Range};

use crate::traits::Pather;

/// A search state with a board position.
pub trait Located {
    fn pos(&self) -> Point;
}

impl Located for Point {
    #[inline]
    fn pos(&self) -> Point {
        *self
    }
}

/// A position plus the direction being faced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Point,
    pub heading: Heading,
}

impl Pose {
    #[inline]
    pub const fn new(pos: Point, heading: Heading) -> Self {
        Self { pos, heading }
    }
}

impl Located for Pose {
    #[inline]
    fn pos(&self) -> Point {
        self.pos
    }
}

/// A finite graph of search states with non-negative edge costs.
///
/// States are addressed by dense indices in `0..state_count()`; edge lists
/// are reported as `(index, cost)` pairs.
pub trait StateGraph {
    type State: Copy + Eq + fmt::Debug + Located;

    fn state_count(&self) -> usize;

    /// Index of `s`, or `None` when it lies outside the graph.
    fn index(&self, s: Self::State) -> Option<usize>;

    fn state(&self, idx: usize) -> Self::State;

    /// Whether the tile under state `idx` can be occupied at all.
    fn passable(&self, idx: usize) -> bool;

    /// Append outgoing edges of `idx` into `buf`. The caller clears `buf`.
    fn successors(&self, idx: usize, buf: &mut Vec<(usize, i32)>);

    /// Append incoming edges of `idx` into `buf`. The caller clears `buf`.
    fn predecessors(&self, idx: usize, buf: &mut Vec<(usize, i32)>);
}

// ---------------------------------------------------------------------------
// PointGraph
// ---------------------------------------------------------------------------

/// Position-only states: every move to a passable neighbour costs `step_cost`.
pub struct PointGraph<'a, P: Pather> {
    pather: &'a P,
    rng: Range,
    step_cost: i32,
}

impl<'a, P: Pather> PointGraph<'a, P> {
    pub fn new(pather: &'a P, step_cost: i32) -> Self {
        Self {
            pather,
            rng: pather.bounds(),
            step_cost: step_cost.max(0),
        }
    }

    fn edges(&self, idx: usize, buf: &mut Vec<(usize, i32)>) {
        let p = self.rng.point(idx);
        for n in p.neighbors_4() {
            if !self.pather.passable(n) {
                continue;
            }
            if let Some(ni) = self.rng.index(n) {
                buf.push((ni, self.step_cost));
            }
        }
    }
}

impl<P: Pather> StateGraph for PointGraph<'_, P> {
    type State = Point;

    #[inline]
    fn state_count(&self) -> usize {
        self.rng.len()
    }

    #[inline]
    fn index(&self, s: Point) -> Option<usize> {
        self.rng.index(s)
    }

    #[inline]
    fn state(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }

    #[inline]
    fn passable(&self, idx: usize) -> bool {
        self.pather.passable(self.rng.point(idx))
    }

    fn successors(&self, idx: usize, buf: &mut Vec<(usize, i32)>) {
        self.edges(idx, buf);
    }

    // Moves are symmetric.
    fn predecessors(&self, idx: usize, buf: &mut Vec<(usize, i32)>) {
        self.edges(idx, buf);
    }
}

// ---------------------------------------------------------------------------
// HeadingGraph
// ---------------------------------------------------------------------------

/// Pose states: stepping forward costs `step_cost`, a 90° turn in place
/// costs `turn_cost`.
pub struct HeadingGraph<'a, P: Pather> {
    pather: &'a P,
    rng: Range,
    step_cost: i32,
    turn_cost: i32,
}

impl<'a, P: Pather> HeadingGraph<'a, P> {
    pub fn new(pather: &'a P, step_cost: i32, turn_cost: i32) -> Self {
        Self {
            pather,
            rng: pather.bounds(),
            step_cost: step_cost.max(0),
            turn_cost: turn_cost.max(0),
        }
    }

    #[inline]
    fn pose_index(&self, pos: Point, heading: Heading) -> Option<usize> {
        self.rng.index(pos).map(|i| i * 4 + heading.index())
    }

    fn step(&self, pose: Pose, delta: Point, buf: &mut Vec<(usize, i32)>) {
        let next = pose.pos + delta;
        if !self.pather.passable(next) {
            return;
        }
        if let Some(ni) = self.pose_index(next, pose.heading) {
            buf.push((ni, self.step_cost));
        }
    }

    fn turns(&self, idx: usize, pose: Pose, buf: &mut Vec<(usize, i32)>) {
        let cell = idx - pose.heading.index();
        for t in pose.heading.turns() {
            buf.push((cell + t.index(), self.turn_cost));
        }
    }
}

impl<P: Pather> StateGraph for HeadingGraph<'_, P> {
    type State = Pose;

    #[inline]
    fn state_count(&self) -> usize {
        self.rng.len() * 4
    }

    #[inline]
    fn index(&self, s: Pose) -> Option<usize> {
        self.pose_index(s.pos, s.heading)
    }

    #[inline]
    fn state(&self, idx: usize) -> Pose {
        Pose::new(self.rng.point(idx / 4), Heading::ALL[idx % 4])
    }

    #[inline]
    fn passable(&self, idx: usize) -> bool {
        self.pather.passable(self.rng.point(idx / 4))
    }

    fn successors(&self, idx: usize, buf: &mut Vec<(usize, i32)>) {
        let pose = self.state(idx);
        self.step(pose, pose.heading.delta(), buf);
        self.turns(idx, pose, buf);
    }

    fn predecessors(&self, idx: usize, buf: &mut Vec<(usize, i32)>) {
        let pose = self.state(idx);
        self.step(pose, pose.heading.reverse().delta(), buf);
        self.turns(idx, pose, buf);
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Movement costs for a board search.
///
/// A zero `turn_cost` searches bare positions; anything else searches poses
/// starting at `start_heading`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    pub step_cost: i32,
    pub turn_cost: i32,
    pub start_heading: Heading,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            step_cost: 1,
            turn_cost: 0,
            start_heading: Heading::East,
        }
    }
}

impl Rules {
    /// Unit steps with a per-turn penalty, facing east at the start.
    pub fn with_turns(turn_cost: i32) -> Self {
        Self {
            turn_cost,
            ..Self::default()
        }
    }

    #[inline]
    pub fn heading_aware(&self) -> bool {
        self.turn_cost != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Board;

    #[test]
    fn point_graph_indices_round_trip() {
        let b = Board::open(4, 3);
        let g = PointGraph::new(&b, 1);
        assert_eq!(g.state_count(), 12);
        for i in 0..g.state_count() {
            assert_eq!(g.index(g.state(i)), Some(i));
        }
        assert_eq!(g.index(Point::new(4, 0)), None);
    }

    #[test]
    fn heading_graph_indices_round_trip() {
        let b = Board::open(3, 2);
        let g = HeadingGraph::new(&b, 1, 1000);
        assert_eq!(g.state_count(), 24);
        for i in 0..g.state_count() {
            assert_eq!(g.index(g.state(i)), Some(i));
        }
    }

    #[test]
    fn heading_graph_successors_step_and_turn() {
        let b = Board::parse("S.\n#E\n").unwrap();
        let g = HeadingGraph::new(&b, 1, 1000);
        let start = g.index(Pose::new(Point::new(0, 0), Heading::East)).unwrap();
        let mut buf = Vec::new();
        g.successors(start, &mut buf);
        let states: Vec<(Pose, i32)> = buf.iter().map(|&(i, c)| (g.state(i), c)).collect();
        assert_eq!(
            states,
            vec![
                (Pose::new(Point::new(1, 0), Heading::East), 1),
                (Pose::new(Point::new(0, 0), Heading::North), 1000),
                (Pose::new(Point::new(0, 0), Heading::South), 1000),
            ]
        );
    }

    #[test]
    fn heading_graph_predecessors_step_backwards() {
        let b = Board::open(3, 1);
        let g = HeadingGraph::new(&b, 1, 7);
        let idx = g.index(Pose::new(Point::new(1, 0), Heading::East)).unwrap();
        let mut buf = Vec::new();
        g.predecessors(idx, &mut buf);
        assert!(buf.contains(&(g.index(Pose::new(Point::new(0, 0), Heading::East)).unwrap(), 1)));
        assert_eq!(buf.iter().filter(|&&(_, c)| c == 7).count(), 2);
    }

    #[test]
    fn walls_are_not_passable() {
        let b = Board::parse("S#E\n").unwrap();
        let g = PointGraph::new(&b, 1);
        assert!(!g.passable(1));
        let mut buf = Vec::new();
        g.successors(0, &mut buf);
        assert!(buf.is_empty());
    }
}
