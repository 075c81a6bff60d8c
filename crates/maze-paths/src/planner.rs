use std::collections::{BinaryHeap, VecDeque};

use maze_core::{Point, Range};

/// A position with an associated cost, returned from distance-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// One cheapest route found by a search.
///
/// `positions` runs from the start to the goal; turning in place does not
/// repeat a position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub cost: i32,
    pub positions: Vec<Point>,
}

impl Route {
    /// Number of moves between tiles.
    pub fn steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered for `BinaryHeap` so the cheapest entry pops
/// first and equal costs pop in insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "unreachable".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Owner of every search cache.
///
/// Per-state costs, parents and open flags are stamped with a generation;
/// bumping the generation resets all of them at once, so one `Planner` can
/// be reused for any number of searches without reallocating.
#[derive(Default)]
pub struct Planner {
    // frontier search caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) seq: u64,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) reached: Option<usize>,
    pub(crate) searches: usize,
    // BFS caches
    pub(crate) bfs_rng: Range,
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_queue: VecDeque<usize>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffers
    pub(crate) nbuf: Vec<Point>,
    pub(crate) ebuf: Vec<(usize, i32)>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frontier searches run so far.
    #[inline]
    pub fn searches(&self) -> usize {
        self.searches
    }

    /// Start a new generation sized for `len` states.
    ///
    /// Growing reallocates; otherwise the old nodes stay and are ignored
    /// because their generation no longer matches.
    pub(crate) fn begin(&mut self, len: usize) -> u32 {
        if self.nodes.len() < len {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.open.clear();
        self.reached = None;
        self.searches += 1;
        self.generation
    }

    /// Best-known cost of state `idx` in the current generation.
    #[inline]
    pub(crate) fn g(&self, idx: usize) -> i32 {
        match self.nodes.get(idx) {
            Some(n) if n.generation == self.generation && self.generation != 0 => n.g,
            _ => UNREACHABLE,
        }
    }
}
