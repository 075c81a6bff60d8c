//! Scoring bypasses that phase through walls.
//!
//! A shortcut leaves the normal route at an *entry* tile, travels in a
//! straight Manhattan line through whatever terrain lies in between, and
//! rejoins open ground at an *exit* tile. Its cost is the walking distance
//! from the start to the entry, plus the Manhattan length of the bypass, plus
//! the walking distance from the exit to the end.

use std::collections::BTreeMap;

use log::{debug, info};
use maze_core::{Board, Point};
use maze_paths::{DistanceField, Neighbors, Planner, UNREACHABLE, manhattan};

/// Tunables for [`find_shortcuts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortcutConfig {
    /// Longest bypass allowed, in Manhattan steps.
    pub max_radius: i32,
    /// Smallest saving worth reporting.
    pub min_savings: i32,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            max_radius: 20,
            min_savings: 100,
        }
    }
}

impl ShortcutConfig {
    pub fn find(&self, board: &Board) -> ShortcutReport {
        find_shortcuts(board, self.max_radius, self.min_savings)
    }
}

/// One qualifying bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortcut {
    pub entry: Point,
    pub exit: Point,
    /// Total route cost when taking the bypass.
    pub cost: i32,
    /// `baseline - cost`.
    pub savings: i32,
}

/// Result of [`find_shortcuts`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortcutReport {
    /// Cheapest cost on the unmodified board, or [`UNREACHABLE`].
    pub baseline: i32,
    /// Sorted by savings descending, then entry, then exit.
    pub shortcuts: Vec<Shortcut>,
}

impl ShortcutReport {
    pub fn count(&self) -> usize {
        self.shortcuts.len()
    }

    /// Number of shortcuts per savings value, ascending.
    pub fn histogram(&self) -> BTreeMap<i32, usize> {
        let mut hist = BTreeMap::new();
        for s in &self.shortcuts {
            *hist.entry(s.savings).or_insert(0) += 1;
        }
        hist
    }
}

/// Find every bypass of at most `max_radius` Manhattan steps that beats the
/// unobstructed cheapest route by at least `min_savings`.
///
/// Steps cost 1 and turns are free. Entries are open tiles reachable from
/// the start, exits are open tiles from which the end is reachable.
pub fn find_shortcuts(board: &Board, max_radius: i32, min_savings: i32) -> ShortcutReport {
    let mut planner = Planner::new();
    let from_start = planner.distance_field(board, &[board.start()]);
    let to_end = planner.distance_field(board, &[board.end()]);

    let baseline = from_start.at(board.end());
    if baseline == UNREACHABLE {
        debug!("end unreachable, no shortcuts to score");
        return ShortcutReport {
            baseline,
            shortcuts: Vec::new(),
        };
    }

    // No exit on the board lies farther away than this.
    let radius = max_radius.min(board.width() + board.height());
    let mut shortcuts = Vec::new();
    let mut nb = Neighbors::new();
    for node in from_start.iter() {
        let entry = node.pos;
        let exits = nb.diamond(entry, radius, |p| to_end.reached(p));
        for &exit in exits {
            if let Some(s) = score(&to_end, entry, node.cost, exit, baseline, min_savings) {
                shortcuts.push(s);
            }
        }
    }

    shortcuts.sort_by(|a, b| {
        b.savings
            .cmp(&a.savings)
            .then(a.entry.cmp(&b.entry))
            .then(a.exit.cmp(&b.exit))
    });
    info!(
        "{} shortcuts within {radius} steps save at least {min_savings} on {baseline}",
        shortcuts.len()
    );
    ShortcutReport {
        baseline,
        shortcuts,
    }
}

fn score(
    to_end: &DistanceField,
    entry: Point,
    entry_cost: i32,
    exit: Point,
    baseline: i32,
    min_savings: i32,
) -> Option<Shortcut> {
    let cost = entry_cost + manhattan(entry, exit) + to_end.at(exit);
    let savings = baseline - cost;
    (cost < baseline && savings >= min_savings).then_some(Shortcut {
        entry,
        exit,
        cost,
        savings,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn shortcut_round_trip() {
        let s = Shortcut {
            entry: Point::new(1, 2),
            exit: Point::new(3, 2),
            cost: 40,
            savings: 64,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Shortcut = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
