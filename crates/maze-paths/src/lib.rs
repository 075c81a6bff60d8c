//! Shortest-path search over grid mazes.
//!
//! This crate provides the search engine used by every *mazerun* command:
//!
//! - **Dijkstra** with early exit and route reconstruction
//!   ([`Planner::search`], [`Planner::solve`])
//! - optional **turning costs**, by searching over [`Pose`] states
//!   ([`HeadingGraph`]) instead of bare positions ([`PointGraph`])
//! - **optimal-tile marking**, every tile on any cheapest route
//!   ([`Planner::optimal_tiles`])
//! - **BFS** unit-cost distance maps ([`Planner::bfs_map`],
//!   [`Planner::distance_field`])
//!
//! All searches run through [`Planner`], which owns and reuses internal
//! caches so that repeated queries incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | which tiles can be entered (implemented for `Board`) |
//! | [`StateGraph`] | search states and weighted edges over a `Pather` |

mod bfs;
mod dijkstra;
mod distance;
mod graph;
mod neighbors;
mod optimal;
mod planner;
mod traits;

pub use bfs::DistanceField;
pub use distance::manhattan;
pub use graph::{HeadingGraph, Located, PointGraph, Pose, Rules, StateGraph};
pub use neighbors::Neighbors;
pub use planner::{PathNode, Planner, Route, UNREACHABLE};
pub use traits::Pather;
