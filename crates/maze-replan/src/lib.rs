//! Mazes that change under the solver.
//!
//! [`Replanner`] keeps the cheapest route of a board current while obstacles
//! drop onto it, searching again only when a drop cuts the route it holds.
//! [`find_shortcuts`] scores bypasses that phase through walls against the
//! unobstructed optimum.

mod replan;
mod shortcuts;

pub use replan::{Blockage, Replanner};
pub use shortcuts::{Shortcut, ShortcutConfig, ShortcutReport, find_shortcuts};
