//! Running a parsed [`Command`] and describing its result.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use maze_core::{Board, parse_points};
use maze_paths::{Planner, UNREACHABLE};
use maze_replan::{Blockage, Replanner};
use serde::Serialize;

use crate::cli::{BlockArgs, Command, ShortcutArgs, TILES_TURN_COST};

/// What a command found.
///
/// `Display` gives the plain-text answer; serializing gives the `--json`
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Outcome {
    Solve {
        cost: Option<i32>,
        steps: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        rendered: Option<String>,
    },
    Tiles {
        cost: Option<i32>,
        tiles: usize,
    },
    CostAfter {
        drops: usize,
        cost: Option<i32>,
    },
    FirstBlocking {
        blockage: Option<Blockage>,
        searches: usize,
    },
    Shortcuts {
        baseline: Option<i32>,
        count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        histogram: Option<BTreeMap<i32, usize>>,
    },
}

fn finite(cost: i32) -> Option<i32> {
    (cost != UNREACHABLE).then_some(cost)
}

/// Read the command's input file and run it.
pub fn run(command: &Command) -> Result<Outcome> {
    let path = command.input();
    let text = read_input(path)?;
    execute(command, &text).with_context(|| format!("{} {}", command.name(), path.display()))
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Run `command` against input already in memory.
pub fn execute(command: &Command, text: &str) -> Result<Outcome> {
    match command {
        Command::Solve { costs, render } => {
            let board = Board::parse(text).context("parsing maze")?;
            let mut planner = Planner::new();
            let route = planner.solve(&board, &costs.rules(0));
            let rendered = match (&route, *render) {
                (Some(r), true) => Some(board.render_route(&r.positions)),
                _ => None,
            };
            Ok(Outcome::Solve {
                cost: route.as_ref().map(|r| r.cost),
                steps: route.as_ref().map(|r| r.steps()),
                rendered,
            })
        }
        Command::Tiles { costs } => {
            let board = Board::parse(text).context("parsing maze")?;
            let rules = costs.rules(TILES_TURN_COST);
            let mut planner = Planner::new();
            let cost = finite(planner.solve_cost(&board, &rules));
            let tiles = planner.optimal_tiles(&board, &rules).len();
            Ok(Outcome::Tiles { cost, tiles })
        }
        Command::Block(args) => block(args, text),
        Command::Shortcuts(args) => shortcuts(args, text),
    }
}

fn block(args: &BlockArgs, text: &str) -> Result<Outcome> {
    let events = parse_points(text).context("parsing obstacle list")?;
    info!(
        "{} drops onto a {}x{} board",
        events.len(),
        args.width,
        args.height
    );
    let mut rp = Replanner::new(Board::open(args.width, args.height), Default::default());
    match args.first {
        Some(n) => {
            let drops = n.min(events.len());
            let cost = finite(rp.cost_after(&events[..drops]));
            Ok(Outcome::CostAfter { drops, cost })
        }
        None => {
            let blockage = rp.first_blocking(&events);
            Ok(Outcome::FirstBlocking {
                blockage,
                searches: rp.solves(),
            })
        }
    }
}

fn shortcuts(args: &ShortcutArgs, text: &str) -> Result<Outcome> {
    let board = Board::parse(text).context("parsing maze")?;
    let report = args.config().find(&board);
    Ok(Outcome::Shortcuts {
        baseline: finite(report.baseline),
        count: report.count(),
        histogram: args.histogram.then(|| report.histogram()),
    })
}

const NO_SOLUTION: &str = "no solution";

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solve { cost, rendered, .. } => {
                match cost {
                    Some(c) => writeln!(f, "{c}")?,
                    None => writeln!(f, "{NO_SOLUTION}")?,
                }
                if let Some(r) = rendered {
                    write!(f, "{r}")?;
                }
                Ok(())
            }
            Outcome::Tiles { tiles, .. } => writeln!(f, "{tiles}"),
            Outcome::CostAfter { cost, .. } => match cost {
                Some(c) => writeln!(f, "{c}"),
                None => writeln!(f, "{NO_SOLUTION}"),
            },
            Outcome::FirstBlocking { blockage, .. } => match blockage {
                Some(b) => writeln!(f, "{},{}", b.point.x, b.point.y),
                None => writeln!(f, "no blocking drop"),
            },
            Outcome::Shortcuts {
                count, histogram, ..
            } => {
                writeln!(f, "{count}")?;
                for (savings, n) in histogram.iter().flatten() {
                    writeln!(f, "{savings}: {n}")?;
                }
                Ok(())
            }
        }
    }
}
