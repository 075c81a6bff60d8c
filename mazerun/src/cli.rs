//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use maze_core::Heading;
use maze_paths::Rules;
use maze_replan::ShortcutConfig;

#[derive(Parser, Debug)]
#[command(name = "mazerun", version, about = "Solve grid mazes and the puzzles built on them")]
pub struct Cli {
    /// Print the result as one JSON object.
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the cheapest route cost from S to E.
    Solve {
        #[command(flatten)]
        costs: CostArgs,
        /// Also print the board with the route drawn in.
        #[arg(long)]
        render: bool,
    },
    /// Count the tiles that lie on any cheapest route.
    Tiles {
        #[command(flatten)]
        costs: CostArgs,
    },
    /// Drop obstacles onto an open board and watch the route.
    Block(BlockArgs),
    /// Count wall-phasing bypasses that save enough steps.
    Shortcuts(ShortcutArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Solve { .. } => "solve",
            Command::Tiles { .. } => "tiles",
            Command::Block(_) => "block",
            Command::Shortcuts(_) => "shortcuts",
        }
    }

    pub fn input(&self) -> &Path {
        match self {
            Command::Solve { costs, .. } => &costs.input,
            Command::Tiles { costs } => &costs.input,
            Command::Block(args) => &args.input,
            Command::Shortcuts(args) => &args.input,
        }
    }
}

/// Turn cost `tiles` uses when `--turn-cost` is not given.
pub const TILES_TURN_COST: i32 = 1000;

#[derive(Args, Debug)]
pub struct CostArgs {
    /// Maze file.
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Cost of moving one tile.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(0..))]
    pub step_cost: i32,

    /// Cost of a 90 degree turn; 0 ignores headings [default: 0 for solve,
    /// 1000 for tiles].
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..))]
    pub turn_cost: Option<i32>,

    /// Heading at the start tile.
    #[arg(long, default_value = "east")]
    pub heading: Heading,
}

impl CostArgs {
    /// The search rules, pricing turns at `default_turn_cost` unless
    /// `--turn-cost` was given.
    pub fn rules(&self, default_turn_cost: i32) -> Rules {
        Rules {
            step_cost: self.step_cost,
            turn_cost: self.turn_cost.unwrap_or(default_turn_cost),
            start_heading: self.heading,
        }
    }
}

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// Obstacle list, one `x,y` per line.
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    #[arg(long, default_value_t = 71, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    #[arg(long, default_value_t = 71, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Report the cost after this many drops instead of the first cut.
    #[arg(long)]
    pub first: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShortcutArgs {
    /// Maze file.
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Longest bypass, in Manhattan steps.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(0..))]
    pub radius: i32,

    /// Smallest saving to count.
    #[arg(long, default_value_t = 100)]
    pub min_savings: i32,

    /// Also print how many bypasses give each saving.
    #[arg(long)]
    pub histogram: bool,
}

impl ShortcutArgs {
    pub fn config(&self) -> ShortcutConfig {
        ShortcutConfig {
            max_radius: self.radius,
            min_savings: self.min_savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mazerun").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_defaults() {
        let cli = parse(&["solve"]);
        assert!(!cli.json);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        let Command::Solve { costs, render } = cli.command else {
            panic!("expected solve");
        };
        assert!(!render);
        assert_eq!(costs.input, PathBuf::from("input.txt"));
        assert_eq!(costs.rules(0), Rules::default());
    }

    #[test]
    fn tiles_price_turns_by_default() {
        let cli = parse(&["tiles", "maze.txt", "--heading", "north"]);
        assert_eq!(cli.command.input(), Path::new("maze.txt"));
        let Command::Tiles { costs } = cli.command else {
            panic!("expected tiles");
        };
        let rules = costs.rules(TILES_TURN_COST);
        assert_eq!(rules.turn_cost, 1000);
        assert_eq!(rules.start_heading, Heading::North);
    }

    #[test]
    fn explicit_turn_cost_overrides_the_command_default() {
        let cli = parse(&["tiles", "--turn-cost", "0"]);
        let Command::Tiles { costs } = cli.command else {
            panic!("expected tiles");
        };
        assert_eq!(costs.rules(TILES_TURN_COST), Rules::default());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["block", "--first", "1024", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        let Command::Block(args) = cli.command else {
            panic!("expected block");
        };
        assert_eq!((args.width, args.height), (71, 71));
        assert_eq!(args.first, Some(1024));
    }

    #[test]
    fn shortcut_config_from_flags() {
        let cli = parse(&["shortcuts", "--radius", "2", "--min-savings", "50"]);
        let Command::Shortcuts(args) = cli.command else {
            panic!("expected shortcuts");
        };
        assert_eq!(
            args.config(),
            ShortcutConfig {
                max_radius: 2,
                min_savings: 50
            }
        );
        assert!(!args.histogram);
    }

    #[test]
    fn rejects_bad_values() {
        let argv = |a: &[&str]| Cli::try_parse_from(std::iter::once("mazerun").chain(a.iter().copied()));
        assert!(argv(&["solve", "--heading", "sideways"]).is_err());
        assert!(argv(&["solve", "--turn-cost", "-5"]).is_err());
        assert!(argv(&["block", "--width", "0"]).is_err());
        assert!(argv(&[]).is_err());
    }
}
