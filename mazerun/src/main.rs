use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mazerun_lib::{Cli, init_logging, run};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let started = Instant::now();
    let outcome = run(&cli.command)?;
    info!("{} finished in {:?}", cli.command.name(), started.elapsed());

    if cli.json {
        let json = serde_json::to_string_pretty(&outcome).context("serializing result")?;
        println!("{json}");
    } else {
        print!("{outcome}");
    }
    Ok(())
}
