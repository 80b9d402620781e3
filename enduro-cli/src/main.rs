use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;
use std::io::{BufWriter, Write, stdout};

use enduro_game::{RaceConfig, RaceOutcome, RaceStatus, run_race};

// The race is fixed at compile time; only `--help` and `--version` are accepted.
#[derive(Debug, Parser)]
#[command(name = "enduro-sim", version)]
#[command(about = "Fixed 100-lap off-road endurance race for a single vehicle")]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let config = RaceConfig::default();
    config
        .validate()
        .context("built-in race configuration is invalid")?;
    debug!("race configuration: {config:?}");

    let mut out = BufWriter::new(stdout().lock());
    let outcome = simulate(&config, &mut out)?;

    eprintln!("{}", summary_line(&outcome));
    Ok(())
}

fn simulate<W: Write>(config: &RaceConfig, out: &mut W) -> Result<RaceOutcome> {
    let outcome = run_race(config, out).context("failed to write race transcript")?;
    out.flush().context("failed to flush race transcript")?;
    Ok(outcome)
}

fn summary_line(outcome: &RaceOutcome) -> String {
    match outcome.status {
        RaceStatus::Completed => format!("🏁 Race completed: {} laps", outcome.final_lap)
            .green()
            .bold()
            .to_string(),
        RaceStatus::Failed => {
            let cause = outcome
                .cause
                .map_or("unknown", |cause| cause.description());
            format!("❌ Race ended on lap {}: {cause}", outcome.final_lap)
                .red()
                .bold()
                .to_string()
        }
        RaceStatus::Running => format!("⚠️  Race stopped on lap {}", outcome.final_lap)
            .yellow()
            .to_string(),
    }
}
