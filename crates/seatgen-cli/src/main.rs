//! seatgen console launcher
//!
//! Loads a seat config, generates a seat table and prints or exports it.
//!
//! Usage:
//!   seatgen generate --config seat_config.json
//!   seatgen generate --config seat_config.json --seed 2024 --output seats.csv
//!   seatgen check --config seat_config.json

mod config;
mod export;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use rand::Rng;
use seatgen_logic::config::validate_config;
use seatgen_logic::{SeatGenerator, SeatTable};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "seatgen",
    about = "Generate classroom seat tables from a seat config",
    version
)]
struct Cli {
    /// Log generation details.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a seat table.
    Generate(GenerateArgs),
    /// Validate a seat config and show the empty table it describes.
    Check {
        #[arg(long, short)]
        config: PathBuf,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Seat config file (JSON).
    #[arg(long, short)]
    config: PathBuf,

    /// Seed to replay; a random one is drawn and printed when omitted.
    #[arg(long, short, conflicts_with = "no_seed")]
    seed: Option<String>,

    /// Generate without any seed.
    #[arg(long)]
    no_seed: bool,

    /// Export to this file instead of printing (.json, .csv, anything else is text).
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Check { config } => check(&config),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    let seed = resolve_seed(args.seed, args.no_seed);

    let generator = SeatGenerator::new(&config)?;
    let (table, attempts) = generator.generate_with_attempts(seed.as_deref())?;
    info!(attempts, seed = seed.as_deref().unwrap_or("<none>"), "generated seat table");

    match &args.output {
        Some(path) => export::export(&table, path)?,
        None => println!("{table}"),
    }
    if let Some(seed) = &seed {
        println!("Seed: {seed}");
    }
    Ok(())
}

/// The seed for this run: the one given, none at all, or a fresh random
/// integer that can be replayed later.
fn resolve_seed(seed: Option<String>, no_seed: bool) -> Option<String> {
    if no_seed {
        return None;
    }
    Some(seed.unwrap_or_else(|| {
        let drawn = rand::thread_rng().gen::<i64>().to_string();
        debug!(seed = %drawn, "drew random seed");
        drawn
    }))
}

fn check(path: &std::path::Path) -> Result<()> {
    let config = config::load(path)?;
    let problems = validate_config(&config);
    for problem in &problems {
        eprintln!("  - {problem}");
    }
    if !problems.is_empty() {
        bail!("{} problem(s) in {}", problems.len(), path.display());
    }
    config.check()?;

    println!("{}", SeatTable::empty(&config));
    println!(
        "{} seats for {} people, {} separated pair(s)",
        config.seat_count(),
        config.people_in_seat_count(),
        config.separated_pairs.len()
    );
    Ok(())
}
