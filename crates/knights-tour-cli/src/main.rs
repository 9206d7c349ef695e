mod cli;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use knights_tour_core::{build_with_config, entropy_seed, SimpleRng, Square, Tour, TourConfig, TourResult};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.resolve_config()?;
    debug!(?config, start = %args.start, seeded = args.seed.is_some(), "starting search");
    let tour = search(args.start, &config, args.seed)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        output::write_json(&mut stdout, &tour)?;
    } else {
        output::write_plain(&mut stdout, &tour)?;
    }
    Ok(())
}

/// Unseeded runs draw a seed and log it, so any tour can be rebuilt with `--seed`
fn search(start: Square, config: &TourConfig, seed: Option<u64>) -> TourResult<Tour> {
    let seed = seed.unwrap_or_else(|| {
        let seed = entropy_seed();
        info!(seed, "using random seed");
        seed
    });
    build_with_config(start, config, &mut SimpleRng::with_seed(seed))
}
