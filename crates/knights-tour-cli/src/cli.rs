use anyhow::{bail, Context, Result};
use clap::Parser;
use knights_tour_core::{Square, TourConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Build a knight's tour with Warnsdorff's heuristic
#[derive(Debug, Parser)]
#[command(name = "knights-tour", version, about)]
pub struct Args {
    /// Starting square as `x,y` (0-based)
    #[arg(short, long, default_value = "0,0", value_parser = parse_square)]
    pub start: Square,

    /// Board width and height
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Maximum attempts before giving up
    #[arg(short = 'a', long)]
    pub attempts: Option<usize>,

    /// Only accept closed tours
    #[arg(long)]
    pub closed: bool,

    /// Seed for a reproducible tour
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with `board_size`, `max_attempts`, `require_closed`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the tour as JSON
    #[arg(long)]
    pub json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// File values first, then explicit flags on top
    pub fn resolve_config(&self) -> Result<TourConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => TourConfig::default(),
        };
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(attempts) = self.attempts {
            config.max_attempts = attempts;
        }
        if self.closed {
            config.require_closed = true;
        }
        Ok(config)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn load_config(path: &Path) -> Result<TourConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn parse_square(s: &str) -> Result<Square> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected `x,y`, got `{}`", s);
    };
    let x = x.trim().parse::<i32>().with_context(|| format!("bad x coordinate `{}`", x))?;
    let y = y.trim().parse::<i32>().with_context(|| format!("bad y coordinate `{}`", y))?;
    Ok(Square::new(x, y))
}
