//! Nash Report
//!
//! Prints the pure-strategy Nash equilibria of a two-player game.
//! Without input flags the built-in example game is analysed.
//!
//! Logging follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nash_logic::{strict_equilibrium, PayoffMatrix, Report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file of the form {"rows": [[[p1, p2], ...], ...]}
    #[arg(long, conflicts_with = "json")]
    matrix: Option<PathBuf>,

    /// Inline JSON matrix, same shape as --matrix
    #[arg(long)]
    json: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load_matrix(args: &Args) -> Result<PayoffMatrix> {
    if let Some(path) = &args.matrix {
        log::info!("reading matrix from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("cannot open {}", path.display()))?;
        return PayoffMatrix::from_reader(BufReader::new(file))
            .with_context(|| format!("cannot load matrix from {}", path.display()));
    }
    if let Some(json) = &args.json {
        return PayoffMatrix::from_json(json).context("cannot load inline matrix");
    }
    log::info!("no matrix given, using the built-in example");
    Ok(PayoffMatrix::default())
}

fn render(report: &Report, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(report.to_string()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let matrix = load_matrix(&args)?;
    log::info!("analysing {}x{} game", matrix.rows(), matrix.cols());

    let report = strict_equilibrium(&matrix);
    print!("{}", render(&report, args.format)?);
    Ok(())
}
