//! `stridecalc` command-line entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use stridecalc_core::report::{render_output, OutputFormat};
use stridecalc_core::{load_config, CalcConfig, TrainingInfoService};

/// Distance, speed and calories from a step record.
#[derive(Debug, Parser)]
#[command(name = "stridecalc", version)]
struct Args {
    /// "<steps>,<duration>" or "<steps>,<activity>,<duration>", e.g. "6000,Running,0h45m"
    record: String,

    /// Body weight in kg
    #[arg(long)]
    weight: f64,

    /// Height in m (optional for running)
    #[arg(long, default_value_t = 0.0)]
    height: f64,

    /// JSON file with calculation coefficients
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use daily-steps semantics (fixed step length, short report)
    #[arg(long)]
    day_steps: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Log filter from `STRIDECALC_LOG` (or `RUST_LOG`), default `warn`.
    let log_env = std::env::var("STRIDECALC_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CalcConfig::default(),
    };
    let service = TrainingInfoService::new(config);

    let result = if args.day_steps {
        service.compute_day_steps(&args.record, args.weight, args.height)
    } else {
        service.compute(&args.record, args.weight, args.height)
    };
    let summary = result.with_context(|| format!("computing summary for {:?}", args.record))?;

    let format = if args.json {
        OutputFormat::Json
    } else if args.day_steps {
        OutputFormat::DaySteps
    } else {
        OutputFormat::Training
    };
    print!("{}", render_output(&summary, format)?);
    Ok(())
}
