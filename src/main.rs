use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flow_ratio::config::ScenarioFile;
use flow_ratio::report::ScenarioReport;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Split a doubled token flow rate by the ratio of two reserves"
)]
struct Args {
    /// Path to a TOML scenario file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base flow rate in tokens per second, e.g. 0.00003858
    #[arg(long)]
    flow_rate: Option<String>,

    /// Reserve of token 1 (ratio denominator)
    #[arg(long)]
    token1: Option<String>,

    /// Reserve of token 2 (ratio numerator)
    #[arg(long)]
    token2: Option<String>,

    /// Ratio used by the floating-point cross-check (default 0.99)
    #[arg(long)]
    cross_check_ratio: Option<f64>,
}

impl Args {
    fn overrides(&self) -> ScenarioFile {
        ScenarioFile {
            flow_rate: self.flow_rate.clone(),
            token1: self.token1.clone(),
            token2: self.token2.clone(),
            cross_check_ratio: self.cross_check_ratio,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => ScenarioFile::from_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioFile::default(),
    };
    let config = base
        .overlay(args.overrides())
        .resolve()
        .context("invalid scenario")?;
    info!(?config, "running scenario");

    let report = ScenarioReport::run(&config).context("flow split failed")?;
    println!("{report}");
    Ok(())
}
