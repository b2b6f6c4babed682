//! CLI for faviqon.

mod scan;

use anyhow::Result;
use clap::Parser;
use faviqon_core::config;
use faviqon_core::output::OutputMode;
use std::path::PathBuf;

use scan::run_scan;

const EXAMPLES: &str = "\
Examples:
    cat urls.txt | faviqon
    cat urls.txt | faviqon --shodan
    cat urls.txt | faviqon --shodan --annotate";

/// Favicon hashes and Shodan dorks for a list of base URLs read from stdin.
#[derive(Debug, Parser)]
#[command(name = "faviqon")]
#[command(about = "Favicon fingerprints (Shodan http.favicon.hash) for URLs on stdin", long_about = None)]
#[command(disable_version_flag = true, after_help = EXAMPLES)]
pub struct Cli {
    /// Print Shodan dorks instead of raw hashes.
    #[arg(short = 's', long)]
    pub shodan: bool,

    /// Append the product name to well-known fingerprints.
    #[arg(long)]
    pub annotate: bool,

    /// Read config from this file instead of ~/.config/faviqon/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show version.
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.shodan {
            OutputMode::Dork
        } else {
            OutputMode::Raw
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if cli.version {
            println!("faviqon v{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        run_scan(&cfg, cli.output_mode(), cli.annotate).await
    }
}
