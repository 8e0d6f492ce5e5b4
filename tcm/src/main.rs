//! tcm - TACL catalogue manager
//!
//! Generates TACL catalogue files from a control file, printing one line per
//! work id dropped from a lower-precedence group.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tcm::build_info::LONG_VERSION;
use tcm::config::TomlConfig;
use tcm::Controller;
use tracing::{error, info};

/// Command-line arguments for tcm
#[derive(Parser, Debug)]
#[command(name = "tcm")]
#[command(about = "Manager for creating TACL catalogue files")]
#[command(version, long_version = LONG_VERSION)]
struct Args {
    /// Control file naming the groups file and the mapping/catalogue pairs
    control: PathBuf,

    /// Directory to write catalogues to (created if missing; defaults to
    /// $TCM_OUTPUT_DIR, then the configured `output_dir`)
    output_dir: Option<PathBuf>,

    /// Configuration file (defaults to $TCM_CONFIG, then the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print the duplicate report
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = TomlConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG overrides the configured level; logs go to stderr so stdout
    // carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tcm v{}", LONG_VERSION);

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(args: &Args, config: &TomlConfig) -> Result<()> {
    let output_dir = config.resolve_output_dir(args.output_dir.as_deref());
    info!("Control file: {}", args.control.display());
    info!("Output directory: {}", output_dir.display());

    let mut controller = Controller::new();
    controller
        .load_control(&args.control)
        .with_context(|| format!("Failed to load control file {}", args.control.display()))?;

    let report = controller
        .generate_catalogues(&output_dir)
        .context("Failed to generate catalogues")?;

    if !args.quiet {
        for line in &report {
            println!("{}", line);
        }
    }

    info!(
        "✓ Wrote {} catalogues ({} duplicates removed)",
        controller.mappings().len(),
        report.len()
    );
    Ok(())
}
