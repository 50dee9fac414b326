//! tint - apply color filters to PNG images
//!
//! Thin wrapper over `tint-ops`: decode, run the pipeline, encode.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Apply strength-blended color filters to images")]
#[command(long_about = "
Applies negative, freeze, grayscale, sepia and dim filters to PNG images.

Filter names: \"Negative Filter\", \"Freeze Filter\", \"Grayscale Filter\",
\"Sepia Filter\", \"Dim Filter\". Strengths are clamped to 0.0-1.0.

Examples:
  tint apply in.png -o out.png -f \"Freeze Filter\" -f \"Dim Filter\"
  tint apply in.png -o out.png -f \"Sepia Filter=0.5\"
  tint explicit in.png -o out.png --negative 1.0 --dim 0.3
  tint preset in.png -o out.png -p look.yaml
  tint list
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply filters by name, in the given order
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Apply selected filters in canonical order
    #[command(visible_alias = "x")]
    Explicit(ExplicitArgs),

    /// Apply a YAML preset
    #[command(visible_alias = "p")]
    Preset(PresetArgs),

    /// List filter names and default strengths
    #[command(visible_alias = "l")]
    List,

    /// Show image dimensions and channel means
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
pub(crate) struct ApplyArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Filter step: NAME or NAME=STRENGTH (repeatable, applied in order)
    #[arg(short, long = "filter")]
    filters: Vec<String>,

    /// Override a default strength: NAME=STRENGTH (repeatable)
    #[arg(short, long = "default")]
    defaults: Vec<String>,
}

#[derive(Args)]
pub(crate) struct ExplicitArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Negative strength
    #[arg(long)]
    negative: Option<f64>,

    /// Freeze strength
    #[arg(long)]
    freeze: Option<f64>,

    /// Grayscale strength
    #[arg(long)]
    grayscale: Option<f64>,

    /// Sepia strength
    #[arg(long)]
    sepia: Option<f64>,

    /// Dim strength
    #[arg(long)]
    dim: Option<f64>,
}

#[derive(Args)]
pub(crate) struct PresetArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Preset file (YAML)
    #[arg(short, long)]
    preset: PathBuf,
}

#[derive(Args)]
pub(crate) struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Explicit(args) => commands::explicit::run(args, cli.verbose),
        Commands::Preset(args) => commands::preset::run(args, cli.verbose),
        Commands::List => commands::list::run(),
        Commands::Info(args) => commands::info::run(args),
    }
}
