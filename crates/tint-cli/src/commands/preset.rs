//! Preset command
//!
//! Runs a YAML preset (see `tint_ops::preset`).

use crate::PresetArgs;
use anyhow::{Context, Result};
use std::fs;
use tint_ops::{FilterPipeline, Preset};
use tracing::{info, trace, warn};

pub fn run(args: PresetArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), preset = %args.preset.display(), "preset::run");

    let text = fs::read_to_string(&args.preset)
        .with_context(|| format!("Failed to read preset: {}", args.preset.display()))?;
    let preset = Preset::from_yaml(&text)
        .with_context(|| format!("Failed to parse preset: {}", args.preset.display()))?;
    for name in preset.unknown_filters() {
        warn!(filter = name, "unknown filter in preset will be skipped");
    }

    info!(steps = preset.steps.len(), "Applying preset");
    if verbose > 0 {
        println!("Applying preset {} ({} steps)", args.preset.display(), preset.steps.len());
    }

    let output = preset.apply(&FilterPipeline::new(), super::load_source(&args.input));
    super::save_output(&args.output, output, &args.input)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
