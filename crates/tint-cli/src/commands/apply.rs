//! Apply command
//!
//! Named-sequence mode: filters run in the order given on the command line.

use crate::ApplyArgs;
use anyhow::Result;
use tint_ops::{FilterKind, Step};
use tracing::{info, trace, warn};

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), filters = ?args.filters, "apply::run");

    let steps = args
        .filters
        .iter()
        .map(|f| Step::parse(f))
        .collect::<Result<Vec<_>, _>>()?;
    for step in &steps {
        if FilterKind::from_name(&step.filter).is_none() {
            warn!(filter = %step.filter, "unknown filter will be skipped");
        }
    }
    let pipeline = super::pipeline_with_defaults(&args.defaults)?;

    let source = super::load_source(&args.input);
    info!(steps = steps.len(), "Applying filter sequence");
    if verbose > 0 {
        let names: Vec<String> = steps.iter().map(Step::to_string).collect();
        println!("Applying [{}] to {}", names.join(", "), args.input.display());
    }

    let output = pipeline.apply_steps(source, &steps);
    super::save_output(&args.output, output, &args.input)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
