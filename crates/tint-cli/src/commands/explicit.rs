//! Explicit command
//!
//! One flag per filter; selected filters run in canonical order.

use crate::ExplicitArgs;
use anyhow::Result;
use tint_ops::{FilterKind, Selections, apply_explicit};
use tracing::{info, trace};

fn selections(args: &ExplicitArgs) -> Selections {
    let slots = [
        (FilterKind::Negative, args.negative),
        (FilterKind::Freeze, args.freeze),
        (FilterKind::Grayscale, args.grayscale),
        (FilterKind::Sepia, args.sepia),
        (FilterKind::Dim, args.dim),
    ];
    slots
        .into_iter()
        .fold(Selections::none(), |sel, (kind, strength)| match strength {
            Some(s) => sel.select(kind, s),
            None => sel,
        })
}

pub fn run(args: ExplicitArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "explicit::run");

    let sel = selections(&args);
    let active: Vec<&str> = FilterKind::ALL
        .into_iter()
        .filter(|k| sel.is_selected(*k) && sel.get(*k).strength > 0.0)
        .map(FilterKind::name)
        .collect();
    info!(filters = ?active, "Applying explicit selection");
    if verbose > 0 {
        println!("Applying [{}] to {}", active.join(", "), args.input.display());
    }

    let output = apply_explicit(super::load_source(&args.input), &sel);
    super::save_output(&args.output, output, &args.input)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
