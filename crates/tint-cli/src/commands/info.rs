//! Info command
//!
//! Prints dimensions and mean channel values of decoded images.

use crate::InfoArgs;
use anyhow::{Context, Result};

pub fn run(args: InfoArgs) -> Result<()> {
    for path in &args.input {
        let buf = tint_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))?;
        let mut sums = [0u64; 4];
        for px in buf.pixels() {
            for (sum, c) in sums.iter_mut().zip(px.rgba()) {
                *sum += c as u64;
            }
        }
        let n = buf.len().max(1) as f64;
        println!("{}", path.display());
        println!("  size:   {}x{} ({} pixels)", buf.width(), buf.height(), buf.len());
        println!(
            "  mean:   R {:.1}  G {:.1}  B {:.1}  A {:.1}",
            sums[0] as f64 / n,
            sums[1] as f64 / n,
            sums[2] as f64 / n,
            sums[3] as f64 / n
        );
    }
    Ok(())
}
