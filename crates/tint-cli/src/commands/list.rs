//! List command

use anyhow::Result;
use tint_ops::FilterKind;

pub fn run() -> Result<()> {
    for kind in FilterKind::ALL {
        println!("{:<18} default strength {:.2}", kind.name(), kind.default_strength());
    }
    Ok(())
}
