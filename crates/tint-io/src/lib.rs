//! # tint-io
//!
//! Converters between encoded images and [`PixelBuffer`].
//!
//! The filter pipeline never touches files. This crate is the boundary on
//! both sides of it:
//!
//! - decode: PNG bytes or file → [`PixelBuffer`] (RGBA, 8 bits per channel)
//! - encode: [`PixelBuffer`] → PNG bytes or file
//!
//! A failed decode means the pipeline has no source. [`load`] expresses that
//! directly by returning `None`, which the pipeline propagates untouched.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tint_ops::pipeline::apply_named;
//!
//! let out = apply_named(tint_io::load("in.png"), &["Sepia Filter"]);
//! if let Some(buf) = out {
//!     tint_io::write("out.png", &buf)?;
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod png;

use std::path::Path;

use tint_core::PixelBuffer;
use tracing::warn;

pub use error::{IoError, IoResult};
pub use crate::png::{decode, encode, read, write};

/// Reads an image, mapping any failure to an absent buffer.
///
/// The failure is logged at warn level.
pub fn load<P: AsRef<Path>>(path: P) -> Option<PixelBuffer> {
    match read(path.as_ref()) {
        Ok(buf) => Some(buf),
        Err(e) => {
            warn!(path = %path.as_ref().display(), error = %e, "could not decode source image");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path().join("nope.png")).is_none());
    }

    #[test]
    fn test_load_corrupt_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nbroken").unwrap();
        assert!(load(&path).is_none());
    }
}
