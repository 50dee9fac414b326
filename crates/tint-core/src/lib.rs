//! # tint-core
//!
//! Core types for the tint filter pipeline.
//!
//! - [`Pixel`] - one packed 32-bit RGBA color with per-channel accessors
//! - [`PixelBuffer`] - owned, row-major grid of pixels
//! - [`Error`] / [`Result`] - bounds and dimension failures
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The rest of the workspace
//! builds on it:
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-ops (filters and pipeline)
//!    +-- tint-io (PNG decode/encode)
//!    +-- tint-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - row-parallel [`PixelBuffer::map_pixels`] (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use error::{Error, Result};
pub use pixel::{
    channel_alpha, channel_blue, channel_green, channel_red, luminance_rec601, with_alpha,
    with_blue, with_green, with_red, Pixel, REC601_LUMA,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tint_core::prelude::*;
/// let buf = PixelBuffer::filled(1, 1, Pixel::new(1, 2, 3, 4));
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::Pixel;
}
