//! # tint-ops
//!
//! Pointwise color filters and the pipeline that chains them.
//!
//! # Modules
//!
//! - [`blend`] - strength clamping, linear blend, channel narrowing
//! - [`filter`] - the five filters and the [`FilterKind`] name table
//! - [`pipeline`] - named-sequence and explicit invocation modes
//! - [`preset`] - YAML presets for named sequences
//!
//! # Example
//!
//! ```rust
//! use tint_core::{Pixel, PixelBuffer};
//! use tint_ops::pipeline::apply_named;
//!
//! let src = PixelBuffer::filled(8, 8, Pixel::new(120, 120, 120, 255));
//! let out = apply_named(Some(src), &["Freeze Filter"]).unwrap();
//! assert_eq!(out.get(0, 0).unwrap().rgba(), [30, 126, 168, 255]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - row-parallel filter loops via rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blend;
pub mod filter;
pub mod pipeline;
pub mod preset;

pub use error::{OpsError, OpsResult};
pub use filter::{apply_filter, Filter, FilterKind};
pub use pipeline::{apply_explicit, apply_named, FilterPipeline, Selections, Step};
pub use preset::Preset;
