//! Error types for tint-core operations.
//!
//! Buffer construction and coordinate access are the only fallible
//! operations in the core. Everything else (strength clamping, channel
//! narrowing) is total and handled where it happens.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! assert!(check(3, 0, 2, 2).is_err());
//! ```
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - construction and bounds checking
//! - `tint-io` - wraps core errors while decoding

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by pixel buffer construction and access.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates are outside buffer bounds.
    ///
    /// Returned when accessing (x, y) where `x >= width` or `y >= height`.
    /// Reaching this from filter code indicates a defect; filters iterate
    /// within the buffer extent.
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Data length does not match the declared dimensions, or the
    /// dimensions overflow the addressable size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(4, 4, "expected 64 bytes, got 10");
        assert!(err.to_string().contains("4x4"));
        assert!(err.to_string().contains("64 bytes"));
        assert!(!err.is_bounds_error());
    }
}
