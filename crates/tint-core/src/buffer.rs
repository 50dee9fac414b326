//! Row-major pixel buffer.
//!
//! [`PixelBuffer`] owns exactly `width * height` packed [`Pixel`] values laid
//! out top-to-bottom, left-to-right:
//!
//! ```text
//! index(x, y) = y * width + x
//!
//! [P P P P ...]  <- row 0
//! [P P P P ...]  <- row 1
//! ...
//! ```
//!
//! The external byte layout accepted by [`PixelBuffer::from_rgba_bytes`] and
//! produced by [`PixelBuffer::to_rgba_bytes`] is interleaved `R G B A`, four
//! bytes per pixel, with no row padding.
//!
//! # Value semantics
//!
//! Transformations go through [`PixelBuffer::map_pixels`], which borrows the
//! source and returns a new buffer. The source is never modified, so filter
//! stages can be chained and tested in isolation. With the `rayon` feature
//! the mapping runs row-parallel; every worker writes a disjoint output row.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Pixel, PixelBuffer};
//!
//! let mut buf = PixelBuffer::new(4, 2);
//! buf.set(3, 1, Pixel::new(255, 0, 0, 255)).unwrap();
//! assert_eq!(buf.get(3, 1).unwrap().red(), 255);
//! assert!(buf.get(4, 0).is_err());
//! ```

use crate::{Error, Pixel, Result};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Bytes per pixel in the external RGBA layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// Owned, fixed-size, row-major RGBA image.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

/// Pixel count for the given dimensions, failing on overflow.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows usize"))
}

impl PixelBuffer {
    /// Creates a buffer filled with transparent black.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    /// Creates a buffer where every pixel is `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let count = width as usize * height as usize;
        Self {
            pixels: vec![pixel; count],
            width,
            height,
        }
    }

    /// Creates a buffer from already-packed pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Creates a buffer from interleaved `R G B A` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * 4`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_rgba_bytes(1, 1, &[200, 100, 50, 255]).unwrap();
    /// assert_eq!(buf.get(0, 0).unwrap().rgba(), [200, 100, 50, 255]);
    /// assert!(PixelBuffer::from_rgba_bytes(2, 1, &[0; 4]).is_err());
    /// ```
    pub fn from_rgba_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = pixel_count(width, height)?
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "byte count overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        let pixels = data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Returns the pixels as interleaved `R G B A` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.rgba()).collect()
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Consumes the buffer and returns its pixels.
    #[inline]
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Returns the linear index of (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<Pixel> {
        let idx = self.index_of(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Writes the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the buffer.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        let idx = self.index_of(x, y)?;
        self.pixels[idx] = pixel;
        Ok(())
    }

    /// Returns row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `y >= height`.
    pub fn row(&self, y: u32) -> Result<&[Pixel]> {
        if y >= self.height {
            return Err(Error::out_of_bounds(0, y, self.width, self.height));
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Ok(&self.pixels[start..start + w])
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        // chunks(0) panics; an empty buffer has no rows to yield anyway
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Returns a new buffer with `f` applied to every pixel.
    ///
    /// The source is left untouched. With the `rayon` feature, rows are
    /// processed in parallel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::{Pixel, PixelBuffer};
    ///
    /// let src = PixelBuffer::filled(2, 2, Pixel::new(10, 20, 30, 255));
    /// let dst = src.map_pixels(|px| px.with_red(0));
    /// assert_eq!(src.get(0, 0).unwrap().red(), 10);
    /// assert_eq!(dst.get(0, 0).unwrap().red(), 0);
    /// ```
    pub fn map_pixels<F>(&self, f: F) -> PixelBuffer
    where
        F: Fn(Pixel) -> Pixel + Send + Sync,
    {
        if self.is_empty() {
            return self.clone();
        }

        let mut out = vec![Pixel::TRANSPARENT; self.pixels.len()];
        map_rows(&self.pixels, &mut out, self.width as usize, &f);

        PixelBuffer {
            pixels: out,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(feature = "rayon")]
fn map_rows<F>(src: &[Pixel], dst: &mut [Pixel], width: usize, f: &F)
where
    F: Fn(Pixel) -> Pixel + Send + Sync,
{
    dst.par_chunks_mut(width)
        .zip(src.par_chunks(width))
        .for_each(|(d_row, s_row)| {
            for (d, s) in d_row.iter_mut().zip(s_row) {
                *d = f(*s);
            }
        });
}

#[cfg(not(feature = "rayon"))]
fn map_rows<F>(src: &[Pixel], dst: &mut [Pixel], width: usize, f: &F)
where
    F: Fn(Pixel) -> Pixel + Send + Sync,
{
    for (d_row, s_row) in dst.chunks_mut(width).zip(src.chunks(width)) {
        for (d, s) in d_row.iter_mut().zip(s_row) {
            *d = f(*s);
        }
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
