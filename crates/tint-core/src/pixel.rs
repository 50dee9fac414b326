//! Packed RGBA pixel type.
//!
//! A [`Pixel`] is a single `u32` holding four 8-bit channels at fixed bit
//! offsets:
//!
//! ```text
//! bits 31..24  23..16  15..8   7..0
//!      alpha   blue    green   red
//! ```
//!
//! Red lives in the least-significant byte, so on little-endian targets the
//! in-memory byte order of a pixel is `R G B A`.
//!
//! Channel access is a shift-and-mask; channel replacement rewrites a single
//! byte and leaves the other three untouched. Both are exposed as methods and
//! as free functions ([`channel_red`], [`with_red`], ...) for use in
//! function-pointer tables.
//!
//! ```
//! use tint_core::Pixel;
//!
//! let px = Pixel::new(200, 100, 50, 255);
//! assert_eq!(px.raw(), 0xFF32_64C8);
//! assert_eq!(px.with_green(7).rgba(), [200, 7, 50, 255]);
//! ```

use std::fmt;

const RED_SHIFT: u32 = 0;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 16;
const ALPHA_SHIFT: u32 = 24;

// ============================================================================
// Rec.601 Luma Constants
// ============================================================================

/// Rec.601 luma coefficient for the red channel.
pub const REC601_LUMA_R: f64 = 0.299;

/// Rec.601 luma coefficient for the green channel.
pub const REC601_LUMA_G: f64 = 0.587;

/// Rec.601 luma coefficient for the blue channel.
pub const REC601_LUMA_B: f64 = 0.114;

/// Rec.601 luma coefficients as an array [R, G, B].
pub const REC601_LUMA: [f64; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Rec.601 luma of an RGB triple, in the same scale as the input.
///
/// # Example
/// ```
/// use tint_core::pixel::luminance_rec601;
/// let y = luminance_rec601([200.0, 100.0, 50.0]);
/// assert!((y - 124.2).abs() < 1e-9);
/// ```
#[inline]
pub fn luminance_rec601(rgb: [f64; 3]) -> f64 {
    rgb[0] * REC601_LUMA_R + rgb[1] * REC601_LUMA_G + rgb[2] * REC601_LUMA_B
}

/// A packed 32-bit RGBA color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Pixel(u32);

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Pixel = Pixel(0);

    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            (r as u32) << RED_SHIFT
                | (g as u32) << GREEN_SHIFT
                | (b as u32) << BLUE_SHIFT
                | (a as u32) << ALPHA_SHIFT,
        )
    }

    /// Wraps an already-packed value.
    #[inline]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Returns the packed value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Creates a pixel from `[r, g, b, a]` bytes.
    #[inline]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    #[inline]
    const fn channel(self, shift: u32) -> u8 {
        ((self.0 >> shift) & 0xFF) as u8
    }

    #[inline]
    const fn with_channel(self, shift: u32, value: u8) -> Self {
        Self((self.0 & !(0xFF << shift)) | ((value as u32) << shift))
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        self.channel(RED_SHIFT)
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        self.channel(GREEN_SHIFT)
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.channel(BLUE_SHIFT)
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        self.channel(ALPHA_SHIFT)
    }

    /// Returns a copy with the red channel replaced.
    #[inline]
    pub const fn with_red(self, value: u8) -> Self {
        self.with_channel(RED_SHIFT, value)
    }

    /// Returns a copy with the green channel replaced.
    #[inline]
    pub const fn with_green(self, value: u8) -> Self {
        self.with_channel(GREEN_SHIFT, value)
    }

    /// Returns a copy with the blue channel replaced.
    #[inline]
    pub const fn with_blue(self, value: u8) -> Self {
        self.with_channel(BLUE_SHIFT, value)
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, value: u8) -> Self {
        self.with_channel(ALPHA_SHIFT, value)
    }

    /// Returns a copy with red, green and blue replaced, alpha kept.
    #[inline]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, self.alpha())
    }
}

impl From<u32> for Pixel {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Pixel> for u32 {
    #[inline]
    fn from(px: Pixel) -> Self {
        px.0
    }
}

impl From<[u8; 4]> for Pixel {
    #[inline]
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_rgba(rgba)
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rgba();
        write!(f, "Pixel(r={r}, g={g}, b={b}, a={a})")
    }
}

/// Red channel of a packed pixel.
#[inline]
pub fn channel_red(px: Pixel) -> u8 {
    px.red()
}

/// Green channel of a packed pixel.
#[inline]
pub fn channel_green(px: Pixel) -> u8 {
    px.green()
}

/// Blue channel of a packed pixel.
#[inline]
pub fn channel_blue(px: Pixel) -> u8 {
    px.blue()
}

/// Alpha channel of a packed pixel.
#[inline]
pub fn channel_alpha(px: Pixel) -> u8 {
    px.alpha()
}

/// Replaces the red channel of a packed pixel.
#[inline]
pub fn with_red(px: Pixel, value: u8) -> Pixel {
    px.with_red(value)
}

/// Replaces the green channel of a packed pixel.
#[inline]
pub fn with_green(px: Pixel, value: u8) -> Pixel {
    px.with_green(value)
}

/// Replaces the blue channel of a packed pixel.
#[inline]
pub fn with_blue(px: Pixel, value: u8) -> Pixel {
    px.with_blue(value)
}

/// Replaces the alpha channel of a packed pixel.
#[inline]
pub fn with_alpha(px: Pixel, value: u8) -> Pixel {
    px.with_alpha(value)
}
