//! Strength clamping, linear blend and channel narrowing.
//!
//! Every filter follows the same per-pixel shape:
//!
//! ```text
//! s      = clamp(strength, 0, 1)
//! target = T(r, g, b)
//! out_c  = narrow(src_c * (1 - s) + target_c * s)    for c in r, g, b
//! out_a  = src_a
//! ```
//!
//! `narrow` clamps to [0, 255] and truncates toward zero. Truncation matches
//! a plain float-to-byte conversion, so `124.9` becomes `124`.

use tint_core::{Pixel, PixelBuffer};
use tracing::trace;

/// Clamps a strength into [0, 1]. NaN maps to 0.
///
/// ```
/// use tint_ops::blend::clamp_strength;
/// assert_eq!(clamp_strength(-0.5), 0.0);
/// assert_eq!(clamp_strength(1.7), 1.0);
/// assert_eq!(clamp_strength(f64::NAN), 0.0);
/// ```
#[inline]
pub fn clamp_strength(strength: f64) -> f64 {
    if strength.is_nan() {
        0.0
    } else {
        strength.clamp(0.0, 1.0)
    }
}

/// Clamps a channel value to [0, 255] and truncates it to a byte.
#[inline]
pub fn narrow(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Linear blend of a source and target channel by `weight`.
#[inline]
pub fn lerp(src: f64, target: f64, weight: f64) -> f64 {
    src * (1.0 - weight) + target * weight
}

/// Source RGB channels of a pixel as reals.
#[inline]
pub fn rgb_f64(px: Pixel) -> [f64; 3] {
    [px.red() as f64, px.green() as f64, px.blue() as f64]
}

/// Blends one pixel toward `target` by `weight`, keeping alpha.
#[inline]
pub fn blend_pixel(px: Pixel, target: [f64; 3], weight: f64) -> Pixel {
    let [r, g, b] = rgb_f64(px);
    px.with_rgb(
        narrow(lerp(r, target[0], weight)),
        narrow(lerp(g, target[1], weight)),
        narrow(lerp(b, target[2], weight)),
    )
}

/// Target-color function of a blend filter.
pub type TargetFn = fn([f64; 3]) -> [f64; 3];

/// Applies a pointwise blend toward `target` over the whole buffer.
///
/// Returns a clone of `src` when the clamped strength is zero.
pub fn blend_toward(src: &PixelBuffer, strength: f64, target: TargetFn) -> PixelBuffer {
    let s = clamp_strength(strength);
    if s == 0.0 {
        trace!("zero strength, identity");
        return src.clone();
    }
    src.map_pixels(|px| blend_pixel(px, target(rgb_f64(px)), s))
}
