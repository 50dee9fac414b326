//! The five color filters.
//!
//! Each filter is a pure, pointwise transform `(&PixelBuffer, strength) ->
//! PixelBuffer`. The source buffer is borrowed and never modified; the
//! result has identical dimensions and bit-identical alpha.
//!
//! | Kind | Canonical name | Target color |
//! |------|----------------|--------------|
//! | [`FilterKind::Negative`] | `Negative Filter` | `(255-r, 255-g, 255-b)` |
//! | [`FilterKind::Freeze`] | `Freeze Filter` | `i=(r+g+b)/3`, `(0.25i, 1.05i, 1.40i)` |
//! | [`FilterKind::Grayscale`] | `Grayscale Filter` | Rec.601 luma on all channels |
//! | [`FilterKind::Sepia`] | `Sepia Filter` | 3x3 warm-tone matrix |
//! | [`FilterKind::Dim`] | `Dim Filter` | scale by `1 - 0.65*strength` |
//!
//! The dim filter has no independent target: strength is folded into its
//! scale factor. It is the blend toward black with weight `0.65*strength`.
//!
//! # Example
//!
//! ```rust
//! use tint_core::{Pixel, PixelBuffer};
//! use tint_ops::filter::{grayscale, FilterKind};
//!
//! let src = PixelBuffer::filled(1, 1, Pixel::new(200, 100, 50, 255));
//! let gray = grayscale(&src, 1.0);
//! assert_eq!(gray.get(0, 0).unwrap().rgba(), [124, 124, 124, 255]);
//!
//! let kind: FilterKind = "Sepia Filter".parse().unwrap();
//! assert_eq!(kind, FilterKind::Sepia);
//! ```

use std::fmt;
use std::str::FromStr;

use tint_core::{luminance_rec601, PixelBuffer};
use tracing::{debug, trace};

use crate::blend::{blend_toward, clamp_strength, narrow, rgb_f64};
use crate::{OpsError, OpsResult};

/// Strength used when a named step carries none.
pub const DEFAULT_STRENGTH: f64 = 1.0;

/// Freeze target multipliers applied to the mean intensity.
pub const FREEZE_GAIN: [f64; 3] = [0.25, 1.05, 1.40];

/// Sepia target matrix, rows are output R, G, B.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.65, 0.70, 0.19],
    [0.40, 0.45, 0.09],
    [0.18, 0.34, 0.04],
];

/// Fraction of brightness removed by the dim filter at full strength.
pub const DIM_AMOUNT: f64 = 0.65;

// ============================================================================
// Target colors
// ============================================================================

#[inline]
fn negative_target(rgb: [f64; 3]) -> [f64; 3] {
    [255.0 - rgb[0], 255.0 - rgb[1], 255.0 - rgb[2]]
}

#[inline]
fn freeze_target(rgb: [f64; 3]) -> [f64; 3] {
    let intensity = (rgb[0] + rgb[1] + rgb[2]) / 3.0;
    FREEZE_GAIN.map(|gain| (intensity * gain).clamp(0.0, 255.0))
}

#[inline]
fn grayscale_target(rgb: [f64; 3]) -> [f64; 3] {
    let y = luminance_rec601(rgb);
    [y, y, y]
}

#[inline]
fn sepia_target(rgb: [f64; 3]) -> [f64; 3] {
    SEPIA_MATRIX.map(|row| (row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]).clamp(0.0, 255.0))
}

#[inline]
fn dim_target(_rgb: [f64; 3]) -> [f64; 3] {
    [0.0, 0.0, 0.0]
}

// ============================================================================
// Filters
// ============================================================================

/// Inverts RGB, blended by `strength`.
pub fn negative(src: &PixelBuffer, strength: f64) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), strength, "negative");
    blend_toward(src, strength, negative_target)
}

/// Cool blue/cyan tone from mean intensity, blended by `strength`.
pub fn freeze(src: &PixelBuffer, strength: f64) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), strength, "freeze");
    blend_toward(src, strength, freeze_target)
}

/// Rec.601 luma grayscale, blended by `strength`.
pub fn grayscale(src: &PixelBuffer, strength: f64) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), strength, "grayscale");
    blend_toward(src, strength, grayscale_target)
}

/// Warm sepia tone, blended by `strength`.
pub fn sepia(src: &PixelBuffer, strength: f64) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), strength, "sepia");
    blend_toward(src, strength, sepia_target)
}

/// Scales RGB by `1 - 0.65 * strength`.
///
/// ```rust
/// use tint_core::{Pixel, PixelBuffer};
/// use tint_ops::filter::dim;
///
/// let src = PixelBuffer::filled(1, 1, Pixel::new(200, 100, 50, 9));
/// // factor 0.35
/// assert_eq!(dim(&src, 1.0).get(0, 0).unwrap().rgba(), [70, 35, 17, 9]);
/// ```
pub fn dim(src: &PixelBuffer, strength: f64) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), strength, "dim");
    let s = clamp_strength(strength);
    if s == 0.0 {
        return src.clone();
    }
    let factor = 1.0 - DIM_AMOUNT * s;
    src.map_pixels(|px| {
        let [r, g, b] = rgb_f64(px);
        px.with_rgb(narrow(r * factor), narrow(g * factor), narrow(b * factor))
    })
}

// ============================================================================
// FilterKind
// ============================================================================

/// The closed set of filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Color inversion.
    Negative,
    /// Cool blue/cyan tone.
    Freeze,
    /// Luma grayscale.
    Grayscale,
    /// Warm sepia tone.
    Sepia,
    /// Brightness reduction.
    Dim,
}

impl FilterKind {
    /// All kinds in canonical order: negative, freeze, grayscale, sepia, dim.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Negative,
        FilterKind::Freeze,
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Dim,
    ];

    /// Canonical, case-sensitive name.
    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::Negative => "Negative Filter",
            FilterKind::Freeze => "Freeze Filter",
            FilterKind::Grayscale => "Grayscale Filter",
            FilterKind::Sepia => "Sepia Filter",
            FilterKind::Dim => "Dim Filter",
        }
    }

    /// Looks up a kind by exact canonical name.
    pub fn from_name(name: &str) -> Option<FilterKind> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Strength used when none is supplied.
    pub const fn default_strength(self) -> f64 {
        DEFAULT_STRENGTH
    }

    /// Position in the canonical order.
    pub const fn slot(self) -> usize {
        match self {
            FilterKind::Negative => 0,
            FilterKind::Freeze => 1,
            FilterKind::Grayscale => 2,
            FilterKind::Sepia => 3,
            FilterKind::Dim => 4,
        }
    }

    /// Full-strength target color for the given source RGB.
    ///
    /// For [`FilterKind::Dim`] this is black; its effective blend weight is
    /// `0.65 * strength` rather than `strength`.
    pub fn target(self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            FilterKind::Negative => negative_target(rgb),
            FilterKind::Freeze => freeze_target(rgb),
            FilterKind::Grayscale => grayscale_target(rgb),
            FilterKind::Sepia => sepia_target(rgb),
            FilterKind::Dim => dim_target(rgb),
        }
    }

    /// Applies this filter to `src`.
    pub fn apply(self, src: &PixelBuffer, strength: f64) -> PixelBuffer {
        (self.filter_fn())(src, strength)
    }

    /// Implementation function of this kind.
    pub const fn filter_fn(self) -> FilterFn {
        match self {
            FilterKind::Negative => negative,
            FilterKind::Freeze => freeze,
            FilterKind::Grayscale => grayscale,
            FilterKind::Sepia => sepia,
            FilterKind::Dim => dim,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        Self::from_name(s).ok_or_else(|| OpsError::UnknownFilter(s.to_string()))
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Signature shared by all filters.
pub type FilterFn = fn(&PixelBuffer, f64) -> PixelBuffer;

/// A named filter: canonical name plus implementation.
#[derive(Clone, Copy)]
pub struct Filter {
    /// Canonical name.
    pub name: &'static str,
    /// Implementation.
    pub apply: FilterFn,
}

impl Filter {
    /// The filter for `kind`.
    pub const fn of(kind: FilterKind) -> Self {
        Self {
            name: kind.name(),
            apply: kind.filter_fn(),
        }
    }

    /// Applies the filter.
    pub fn apply(&self, src: &PixelBuffer, strength: f64) -> PixelBuffer {
        (self.apply)(src, strength)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("name", &self.name).finish()
    }
}

impl From<FilterKind> for Filter {
    fn from(kind: FilterKind) -> Self {
        Self::of(kind)
    }
}

/// Applies `kind` to an optional buffer.
///
/// An absent source short-circuits to `None` without running the filter.
pub fn apply_filter(src: Option<PixelBuffer>, kind: FilterKind, strength: f64) -> Option<PixelBuffer> {
    match src {
        Some(buf) => Some(kind.apply(&buf, strength)),
        None => {
            debug!(filter = kind.name(), "no source buffer");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::Pixel;

    fn sample() -> PixelBuffer {
        let mut buf = PixelBuffer::new(4, 3);
        let colors = [
            [200, 100, 50, 255],
            [0, 0, 0, 0],
            [255, 255, 255, 128],
            [12, 240, 99, 7],
        ];
        for y in 0..3 {
            for x in 0..4 {
                let c = colors[((x + y) % 4) as usize];
                buf.set(x, y, Pixel::from_rgba(c)).unwrap();
            }
        }
        buf
    }

    fn one(px: [u8; 4]) -> PixelBuffer {
        PixelBuffer::filled(1, 1, Pixel::from_rgba(px))
    }

    fn first(buf: &PixelBuffer) -> [u8; 4] {
        buf.get(0, 0).unwrap().rgba()
    }

    #[test]
    fn test_zero_strength_identity() {
        let src = sample();
        for kind in FilterKind::ALL {
            assert_eq!(kind.apply(&src, 0.0), src, "{kind}");
        }
    }

    #[test]
    fn test_out_of_range_strength_clamps() {
        let src = sample();
        for kind in FilterKind::ALL {
            assert_eq!(kind.apply(&src, -0.5), kind.apply(&src, 0.0), "{kind}");
            assert_eq!(kind.apply(&src, 1.7), kind.apply(&src, 1.0), "{kind}");
        }
    }

    #[test]
    fn test_alpha_untouched() {
        let src = sample();
        for kind in FilterKind::ALL {
            for s in [0.3, 0.5, 1.0] {
                let out = kind.apply(&src, s);
                for (a, b) in src.pixels().iter().zip(out.pixels()) {
                    assert_eq!(a.alpha(), b.alpha(), "{kind} at {s}");
                }
            }
        }
    }

    #[test]
    fn test_source_not_modified() {
        let src = sample();
        let copy = src.clone();
        for kind in FilterKind::ALL {
            let _ = kind.apply(&src, 1.0);
        }
        assert_eq!(src, copy);
    }

    #[test]
    fn test_negative() {
        assert_eq!(first(&negative(&one([200, 100, 50, 255]), 1.0)), [55, 155, 205, 255]);
        // 200*0.5 + 55*0.5 = 127.5
        assert_eq!(first(&negative(&one([200, 100, 50, 255]), 0.5)), [127, 127, 127, 255]);
    }

    #[test]
    fn test_freeze() {
        // intensity 120 -> (30, 126, 168)
        assert_eq!(first(&freeze(&one([120, 120, 120, 1]), 1.0)), [30, 126, 168, 1]);
        // intensity 255 -> blue target capped at 255
        assert_eq!(first(&freeze(&one([255, 255, 255, 1]), 1.0)), [63, 255, 255, 1]);
    }

    #[test]
    fn test_grayscale() {
        // 200*0.299 + 100*0.587 + 50*0.114 = 124.2
        assert_eq!(first(&grayscale(&one([200, 100, 50, 255]), 1.0)), [124, 124, 124, 255]);
        let white = one([255, 255, 255, 3]);
        assert_eq!(first(&grayscale(&white, 1.0))[3], 3);
    }

    #[test]
    fn test_sepia() {
        // r: 130 + 70 + 9.5 = 209.5, g: 80 + 45 + 4.5 = 129.5, b: 36 + 34 + 2 = 72
        assert_eq!(first(&sepia(&one([200, 100, 50, 255]), 1.0)), [209, 129, 72, 255]);
        // saturated red row is clamped before blending
        assert_eq!(first(&sepia(&one([255, 255, 255, 255]), 1.0))[0], 255);
    }

    #[test]
    fn test_dim() {
        assert_eq!(first(&dim(&one([200, 100, 50, 255]), 1.0)), [70, 35, 17, 255]);
        // factor 0.675
        assert_eq!(first(&dim(&one([200, 100, 40, 255]), 0.5)), [135, 67, 27, 255]);
    }

    #[test]
    fn test_dim_matches_blend_toward_black() {
        let src = sample();
        for s in [0.1, 0.4, 0.8, 1.0] {
            let expected = blend_toward(&src, DIM_AMOUNT * s, dim_target);
            assert_eq!(dim(&src, s), expected);
        }
    }

    #[test]
    fn test_monotonic_toward_target() {
        let src = sample();
        for kind in [FilterKind::Negative, FilterKind::Freeze, FilterKind::Grayscale, FilterKind::Sepia] {
            let steps = [0.0, 0.25, 0.5, 0.75, 1.0];
            let outs: Vec<_> = steps.iter().map(|&s| kind.apply(&src, s)).collect();
            for (i, px) in src.pixels().iter().enumerate() {
                let target = kind.target(rgb_f64(*px));
                let mut prev = f64::INFINITY;
                for out in &outs {
                    let got = rgb_f64(out.pixels()[i]);
                    let dist = (0..3)
                        .map(|c| (got[c] - target[c]).abs())
                        .fold(0.0, f64::max);
                    // truncation may leave at most one step of slack
                    assert!(dist <= prev + 1.0, "{kind} pixel {i}");
                    prev = dist;
                }
            }
        }
    }

    #[test]
    fn test_dim_monotonic_decrease() {
        let src = sample();
        let mut prev = src.clone();
        for s in [0.2, 0.4, 0.6, 0.8, 1.0] {
            let out = dim(&src, s);
            for (a, b) in prev.pixels().iter().zip(out.pixels()) {
                assert!(b.red() <= a.red());
                assert!(b.green() <= a.green());
                assert!(b.blue() <= a.blue());
            }
            prev = out;
        }
    }

    #[test]
    fn test_kind_names() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.name().parse::<FilterKind>().unwrap(), kind);
            assert_eq!(FilterKind::ALL[kind.slot()], kind);
        }
        assert_eq!(FilterKind::from_name("sepia filter"), None);
        assert!(matches!(
            "NotARealFilter".parse::<FilterKind>(),
            Err(OpsError::UnknownFilter(_))
        ));
    }

    #[test]
    fn test_filter_struct() {
        let f = Filter::of(FilterKind::Negative);
        assert_eq!(f.name, "Negative Filter");
        let src = one([0, 0, 0, 0]);
        assert_eq!(first(&f.apply(&src, 1.0)), [255, 255, 255, 0]);
    }

    #[test]
    fn test_apply_filter_absent() {
        assert!(apply_filter(None, FilterKind::Sepia, 1.0).is_none());
        let out = apply_filter(Some(one([0, 0, 0, 0])), FilterKind::Negative, 1.0).unwrap();
        assert_eq!(first(&out), [255, 255, 255, 0]);
    }
}
