//! Filter pipeline.
//!
//! Threads one source buffer through a sequence of filters, each stage
//! consuming the previous stage's output. Two invocation modes:
//!
//! - **Named sequence** ([`FilterPipeline::apply_named`], [`FilterPipeline::apply_steps`]):
//!   filters run in the order given. Repeats are honored positionally.
//!   Unrecognized names are skipped. Missing strengths come from the
//!   pipeline's default table (1.0 for every filter unless overridden).
//! - **Explicit** ([`FilterPipeline::apply_explicit`]): one slot per filter,
//!   always run in canonical order negative, freeze, grayscale, sepia, dim.
//!   A slot runs only when its name string equals the canonical name and
//!   its strength is greater than zero.
//!
//! An absent source short-circuits both modes to `None` before any filter
//! runs. Stages are strictly sequential; parallelism lives inside a filter.
//!
//! # Example
//!
//! ```rust
//! use tint_core::{Pixel, PixelBuffer};
//! use tint_ops::pipeline::{FilterPipeline, Selections};
//! use tint_ops::FilterKind;
//!
//! let src = PixelBuffer::filled(2, 2, Pixel::new(200, 100, 50, 255));
//! let pipeline = FilterPipeline::new();
//!
//! let named = pipeline.apply_named(Some(src.clone()), &["Freeze Filter", "Dim Filter"]);
//! assert!(named.is_some());
//!
//! let sel = Selections::none().select(FilterKind::Grayscale, 1.0);
//! let explicit = pipeline.apply_explicit(Some(src), &sel).unwrap();
//! assert_eq!(explicit.get(0, 0).unwrap().rgba(), [124, 124, 124, 255]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tint_core::PixelBuffer;
use tracing::{debug, trace};

use crate::filter::FilterKind;
use crate::{OpsError, OpsResult};

// ============================================================================
// Step
// ============================================================================

/// One entry of a named sequence: a filter name and an optional strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Filter name, matched exactly against the canonical names.
    pub filter: String,
    /// Strength; the pipeline default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
}

impl Step {
    /// A step using the default strength.
    pub fn named(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            strength: None,
        }
    }

    /// A step with an explicit strength.
    pub fn with_strength(filter: impl Into<String>, strength: f64) -> Self {
        Self {
            filter: filter.into(),
            strength: Some(strength),
        }
    }

    /// Parses `name` or `name=strength`.
    ///
    /// ```
    /// use tint_ops::pipeline::Step;
    /// let step = Step::parse("Sepia Filter=0.5").unwrap();
    /// assert_eq!(step.filter, "Sepia Filter");
    /// assert_eq!(step.strength, Some(0.5));
    /// assert!(Step::parse("Dim Filter=lots").is_err());
    /// ```
    pub fn parse(text: &str) -> OpsResult<Self> {
        match text.rsplit_once('=') {
            Some((name, value)) => {
                let strength: f64 = value.trim().parse().map_err(|_| {
                    OpsError::InvalidParameter(format!("strength {:?} in step {:?}", value, text))
                })?;
                Ok(Self::with_strength(name.trim(), strength))
            }
            None => Ok(Self::named(text.trim())),
        }
    }
}

impl FromStr for Step {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strength {
            Some(s) => write!(f, "{}={}", self.filter, s),
            None => f.write_str(&self.filter),
        }
    }
}

// ============================================================================
// Selections
// ============================================================================

/// One explicit-mode slot: the selecting name string and a strength.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Selects the slot only when equal to the slot's canonical name.
    pub name: String,
    /// Strength; the slot runs only when greater than zero.
    pub strength: f64,
}

/// Explicit-mode input: one [`Selection`] per filter slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selections {
    slots: [Selection; 5],
}

impl Selections {
    /// Every slot unselected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Selects `kind` at `strength`.
    pub fn select(mut self, kind: FilterKind, strength: f64) -> Self {
        self.slots[kind.slot()] = Selection {
            name: kind.name().to_string(),
            strength,
        };
        self
    }

    /// Sets slot `kind` from a boolean selection flag and strength.
    pub fn set(mut self, kind: FilterKind, selected: bool, strength: f64) -> Self {
        let name = if selected { kind.name().to_string() } else { String::new() };
        self.slots[kind.slot()] = Selection { name, strength };
        self
    }

    /// Sets slot `kind` from a raw name string, as supplied by a caller.
    pub fn set_raw(mut self, kind: FilterKind, name: impl Into<String>, strength: f64) -> Self {
        self.slots[kind.slot()] = Selection {
            name: name.into(),
            strength,
        };
        self
    }

    /// The slot for `kind`.
    pub fn get(&self, kind: FilterKind) -> &Selection {
        &self.slots[kind.slot()]
    }

    /// Whether `kind` is selected (exact canonical-name match).
    pub fn is_selected(&self, kind: FilterKind) -> bool {
        self.get(kind).name == kind.name()
    }
}

// ============================================================================
// FilterPipeline
// ============================================================================

/// Filter pipeline with a default-strength table.
///
/// Holds no state between invocations; every call is independent.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPipeline {
    defaults: [f64; 5],
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self {
            defaults: FilterKind::ALL.map(FilterKind::default_strength),
        }
    }
}

impl FilterPipeline {
    /// Pipeline with every default strength at 1.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default strength of `kind`.
    pub fn with_default(mut self, kind: FilterKind, strength: f64) -> Self {
        self.defaults[kind.slot()] = strength;
        self
    }

    /// Default strength of `kind`.
    pub fn default_strength(&self, kind: FilterKind) -> f64 {
        self.defaults[kind.slot()]
    }

    /// Applies filters by name, in the given order, at default strengths.
    pub fn apply_named<S: AsRef<str>>(
        &self,
        source: Option<PixelBuffer>,
        names: &[S],
    ) -> Option<PixelBuffer> {
        self.run_sequence(source, names.iter().map(|n| (n.as_ref(), None)))
    }

    /// Applies steps in the given order, each with its own or the default strength.
    pub fn apply_steps(&self, source: Option<PixelBuffer>, steps: &[Step]) -> Option<PixelBuffer> {
        self.run_sequence(source, steps.iter().map(|s| (s.filter.as_str(), s.strength)))
    }

    fn run_sequence<'a>(
        &self,
        source: Option<PixelBuffer>,
        steps: impl Iterator<Item = (&'a str, Option<f64>)>,
    ) -> Option<PixelBuffer> {
        let Some(mut buf) = source else {
            debug!("no source buffer, pipeline skipped");
            return None;
        };
        for (name, strength) in steps {
            let Some(kind) = FilterKind::from_name(name) else {
                debug!(name, "unrecognized filter, skipping");
                continue;
            };
            let strength = strength.unwrap_or_else(|| self.default_strength(kind));
            trace!(filter = kind.name(), strength, "pipeline step");
            buf = kind.apply(&buf, strength);
        }
        Some(buf)
    }

    /// Applies selected filters in canonical order.
    pub fn apply_explicit(
        &self,
        source: Option<PixelBuffer>,
        selections: &Selections,
    ) -> Option<PixelBuffer> {
        let Some(mut buf) = source else {
            debug!("no source buffer, pipeline skipped");
            return None;
        };
        for kind in FilterKind::ALL {
            let strength = selections.get(kind).strength;
            if !(selections.is_selected(kind) && strength > 0.0) {
                continue;
            }
            trace!(filter = kind.name(), strength, "explicit step");
            buf = kind.apply(&buf, strength);
        }
        Some(buf)
    }
}

/// [`FilterPipeline::apply_named`] with the default strength table.
pub fn apply_named<S: AsRef<str>>(source: Option<PixelBuffer>, names: &[S]) -> Option<PixelBuffer> {
    FilterPipeline::default().apply_named(source, names)
}

/// [`FilterPipeline::apply_explicit`] with the default strength table.
pub fn apply_explicit(source: Option<PixelBuffer>, selections: &Selections) -> Option<PixelBuffer> {
    FilterPipeline::default().apply_explicit(source, selections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{dim, freeze, grayscale, negative, sepia};
    use tint_core::Pixel;

    fn sample() -> PixelBuffer {
        let mut buf = PixelBuffer::new(3, 2);
        buf.set(0, 0, Pixel::new(200, 100, 50, 255)).unwrap();
        buf.set(1, 0, Pixel::new(10, 20, 30, 40)).unwrap();
        buf.set(2, 0, Pixel::new(255, 255, 255, 255)).unwrap();
        buf.set(0, 1, Pixel::new(90, 180, 45, 200)).unwrap();
        buf.set(1, 1, Pixel::new(1, 254, 128, 0)).unwrap();
        buf.set(2, 1, Pixel::new(77, 77, 77, 77)).unwrap();
        buf
    }

    #[test]
    fn test_named_duplicates_applied_twice() {
        let src = sample();
        let out = apply_named(Some(src.clone()), &["Dim Filter", "Dim Filter"]).unwrap();
        assert_eq!(out, dim(&dim(&src, 1.0), 1.0));
        assert_ne!(out, dim(&src, 1.0));
    }

    #[test]
    fn test_named_unknown_is_noop() {
        let src = sample();
        assert_eq!(apply_named(Some(src.clone()), &["NotARealFilter"]).unwrap(), src);
        assert_eq!(apply_named::<&str>(Some(src.clone()), &[]).unwrap(), src);
    }

    #[test]
    fn test_named_unknown_does_not_interrupt() {
        let src = sample();
        let out = apply_named(Some(src.clone()), &["Sepia Filter", "bogus", "negative filter", "Negative Filter"])
            .unwrap();
        assert_eq!(out, negative(&sepia(&src, 1.0), 1.0));
    }

    #[test]
    fn test_named_order_is_caller_order() {
        let src = sample();
        let a = apply_named(Some(src.clone()), &["Dim Filter", "Negative Filter"]).unwrap();
        let b = apply_named(Some(src.clone()), &["Negative Filter", "Dim Filter"]).unwrap();
        assert_eq!(a, negative(&dim(&src, 1.0), 1.0));
        assert_eq!(b, dim(&negative(&src, 1.0), 1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_named_absent_source() {
        assert!(apply_named(None, &["Negative Filter"]).is_none());
        assert!(apply_explicit(None, &Selections::none().select(FilterKind::Dim, 1.0)).is_none());
    }

    #[test]
    fn test_steps_with_strengths_and_defaults() {
        let src = sample();
        let pipeline = FilterPipeline::new().with_default(FilterKind::Dim, 0.5);
        let steps = [Step::with_strength("Freeze Filter", 0.3), Step::named("Dim Filter")];
        let out = pipeline.apply_steps(Some(src.clone()), &steps).unwrap();
        assert_eq!(out, dim(&freeze(&src, 0.3), 0.5));
    }

    #[test]
    fn test_explicit_none_selected_passes_through() {
        let src = sample();
        assert_eq!(apply_explicit(Some(src.clone()), &Selections::none()).unwrap(), src);
    }

    #[test]
    fn test_explicit_canonical_order() {
        let src = sample();
        let sel = Selections::none()
            .select(FilterKind::Dim, 0.4)
            .select(FilterKind::Negative, 1.0)
            .select(FilterKind::Grayscale, 0.7);
        let out = apply_explicit(Some(src.clone()), &sel).unwrap();
        let expected = dim(&grayscale(&negative(&src, 1.0), 0.7), 0.4);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_explicit_requires_exact_name_and_positive_strength() {
        let src = sample();
        let sel = Selections::none()
            .set_raw(FilterKind::Negative, "negative filter", 1.0)
            .set(FilterKind::Sepia, true, 0.0)
            .set(FilterKind::Freeze, false, 1.0)
            .set(FilterKind::Grayscale, true, -2.0);
        assert!(!sel.is_selected(FilterKind::Negative));
        assert!(sel.is_selected(FilterKind::Sepia));
        assert_eq!(apply_explicit(Some(src.clone()), &sel).unwrap(), src);
    }

    #[test]
    fn test_explicit_strength_above_one_clamps() {
        let src = sample();
        let sel = Selections::none().select(FilterKind::Sepia, 3.0);
        assert_eq!(apply_explicit(Some(src.clone()), &sel).unwrap(), sepia(&src, 1.0));
    }

    #[test]
    fn test_step_parse() {
        assert_eq!(Step::parse("Grayscale Filter").unwrap(), Step::named("Grayscale Filter"));
        assert_eq!(
            "Dim Filter = 0.25".parse::<Step>().unwrap(),
            Step::with_strength("Dim Filter", 0.25)
        );
        assert!(matches!(Step::parse("Dim Filter="), Err(OpsError::InvalidParameter(_))));
        assert_eq!(Step::with_strength("Dim Filter", 0.5).to_string(), "Dim Filter=0.5");
    }
}
