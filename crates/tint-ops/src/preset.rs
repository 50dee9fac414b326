//! YAML filter presets.
//!
//! A preset stores a named sequence with optional per-step strengths:
//!
//! ```yaml
//! steps:
//!   - filter: Freeze Filter
//!     strength: 0.6
//!   - filter: Dim Filter
//! ```
//!
//! Steps without a strength use the pipeline's default table. Names are kept
//! verbatim; unrecognized ones are skipped when the preset runs, the same as
//! any other named sequence.

use serde::{Deserialize, Serialize};
use tint_core::PixelBuffer;

use crate::pipeline::{FilterPipeline, Step};
use crate::OpsResult;

/// A stored named-sequence invocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preset {
    /// Steps in application order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Preset {
    /// Parses a preset from YAML text.
    pub fn from_yaml(text: &str) -> OpsResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serializes the preset to YAML.
    pub fn to_yaml(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Names of steps that match no canonical filter.
    pub fn unknown_filters(&self) -> Vec<&str> {
        self.steps
            .iter()
            .map(|s| s.filter.as_str())
            .filter(|name| crate::FilterKind::from_name(name).is_none())
            .collect()
    }

    /// Runs the preset through `pipeline`.
    pub fn apply(&self, pipeline: &FilterPipeline, source: Option<PixelBuffer>) -> Option<PixelBuffer> {
        pipeline.apply_steps(source, &self.steps)
    }
}
