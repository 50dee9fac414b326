//! CLI command implementations

pub mod apply;
pub mod explicit;
pub mod info;
pub mod list;
pub mod preset;

use anyhow::{Context, Result, bail};
use std::path::Path;
use tint_core::PixelBuffer;
use tint_ops::{FilterKind, FilterPipeline, Step};

/// Load image from path.
///
/// A missing or undecodable file is logged and yields `None`; the pipeline
/// propagates the absence.
pub fn load_source(path: &Path) -> Option<PixelBuffer> {
    tint_io::load(path)
}

/// Save a pipeline result, failing if the pipeline produced nothing.
pub fn save_output(path: &Path, output: Option<PixelBuffer>, input: &Path) -> Result<()> {
    let Some(buf) = output else {
        bail!("no image produced: could not decode {}", input.display());
    };
    tint_io::write(path, &buf).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Builds a pipeline from `NAME=STRENGTH` default overrides.
pub fn pipeline_with_defaults(defaults: &[String]) -> Result<FilterPipeline> {
    let mut pipeline = FilterPipeline::new();
    for entry in defaults {
        let step = Step::parse(entry)?;
        let kind: FilterKind = step.filter.parse()?;
        let Some(strength) = step.strength else {
            bail!("default override {:?} needs a strength (NAME=STRENGTH)", entry);
        };
        pipeline = pipeline.with_default(kind, strength);
    }
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_with_defaults() {
        let p = pipeline_with_defaults(&["Dim Filter=0.4".to_string()]).unwrap();
        assert_eq!(p.default_strength(FilterKind::Dim), 0.4);
        assert_eq!(p.default_strength(FilterKind::Sepia), 1.0);
    }

    #[test]
    fn test_pipeline_with_defaults_rejects_bad_input() {
        assert!(pipeline_with_defaults(&["Dim Filter".to_string()]).is_err());
        assert!(pipeline_with_defaults(&["Glow Filter=0.5".to_string()]).is_err());
    }

    #[test]
    fn test_save_output_absent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        assert!(save_output(&out, None, Path::new("in.png")).is_err());
        assert!(!out.exists());
    }
}
