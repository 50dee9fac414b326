//! Error types for filter operations.

use thiserror::Error;

/// Error type for filter operations.
///
/// Filters themselves are total; these errors only come from parsing
/// caller-supplied names, steps and presets.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Name matches none of the canonical filter names.
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Preset document could not be parsed.
    #[error("invalid preset: {0}")]
    Preset(#[from] serde_yaml::Error),
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;
