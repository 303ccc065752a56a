//! Error types for the motion core.

use thiserror::Error;

use crate::form::Field;

/// Convenience alias used across the crate.
pub type Result<T, E = MotionError> = std::result::Result<T, E>;

/// Failures raised while laying out or configuring animations.
#[derive(Debug, Error)]
pub enum MotionError {
    /// The host reported a viewport that cannot be laid out (zero, negative or NaN).
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    /// A configuration value is outside its accepted range.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// Inline JSON config could not be parsed.
    #[error("failed to parse motion config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl MotionError {
    /// Whether the same operation may succeed on the next resize/frame.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidViewport { .. })
    }
}

/// Contact form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("email address looks invalid")]
    InvalidEmail,
}
