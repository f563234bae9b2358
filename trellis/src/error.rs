//! Configuration error types.

use thiserror::Error;

use crate::layout::Axis;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {value} (must be finite and non-negative)")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("auto-size on a {axis:?} grid needs {needs}")]
    AutoSizeWithoutCount { axis: Axis, needs: &'static str },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
