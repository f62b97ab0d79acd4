//! Top-level error aggregating every subsystem.

use super::error_code::ContribErrorCode;
use super::{AnalysisError, ConfigError, RenderError};

/// Errors surfaced by end-to-end operations such as `plot_contributions`.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ContribError {
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ContribErrorCode for ContribError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Analysis(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
