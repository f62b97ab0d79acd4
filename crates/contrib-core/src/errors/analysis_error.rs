//! Decomposition and stacking errors.

use super::error_code::{self, ContribErrorCode};

/// Errors raised by the decomposition engine and the stack geometry builder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Unknown growth denominator: {value}")]
    UnknownDenominator { value: String },

    #[error("Invalid table shape: {reason}")]
    InvalidShape { reason: String },

    /// A zero divisor produced a non-finite value. `category` is `None`
    /// when the growth of the total itself is undefined.
    #[error("Division undefined in period {period}{}", category_suffix(.category))]
    DivisionUndefined {
        period: String,
        category: Option<String>,
    },
}

impl AnalysisError {
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}

fn category_suffix(category: &Option<String>) -> String {
    match category {
        Some(c) => format!(" (category {c})"),
        None => " (total)".to_string(),
    }
}

impl ContribErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidShape { .. } => error_code::INVALID_SHAPE,
            Self::DivisionUndefined { .. } => error_code::DIVISION_UNDEFINED,
            Self::UnknownDenominator { .. } => error_code::CONFIG_ERROR,
        }
    }
}
