//! Chart rendering errors.

use super::error_code::{self, ContribErrorCode};

/// Errors raised by the chart renderer. The analysis crates never produce
/// these; palette and legend names are only checked at the render boundary.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unknown palette: {name}")]
    UnknownPalette { name: String },

    #[error("Palette {name} cannot color {requested} categories (supports 1 to {max})")]
    PaletteSize {
        name: String,
        requested: usize,
        max: usize,
    },

    #[error("Unknown legend location: {value}")]
    UnknownLocation { value: String },

    #[error("Bar width must be in (0, 1], got {value}")]
    InvalidBarWidth { value: f64 },

    #[error("Non-finite value in {chart} chart at period {period}")]
    NonFiniteValue { chart: String, period: String },

    #[error("Segments are {segments} but contributions are {contributions}")]
    ShapeMismatch {
        contributions: String,
        segments: String,
    },

    #[error("Nothing to render: {0}")]
    EmptyChart(String),

    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },
}

impl ContribErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPalette { .. } => error_code::UNKNOWN_PALETTE,
            Self::PaletteSize { .. } => error_code::PALETTE_SIZE,
            Self::UnknownLocation { .. } => error_code::UNKNOWN_LOCATION,
            Self::NonFiniteValue { .. } => error_code::NON_FINITE_VALUE,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::ShapeMismatch { .. } => error_code::INVALID_SHAPE,
            Self::InvalidBarWidth { .. } | Self::EmptyChart(_) => error_code::RENDER_ERROR,
        }
    }
}
