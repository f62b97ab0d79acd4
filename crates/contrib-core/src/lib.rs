//! Core types, errors, config, tracing, and constants for Contrib.
//!
//! Everything the decomposition engine, the stack geometry builder, and the
//! chart renderer share lives here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use errors::{AnalysisError, ConfigError, ContribError, RenderError};
pub use types::{PeriodSeries, PeriodTable};
