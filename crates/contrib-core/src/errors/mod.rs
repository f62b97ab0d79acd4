//! Error handling for Contrib.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod contrib_error;
pub mod error_code;
pub mod render_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use contrib_error::ContribError;
pub use error_code::ContribErrorCode;
pub use render_error::RenderError;
