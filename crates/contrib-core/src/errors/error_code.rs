//! ContribErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its display message.
pub trait ContribErrorCode {
    /// Returns the error code string (e.g., "INVALID_SHAPE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_SHAPE: &str = "INVALID_SHAPE";
pub const DIVISION_UNDEFINED: &str = "DIVISION_UNDEFINED";
pub const UNKNOWN_PALETTE: &str = "UNKNOWN_PALETTE";
pub const PALETTE_SIZE: &str = "PALETTE_SIZE";
pub const UNKNOWN_LOCATION: &str = "UNKNOWN_LOCATION";
pub const NON_FINITE_VALUE: &str = "NON_FINITE_VALUE";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
