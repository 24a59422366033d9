//! ConcordErrorCode trait for foreign-boundary conversion.

/// Every error enum implements this to expose a stable, machine-readable
/// code string alongside its human-readable message.
pub trait ConcordErrorCode {
    /// Returns the error code string (e.g., "INVALID_RANKING").
    fn error_code(&self) -> &'static str;

    /// Returns the boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_RANKING: &str = "MALFORMED_RANKING";
pub const INVALID_RANKING: &str = "INVALID_RANKING";
pub const EMPTY_UNIVERSE: &str = "EMPTY_UNIVERSE";
pub const INCOMPLETE_RANKING: &str = "INCOMPLETE_RANKING";
pub const UNIVERSE_TOO_LARGE: &str = "UNIVERSE_TOO_LARGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
