//! Error types for the tahanun ecosystem.

use thiserror::Error;

/// Errors that can occur in tahanun operations.
#[derive(Error, Debug)]
pub enum TahanunError {
    #[error("Converter request failed: {0}")]
    Converter(String),

    #[error("Converter returned a malformed response: {0}")]
    ConverterResponse(String),

    #[error("Invalid date '{0}'. Expected yyyy-mm-dd")]
    InvalidDate(String),
}

/// Result type alias for tahanun operations.
pub type TahanunResult<T> = Result<T, TahanunError>;
