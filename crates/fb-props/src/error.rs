//! Property backend errors.

use thiserror::Error;

/// Result type for property queries.
pub type PropResult<T> = Result<T, PropError>;

/// Errors that can occur during refrigerant property queries.
///
/// A `PropError` never crosses a calculation-section boundary: the engine
/// converts it into a structured warning and marks the affected outputs as
/// not computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropError {
    /// An input was missing or non-finite, or describes an impossible state
    /// (e.g. absolute pressure <= 0). Caught before the backend is called.
    #[error("Invalid state input: {what}")]
    InvalidState { what: &'static str },

    /// The refrigerant is not available in this backend.
    #[error("Refrigerant not supported: {name}")]
    Unsupported { name: &'static str },

    /// The underlying equation-of-state call failed.
    #[error("Backend error: {message}")]
    Backend { message: String },
}
