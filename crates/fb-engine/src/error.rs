//! Fatal batch-level errors.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort a batch before any row is processed.
///
/// Per-row and per-section failures are never errors; they degrade into
/// structured warnings inside the row results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Batch configuration is unusable (e.g. refrigerant not supported by
    /// the property backend).
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The dataset holds no rows at all. Distinct from every row producing
    /// empty results, which is a valid degenerate outcome.
    #[error("No data loaded")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_carries_message() {
        let err = EngineError::Config {
            message: "backend cannot model R410A".into(),
        };
        assert!(err.to_string().contains("R410A"));
    }
}
