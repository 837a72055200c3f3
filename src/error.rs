// =============================================================================
// Engine error type
// =============================================================================
//
// The engine performs no I/O, so the only failure mode is malformed input:
// an empty bar sequence, a non-finite bar field, or degenerate parameters.
// Validation runs before any computation begins — no partial output is ever
// produced. Numeric edge cases inside the math (zero ranges, zero volume)
// are resolved by documented substitutions and never surface as errors.

use thiserror::Error;

/// Errors returned by the engine's public entry points.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input bars or parameters failed validation before any
    /// computation ran.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Build an `InvalidInput` error from any message.
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_is_preserved() {
        let err = EngineError::invalid_input("bars must not be empty");
        assert_eq!(err.to_string(), "invalid input: bars must not be empty");
    }
}
