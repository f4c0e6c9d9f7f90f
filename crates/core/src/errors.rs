use thiserror::Error;

/// Unified error type for the entire expense-ledger-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Nothing here is fatal: the ledger does no I/O, so every variant is a
/// rejected request that leaves the ledger exactly as it was.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Transaction validation failed: {0}")]
    ValidationError(String),

    #[error("Could not parse {field}: {message}")]
    ParseError { field: String, message: String },

    // ── Snapshots ───────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Shorthand for a required form field that was left empty.
    pub fn missing_field(field: &str) -> Self {
        CoreError::ValidationError(format!("{field} is required"))
    }

    pub fn parse(field: &str, message: impl Into<String>) -> Self {
        CoreError::ParseError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for errors caused by missing or out-of-range input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::ValidationError(_))
    }

    /// True for errors caused by text that could not be parsed.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, CoreError::ParseError { .. })
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
