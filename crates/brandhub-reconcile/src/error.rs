//! Repair errors

/// Why a record could not be repaired
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    /// Input is not a JSON object
    #[error("expected a brand object, got {found}")]
    NotAnObject { found: &'static str },

    /// Typed record could not be turned back into JSON
    #[error("failed to encode brand: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for repair operations
pub type RepairResult<T> = Result<T, RepairError>;
