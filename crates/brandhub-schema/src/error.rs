//! Validation errors

/// Reason a record failed the write gate
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Record is not shaped like a brand (wrong type, bad enum value)
    #[error("schema mismatch: {0}")]
    Shape(#[from] serde_json::Error),

    /// `id` is absent or blank
    #[error("id is required")]
    MissingId,

    /// `name` is empty
    #[error("name must not be empty")]
    EmptyName,

    /// URL field is neither empty nor an absolute URL
    #[error("invalid url in {field}: '{value}'")]
    InvalidUrl { field: String, value: String },

    /// Palette entry has a malformed hex code
    #[error("invalid hex color at colors[{index}]: '{value}'")]
    InvalidHex { index: usize, value: String },
}

impl ValidationError {
    pub(crate) fn invalid_url(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidUrl {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
