/// Result alias used across the crate.
pub type EditorResult<T> = Result<T, EditorError>;

/// Failure kinds surfaced to the operator.
///
/// Every variant leaves in-memory and persisted state as it was before the failing call.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// The file extension does not map to any supported media kind.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A persisted value exists but cannot be parsed.
    #[error("corrupt persisted state: {0}")]
    CorruptPersistedState(String),

    /// A decoder or transcoder failed or is not initialized.
    #[error("external service unavailable: {0}")]
    ExternalServiceUnavailable(String),

    /// The operation needs an active file (of a given kind) and there is none.
    #[error("no active file: {0}")]
    NoActiveFile(String),

    /// Invalid configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The key-value store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EditorError {
    /// Build an [`EditorError::UnsupportedFormat`].
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build an [`EditorError::CorruptPersistedState`].
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptPersistedState(msg.into())
    }

    /// Build an [`EditorError::ExternalServiceUnavailable`].
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::ExternalServiceUnavailable(msg.into())
    }

    /// Build an [`EditorError::NoActiveFile`].
    pub fn no_active_file(msg: impl Into<String>) -> Self {
        Self::NoActiveFile(msg.into())
    }

    /// Build an [`EditorError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EditorError::Storage`].
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
