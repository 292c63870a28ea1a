use thiserror::Error;

/// Unified error type for api-semver operations
#[derive(Error, Debug)]
pub enum ApiSemverError {
    /// A required version string or label is malformed
    #[error("Version parsing error: {0}")]
    Parse(String),

    /// An artifact could not be introspected
    #[error("Artifact load failed: {0}")]
    Load(String),

    /// No previous version can be derived from an artifact or from history
    #[error("Insufficient version history: {0}")]
    InsufficientHistory(String),

    /// A version component cannot be incremented without overflowing
    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in api-semver
pub type Result<T> = std::result::Result<T, ApiSemverError>;

impl ApiSemverError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        ApiSemverError::Parse(msg.into())
    }

    /// Create a load error with context
    pub fn load(msg: impl Into<String>) -> Self {
        ApiSemverError::Load(msg.into())
    }

    /// Create an insufficient-history error with context
    pub fn insufficient_history(msg: impl Into<String>) -> Self {
        ApiSemverError::InsufficientHistory(msg.into())
    }

    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        ApiSemverError::Overflow(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ApiSemverError::Config(msg.into())
    }
}
