//! Error types for Customer DNA

/// Result type alias using Customer DNA's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Customer DNA operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected input (missing channel, blank customer name)
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced customer does not exist
    #[error("customer {customer_id} not found")]
    NotFound { customer_id: u64 },

    /// Persistence collaborator failures
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not-found error for a customer id
    pub fn not_found(customer_id: u64) -> Self {
        Self::NotFound { customer_id }
    }

    /// Create a new storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short machine-readable name, used for error metrics and response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found_error",
            Self::Storage(_) => "storage_error",
            Self::Config(_) => "config_error",
            Self::Io(_) => "io_error",
            Self::Serialization(_) => "serialization_error",
        }
    }
}
