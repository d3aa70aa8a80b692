//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for semkit
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Two vectors compared with different lengths
    #[error("Vector size should be the same: {first} != {second}")]
    DimensionMismatch {
        /// Length of the first vector
        first: usize,
        /// Length of the second vector
        second: usize,
    },

    /// A vector with zero magnitude has no direction to compare
    #[error("Cannot compute cosine similarity of a zero-magnitude vector")]
    ZeroMagnitudeVector,

    /// Operation aborted at the caller's request
    #[error("Operation cancelled")]
    Cancelled,

    /// Embedding provider operation error
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding provider error
        message: String,
    },

    /// Chat completion provider operation error
    #[error("Chat completion provider error: {message}")]
    ChatCompletion {
        /// Description of the chat completion error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error from both vector lengths
    pub fn dimension_mismatch(first: usize, second: usize) -> Self {
        Self::DimensionMismatch { first, second }
    }
}

// Upstream provider error creation methods
impl Error {
    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a chat completion provider error
    pub fn chat_completion<S: Into<String>>(message: S) -> Self {
        Self::ChatCompletion {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
        }
    }
}
