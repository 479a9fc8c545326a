//! Error types and handling for street-address-rs.

/// Result type alias for street parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for street parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line did not contain enough segments to hold a number and a name
    #[error("Insufficient segments: expected at least 2, found {found}")]
    InsufficientSegments {
        /// Number of segments produced by the tokenizer
        found: usize,
    },

    /// A suffix table could not be built from the given entries
    #[error("Invalid suffix table: {message}")]
    InvalidSuffixTable {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a new insufficient segments error
    pub fn insufficient_segments(found: usize) -> Self {
        Self::InsufficientSegments { found }
    }

    /// Create a new suffix table error
    pub fn invalid_suffix_table(message: impl Into<String>) -> Self {
        Self::InvalidSuffixTable {
            message: message.into(),
        }
    }
}
