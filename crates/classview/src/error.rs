//! Error types for registry operations.
//!
//! Name resolution never fails: an unresolved name is simply `None`. The errors here
//! cover the few operations that can genuinely go wrong.

use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Error type for registry and export operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A record with the same full name is already registered
    #[error("Class already registered: {full_name}")]
    DuplicateClass {
        /// Full name (package path plus simple name) of the rejected record
        full_name: String,
    },

    /// Serialization error while exporting
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RegistryError {
    /// Create a duplicate-class error for the given full name.
    pub fn duplicate(full_name: impl Into<String>) -> Self {
        Self::DuplicateClass {
            full_name: full_name.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_class_error() {
        let err = RegistryError::duplicate("com.example.App");
        assert_eq!(err.to_string(), "Class already registered: com.example.App");
    }

    #[test]
    fn test_serialization_error() {
        let err = RegistryError::serialization("Failed to encode registry", None::<std::io::Error>);
        assert_eq!(err.to_string(), "Serialization error: Failed to encode registry");
    }
}
