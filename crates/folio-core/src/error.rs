//! Error types for the folio core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for folio.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Locale table loading or parsing error.
    #[error("Locale error in namespace {namespace}: {message}")]
    Locale {
        namespace: String,
        message: String,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    /// Create a new locale error for a namespace.
    pub fn locale(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Locale {
            namespace: namespace.into(),
            message: message.into(),
        }
    }
}
