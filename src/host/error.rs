//! Error types for collaborator calls.

use thiserror::Error;

/// Errors reported by the document collaborators (symbol and reference providers).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// No provider is registered for the document, or it returned nothing.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// The provider ran but failed.
    #[error("Provider failed: {0}")]
    Failed(String),
}

impl HostError {
    /// Create an unavailable-provider error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a provider failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Errors reported by the debug session's evaluate endpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvaluateError {
    /// The expression does not resolve in the selected frame
    /// (e.g. the variable is not bound yet at this point of execution).
    #[error("Cannot resolve '{expression}': {message}")]
    NameResolution { expression: String, message: String },

    /// Any other evaluate failure (transport, adapter error, timeout).
    #[error("Evaluate failed: {0}")]
    Failed(String),
}

impl EvaluateError {
    /// Create a name-resolution failure.
    pub fn name_resolution(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NameResolution {
            expression: expression.into(),
            message: message.into(),
        }
    }

    /// Create a generic evaluate failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Whether this is a name-resolution failure.
    pub fn is_name_resolution(&self) -> bool {
        matches!(self, Self::NameResolution { .. })
    }
}
