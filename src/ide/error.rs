//! Error types for a refresh.

use thiserror::Error;

use crate::host::HostError;

/// Errors that stop a refresh stage early.
///
/// None of these reach the host: the engine logs them and returns whatever
/// annotations it already finalized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InlineValueError {
    /// A document collaborator failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The refresh was cancelled by the host.
    #[error("Refresh cancelled")]
    Cancelled,
}
