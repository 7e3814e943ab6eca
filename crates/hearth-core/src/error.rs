//! Error types for the Hearth deep-link stack

use thiserror::Error;

/// Errors from the backend "fetch entity by id" collaborator
///
/// `Clone` so mocks can hand out copies of a configured failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Fetch timed out")]
    Timeout,
}

/// Errors from the auth session collaborator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Session restore failed: {0}")]
    SessionRestore(String),
}
