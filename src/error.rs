//! Error types for authway — Railway Programming
//!
//! All operations return `Result<T, AuthError>`.
//! No panics, no unwraps in production code paths.

use thiserror::Error;

/// Unified error type for all authentication operations
#[derive(Error, Debug)]
pub enum AuthError {
    // ─── Credential Errors ───

    /// Login not found or password verification failed. The two causes are
    /// deliberately collapsed into one variant so callers cannot enumerate
    /// registered logins.
    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("Login already registered: {0}")]
    DuplicateLogin(String),

    #[error("Credential hashing failed: {0}")]
    CredentialHash(String),

    // ─── Session Errors ───

    #[error("Session is already bound to an identity")]
    AlreadyAuthenticated,

    // ─── Infrastructure Errors ───

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AuthError::CredentialHash(err.to_string())
    }
}

/// Result type alias for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;
