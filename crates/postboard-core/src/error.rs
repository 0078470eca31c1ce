//! Domain-level error types.

use thiserror::Error;

use crate::ports::{AuthError, FetchError, PreferencesError};

/// Domain errors - what a service reports back to its caller.
///
/// Every variant carries enough to render a user-facing message via
/// [`DomainError::user_message`]; none of them is fatal to the process.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Remote source unavailable: {0}")]
    Unavailable(#[from] FetchError),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    /// Message suitable for showing to the user as-is.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::NotFound { entity_type, id } => {
                format!("The {entity_type} with id {id} no longer exists")
            }
            DomainError::Validation(msg) => msg.clone(),
            DomainError::Storage(_) => {
                "Saving or loading posts failed, please try again".to_string()
            }
            DomainError::Unavailable(_) => {
                "Getting pictures failed, check your internet connection".to_string()
            }
            DomainError::AuthFailed(msg) => format!("Authentication failed: {msg}"),
            DomainError::Conflict(msg) => msg.clone(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Post {id} not found")]
    NotFound { id: i64 },

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id } => DomainError::NotFound {
                entity_type: "post",
                id,
            },
            other => DomainError::Storage(other.to_string()),
        }
    }
}

impl From<PreferencesError> for DomainError {
    fn from(err: PreferencesError) -> Self {
        DomainError::Storage(err.to_string())
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials(msg) | AuthError::Provider(msg) => {
                DomainError::AuthFailed(msg)
            }
            AuthError::Hashing(msg) => DomainError::AuthFailed(msg),
        }
    }
}
