//! Authentication ports.

use async_trait::async_trait;

use crate::domain::Credentials;

/// External identity provider performing the email/password handshake.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with the given credentials.
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the credentials; carries its message.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The provider could not be reached or answered unexpectedly.
    #[error("{0}")]
    Provider(String),

    #[error("Hashing error: {0}")]
    Hashing(String),
}
