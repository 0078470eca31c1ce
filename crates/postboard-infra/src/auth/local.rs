//! Identity provider backed by a fixed set of local accounts.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use postboard_core::domain::Credentials;
use postboard_core::ports::{AuthError, IdentityProvider, PasswordService};

const REJECTED: &str = "Invalid email or password";

/// Parse `email=hash` pairs separated by `;`.
///
/// Only the first `=` splits a pair, since PHC hash strings contain more.
/// Emails are compared case-insensitively.
pub fn parse_accounts(raw: &str) -> Result<HashMap<String, String>, String> {
    let mut accounts = HashMap::new();
    for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let (email, hash) = entry
            .split_once('=')
            .ok_or_else(|| format!("account entry without '=': {entry}"))?;
        let email = email.trim().to_lowercase();
        let hash = hash.trim();
        if email.is_empty() || hash.is_empty() {
            return Err(format!("incomplete account entry: {entry}"));
        }
        accounts.insert(email, hash.to_string());
    }
    Ok(accounts)
}

/// Verifies credentials against stored password hashes, no network involved.
pub struct LocalIdentityProvider {
    accounts: HashMap<String, String>,
    passwords: Arc<dyn PasswordService>,
}

impl LocalIdentityProvider {
    pub fn new(accounts: HashMap<String, String>, passwords: Arc<dyn PasswordService>) -> Self {
        Self {
            accounts,
            passwords,
        }
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let Some(hash) = self.accounts.get(&credentials.email.trim().to_lowercase()) else {
            tracing::debug!("Sign-in for unknown local account");
            return Err(AuthError::InvalidCredentials(REJECTED.to_string()));
        };

        // argon2 verification is CPU bound
        let passwords = Arc::clone(&self.passwords);
        let password = credentials.password.clone();
        let hash = hash.clone();
        let verified = tokio::task::spawn_blocking(move || passwords.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        if verified {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials(REJECTED.to_string()))
        }
    }
}
