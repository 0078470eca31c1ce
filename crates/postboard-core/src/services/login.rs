use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{Credentials, LoginState};
use crate::error::DomainError;
use crate::ports::IdentityProvider;
use crate::services::AuthFlagStore;

/// Minimum length of both email and password.
pub const MIN_CREDENTIAL_LENGTH: usize = 6;

/// Drives the login state machine and publishes every transition.
///
/// Subscribers get a [`watch::Receiver`] and always see the latest state.
pub struct LoginFlow {
    identity: Arc<dyn IdentityProvider>,
    flags: AuthFlagStore,
    state: watch::Sender<LoginState>,
}

impl LoginFlow {
    pub fn new(identity: Arc<dyn IdentityProvider>, flags: AuthFlagStore) -> Self {
        let (state, _) = watch::channel(LoginState::LoggedOut);
        Self {
            identity,
            flags,
            state,
        }
    }

    pub fn state(&self) -> LoginState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    pub async fn is_remembered(&self) -> bool {
        self.flags.is_remembered().await
    }

    /// Cold start: a remembered login goes straight to `LoggedIn`.
    ///
    /// The identity provider's own session is trusted without re-verification.
    pub async fn restore(&self) -> LoginState {
        if self.flags.is_remembered().await {
            tracing::info!("Remembered login restored");
            self.state.send_replace(LoginState::LoggedIn);
        }
        self.state()
    }

    /// Validate, authenticate and optionally persist the remember flag.
    ///
    /// If the returned future is dropped before completion the state falls
    /// back to `LoggedOut`.
    pub async fn login(
        &self,
        credentials: Credentials,
        remember_me: bool,
    ) -> Result<(), DomainError> {
        validate(&credentials)?;

        // only a logged-out session may start an attempt
        let mut current = LoginState::LoggedOut;
        let started = self.state.send_if_modified(|state| {
            current = *state;
            if *state == LoginState::LoggedOut {
                *state = LoginState::Authenticating;
                true
            } else {
                false
            }
        });
        if !started {
            let reason = match current {
                LoginState::LoggedIn => "Already logged in",
                _ => "A login attempt is already in progress",
            };
            return Err(DomainError::Conflict(reason.to_string()));
        }

        let mut attempt = Attempt::new(&self.state);

        match self.identity.sign_in(&credentials).await {
            Ok(()) => {
                tracing::info!("Login successful");
                if remember_me {
                    if let Err(e) = self.flags.remember().await {
                        tracing::warn!(error = %e, "Persisting remember flag failed");
                    }
                }
                attempt.finish(LoginState::LoggedIn);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                attempt.finish(LoginState::LoggedOut);
                Err(e.into())
            }
        }
    }

    /// Clear the remember flag and return to `LoggedOut`.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.flags.forget().await.map_err(|e| {
            tracing::warn!(error = %e, "Clearing remember flag failed");
            DomainError::from(e)
        })?;
        self.state.send_replace(LoginState::LoggedOut);
        tracing::info!("Logged out");
        Ok(())
    }
}

fn validate(credentials: &Credentials) -> Result<(), DomainError> {
    if credentials.email.chars().count() < MIN_CREDENTIAL_LENGTH {
        return Err(DomainError::Validation(format!(
            "Email can't be less than {MIN_CREDENTIAL_LENGTH} characters"
        )));
    }
    if credentials.password.chars().count() < MIN_CREDENTIAL_LENGTH {
        return Err(DomainError::Validation(format!(
            "Password can't be less than {MIN_CREDENTIAL_LENGTH} characters"
        )));
    }
    Ok(())
}

/// An in-flight `Authenticating` state; reverts to `LoggedOut` unless finished.
struct Attempt<'a> {
    state: &'a watch::Sender<LoginState>,
    finished: bool,
}

impl<'a> Attempt<'a> {
    fn new(state: &'a watch::Sender<LoginState>) -> Self {
        Self {
            state,
            finished: false,
        }
    }

    fn finish(&mut self, outcome: LoginState) {
        self.finished = true;
        self.state.send_replace(outcome);
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("Login attempt abandoned");
            self.state.send_replace(LoginState::LoggedOut);
        }
    }
}
