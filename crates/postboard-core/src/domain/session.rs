use std::fmt;

use serde::{Deserialize, Serialize};

/// Login state machine.
///
/// `LoggedOut -> Authenticating -> LoggedIn -> LoggedOut`; a failed attempt
/// falls back from `Authenticating` to `LoggedOut`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginState {
    #[default]
    LoggedOut,
    Authenticating,
    LoggedIn,
}

impl LoginState {
    pub fn is_logged_in(self) -> bool {
        self == LoginState::LoggedIn
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoginState::LoggedOut => "logged_out",
            LoginState::Authenticating => "authenticating",
            LoginState::LoggedIn => "logged_in",
        }
    }
}

/// Email/password pair handed to the identity provider.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
