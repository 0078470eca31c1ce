//! Firebase Authentication REST sign-in.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use postboard_core::domain::Credentials;
use postboard_core::ports::{AuthError, IdentityProvider};

/// Firebase project settings.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Web API key of the Firebase project.
    pub api_key: String,
    /// Identity Toolkit endpoint, overridable for the emulator.
    pub auth_url: String,
}

impl FirebaseConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            auth_url: "https://identitytoolkit.googleapis.com".to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Email/password sign-in against Firebase Authentication.
///
/// Only the outcome matters here; the returned id token is discarded since
/// the application keeps no session of its own beyond the remember flag.
pub struct FirebaseIdentityProvider {
    client: Client,
    config: FirebaseConfig,
}

impl FirebaseIdentityProvider {
    pub fn new(client: Client, config: FirebaseConfig) -> Self {
        Self { client, config }
    }

    fn sign_in_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword",
            self.config.auth_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.sign_in_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&SignInRequest {
                email: &credentials.email,
                password: &credentials.password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("identity provider answered {status}"));

        if status.is_client_error() {
            Err(AuthError::InvalidCredentials(message))
        } else {
            Err(AuthError::Provider(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_server::{serve_once, test_client};

    fn provider(auth_url: String) -> FirebaseIdentityProvider {
        FirebaseIdentityProvider::new(
            test_client(),
            FirebaseConfig {
                api_key: "test-key".to_string(),
                auth_url,
            },
        )
    }

    #[tokio::test]
    async fn test_successful_sign_in() {
        let (base, request) =
            serve_once(200, r#"{"idToken":"t","email":"user@example.com"}"#).await;

        provider(base)
            .sign_in(&Credentials::new("user@example.com", "secret1"))
            .await
            .unwrap();

        let request = request.await.unwrap();
        assert!(
            request
                .head
                .starts_with("POST /v1/accounts:signInWithPassword?key=test-key ")
        );
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["email"], "user@example.com");
        assert_eq!(body["returnSecureToken"], true);
    }

    #[tokio::test]
    async fn test_rejection_carries_provider_message() {
        let (base, _request) = serve_once(
            400,
            r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS"}}"#,
        )
        .await;

        let err = provider(base)
            .sign_in(&Credentials::new("user@example.com", "wrong1"))
            .await
            .unwrap_err();

        match err {
            AuthError::InvalidCredentials(message) => {
                assert_eq!(message, "INVALID_LOGIN_CREDENTIALS")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_provider_failure() {
        let (base, _request) = serve_once(500, "oops").await;

        let err = provider(base)
            .sign_in(&Credentials::new("user@example.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Provider(_)));
    }
}
