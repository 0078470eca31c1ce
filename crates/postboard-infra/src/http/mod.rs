//! HTTP integrations - picture listing and Firebase sign-in.

use std::time::Duration;

mod firebase;
mod pictures;

#[cfg(test)]
mod test_server;

pub use firebase::{FirebaseConfig, FirebaseIdentityProvider};
pub use pictures::{HttpPictureSource, PictureSourceConfig};

/// A configured endpoint that is not a usable absolute URL.
#[derive(Debug, thiserror::Error)]
#[error("invalid URL {url:?}: {reason}")]
pub struct InvalidUrl {
    pub url: String,
    pub reason: String,
}

/// Shared client for all outbound requests; `timeout` bounds each request.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
        .build()
}
