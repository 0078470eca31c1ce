use async_trait::async_trait;

use crate::domain::PostPicture;

/// Read-only remote listing of available pictures.
#[async_trait]
pub trait PictureSource: Send + Sync {
    /// Fetch the full picture list with a single request.
    async fn fetch_pictures(&self) -> Result<Vec<PostPicture>, FetchError>;
}

/// Picture fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {status}")]
    Http { status: u16 },

    #[error("Malformed response: {0}")]
    Decode(String),
}
