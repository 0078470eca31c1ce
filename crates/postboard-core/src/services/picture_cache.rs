use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::PostPicture;
use crate::error::DomainError;
use crate::ports::PictureSource;

/// Single-slot cache over the remote picture listing.
///
/// The slot is filled by the first successful fetch and then served for the
/// rest of the process lifetime. A failed fetch leaves it empty, so the next
/// caller fetches again. Concurrent first callers are serialized by the
/// cell: one fetch runs at a time and the others wait for its outcome.
pub struct PictureCache {
    source: Arc<dyn PictureSource>,
    slot: OnceCell<Vec<PostPicture>>,
}

impl PictureCache {
    pub fn new(source: Arc<dyn PictureSource>) -> Self {
        Self {
            source,
            slot: OnceCell::new(),
        }
    }

    pub async fn get_pictures(&self) -> Result<Vec<PostPicture>, DomainError> {
        let pictures = self
            .slot
            .get_or_try_init(|| async {
                tracing::debug!("Fetching remote pictures");
                let pictures = self.source.fetch_pictures().await.map_err(|e| {
                    tracing::warn!(error = %e, "Fetching pictures failed");
                    DomainError::from(e)
                })?;
                tracing::info!(count = pictures.len(), "Pictures cached");
                Ok::<_, DomainError>(pictures)
            })
            .await?;

        Ok(pictures.clone())
    }

    pub fn is_populated(&self) -> bool {
        self.slot.initialized()
    }
}
