use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{Clock, PostStore};

/// Read/create/update flow for posts.
///
/// The store stays authoritative; the repository only keeps a snapshot of
/// the most recent listing and stamps edit dates. Store failures are logged
/// here and handed back as [`DomainError`].
pub struct PostRepository {
    store: Arc<dyn PostStore>,
    clock: Arc<dyn Clock>,
    snapshot: RwLock<Vec<Post>>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn PostStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            snapshot: RwLock::new(Vec::new()),
        }
    }

    /// Latest store state; also refreshes the snapshot.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.store.list_posts().await.map_err(|e| {
            tracing::warn!(error = %e, "Listing posts failed");
            DomainError::from(e)
        })?;

        *self.snapshot.write().await = posts.clone();
        tracing::debug!(count = posts.len(), "Posts refreshed");
        Ok(posts)
    }

    /// Refresh and look a single post up by id.
    pub async fn find_post(&self, id: i64) -> Result<Post, DomainError> {
        self.list_posts()
            .await?
            .into_iter()
            .find(|p| p.id == Some(id))
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })
    }

    pub async fn create_post(&self, post: Post) -> Result<Post, DomainError> {
        let created = self.store.insert_post(post).await.map_err(|e| {
            tracing::warn!(error = %e, "Creating post failed");
            DomainError::from(e)
        })?;

        tracing::info!(post_id = ?created.id, "Post created");
        Ok(created)
    }

    /// Persist changes to an existing post, setting its edit date to today.
    pub async fn update_post(&self, mut post: Post) -> Result<Post, DomainError> {
        post.edit_date = Some(self.clock.today());

        let updated = self.store.update_post(post).await.map_err(|e| {
            tracing::warn!(error = %e, "Updating post failed");
            DomainError::from(e)
        })?;

        tracing::info!(post_id = ?updated.id, "Post updated");
        Ok(updated)
    }

    /// Posts as of the last successful [`list_posts`](Self::list_posts).
    pub async fn snapshot(&self) -> Vec<Post> {
        self.snapshot.read().await.clone()
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }
}
