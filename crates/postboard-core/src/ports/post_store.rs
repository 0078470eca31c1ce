use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Durable table of posts.
///
/// Implementations serialize writes per instance; a write is fully visible
/// to any read issued after its future resolves.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All persisted posts, in ascending id order.
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;

    /// Persist a post without an id; returns it with the assigned id.
    ///
    /// Fails with [`RepoError::Constraint`] when a required field is empty
    /// or the post already has an id.
    async fn insert_post(&self, post: Post) -> Result<Post, RepoError>;

    /// Overwrite an existing post in place. `creation_date` is never rewritten.
    ///
    /// Fails with [`RepoError::NotFound`] when the id is unknown, leaving the
    /// store unchanged.
    async fn update_post(&self, post: Post) -> Result<Post, RepoError>;
}
