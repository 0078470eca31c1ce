//! In-memory post store - used as fallback when the database cannot be opened.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::PostStore;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Post>,
    last_id: i64,
}

/// Post store kept in a `BTreeMap` behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostStore {
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert_post(&self, mut post: Post) -> Result<Post, RepoError> {
        if post.id.is_some() {
            return Err(RepoError::Constraint("post already has an id".to_string()));
        }
        if let Some(field) = post.missing_field() {
            return Err(RepoError::Constraint(format!("post {field} must not be empty")));
        }

        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        post.id = Some(id);
        table.rows.insert(id, post.clone());

        Ok(post)
    }

    async fn update_post(&self, post: Post) -> Result<Post, RepoError> {
        let id = post
            .id
            .ok_or_else(|| RepoError::Constraint("post has no id".to_string()))?;
        if let Some(field) = post.missing_field() {
            return Err(RepoError::Constraint(format!("post {field} must not be empty")));
        }

        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(RepoError::NotFound { id })?;
        *row = Post {
            creation_date: row.creation_date,
            ..post
        };

        Ok(row.clone())
    }
}
