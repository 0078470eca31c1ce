//! SQLite post store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tokio::sync::Mutex;

use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// Durable post store backed by the `posts` table.
///
/// Writes go through one async mutex and a transaction each, so they never
/// interleave and readers never see a half-applied update.
pub struct SqlitePostStore {
    db: DbConn,
    write_lock: Mutex<()>,
}

impl SqlitePostStore {
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }
}

fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        DbErr::ConnectionAcquire(err) => RepoError::Connection(err.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("constraint") || err_str.contains("NOT NULL") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

fn require_fields(post: &Post) -> Result<(), RepoError> {
    match post.missing_field() {
        Some(field) => Err(RepoError::Constraint(format!("post {field} must not be empty"))),
        None => Ok(()),
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_post(&self, post: Post) -> Result<Post, RepoError> {
        if post.id.is_some() {
            return Err(RepoError::Constraint("post already has an id".to_string()));
        }
        require_fields(&post)?;

        let _guard = self.write_lock.lock().await;
        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(query_error)?;

        tracing::debug!(post_id = model.id, "Post row inserted");
        Ok(model.into())
    }

    async fn update_post(&self, post: Post) -> Result<Post, RepoError> {
        let id = post
            .id
            .ok_or_else(|| RepoError::Constraint("post has no id".to_string()))?;
        require_fields(&post)?;

        let _guard = self.write_lock.lock().await;
        let txn = self.db.begin().await.map_err(query_error)?;

        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound { id })?;

        // creation_date stays as stored
        let mut active_model: post::ActiveModel = existing.into();
        active_model.comment = Set(post.comment);
        active_model.edit_date = Set(post.edit_date);
        active_model.picture = Set(post.picture);
        active_model.color = Set(post.color);

        let model = active_model.update(&txn).await.map_err(query_error)?;
        txn.commit().await.map_err(query_error)?;

        tracing::debug!(post_id = model.id, "Post row updated");
        Ok(model.into())
    }
}
