use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Post, PostColor};
use crate::error::DomainError;
use crate::services::PostRepository;

/// Post fields as entered on the editing screen; any of them may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub comment: Option<String>,
    pub picture: Option<String>,
    pub color: Option<String>,
}

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(Post),
    Updated(Post),
}

impl SaveOutcome {
    pub fn post(&self) -> &Post {
        match self {
            SaveOutcome::Created(post) | SaveOutcome::Updated(post) => post,
        }
    }

    pub fn into_post(self) -> Post {
        match self {
            SaveOutcome::Created(post) | SaveOutcome::Updated(post) => post,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Created(_) => "Post is created!",
            SaveOutcome::Updated(_) => "Post is updated!",
        }
    }
}

/// Editing-screen state holder: validates drafts before they reach the repository.
pub struct PostEditor {
    repository: Arc<PostRepository>,
}

impl PostEditor {
    pub fn new(repository: Arc<PostRepository>) -> Self {
        Self { repository }
    }

    /// Create a new post from `draft`, or update `editing` with it.
    pub async fn save(
        &self,
        draft: PostDraft,
        editing: Option<Post>,
    ) -> Result<SaveOutcome, DomainError> {
        let (comment, picture, color) = validate(draft)?;

        match editing {
            Some(existing) => {
                let post = Post {
                    comment,
                    picture,
                    color,
                    ..existing
                };
                let updated = self.repository.update_post(post).await?;
                Ok(SaveOutcome::Updated(updated))
            }
            None => {
                let post = Post::new(comment, picture, color, self.repository.today());
                let created = self.repository.create_post(post).await?;
                Ok(SaveOutcome::Created(created))
            }
        }
    }
}

fn validate(draft: PostDraft) -> Result<(String, String, String), DomainError> {
    let comment = non_empty(draft.comment)
        .ok_or_else(|| invalid("Please, add some comment"))?;
    let picture = non_empty(draft.picture)
        .ok_or_else(|| invalid("Please, choose post picture"))?;
    let color = non_empty(draft.color)
        .ok_or_else(|| invalid("Please, choose post color"))?;

    let color: PostColor = color
        .parse()
        .map_err(|_| invalid("Please, choose one of the available colors"))?;

    Ok((comment, picture, color.hex().to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn invalid(message: &str) -> DomainError {
    tracing::debug!(reason = message, "Post draft rejected");
    DomainError::Validation(message.to_string())
}
