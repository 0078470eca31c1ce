use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Post entity - a comment paired with a picture and a display color.
///
/// `id` is `None` until the store assigns one on first insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i64>,
    pub comment: String,
    pub creation_date: NaiveDate,
    pub edit_date: Option<NaiveDate>,
    pub picture: String,
    pub color: String,
}

impl Post {
    /// Create a new, not yet persisted post.
    pub fn new(comment: String, picture: String, color: String, creation_date: NaiveDate) -> Self {
        Self {
            id: None,
            comment,
            creation_date,
            edit_date: None,
            picture,
            color,
        }
    }

    /// Whether the store has assigned an id to this post.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Name of the first required field that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.comment.trim().is_empty() {
            Some("comment")
        } else if self.picture.trim().is_empty() {
            Some("picture")
        } else if self.color.trim().is_empty() {
            Some("color")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_new_post_is_not_persisted() {
        let post = Post::new(
            "hello".to_string(),
            "http://x/y.jpg".to_string(),
            "#FF0000".to_string(),
            today(),
        );

        assert!(!post.is_persisted());
        assert_eq!(post.edit_date, None);
        assert_eq!(post.missing_field(), None);
    }

    #[test]
    fn test_missing_field_reports_first_blank() {
        let post = Post::new(" ".to_string(), String::new(), String::new(), today());
        assert_eq!(post.missing_field(), Some("comment"));

        let post = Post::new("hi".to_string(), "http://x".to_string(), String::new(), today());
        assert_eq!(post.missing_field(), Some("color"));
    }
}
