//! In-crate fakes for service tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Credentials, Post, PostPicture};
use crate::error::RepoError;
use crate::ports::{
    AuthError, FetchError, IdentityProvider, PictureSource, PostStore, Preferences,
    PreferencesError,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn picture(id: i64) -> PostPicture {
    PostPicture {
        id,
        author: format!("author {id}"),
        width: 640,
        height: 480,
        url: format!("https://example.com/photos/{id}"),
        download_url: format!("https://example.com/id/{id}/640/480"),
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub rows: Mutex<BTreeMap<i64, Post>>,
    pub fail_reads: bool,
}

#[async_trait]
impl PostStore for FakeStore {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        if self.fail_reads {
            return Err(RepoError::Query("disk I/O error".to_string()));
        }
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn insert_post(&self, mut post: Post) -> Result<Post, RepoError> {
        if post.id.is_some() {
            return Err(RepoError::Constraint("post already has an id".to_string()));
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        post.id = Some(id);
        rows.insert(id, post.clone());
        Ok(post)
    }

    async fn update_post(&self, post: Post) -> Result<Post, RepoError> {
        let id = post
            .id
            .ok_or_else(|| RepoError::Constraint("post has no id".to_string()))?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&id).ok_or(RepoError::NotFound { id })?;
        let creation_date = row.creation_date;
        *row = Post {
            creation_date,
            ..post
        };
        Ok(row.clone())
    }
}

/// Picture source that fails for the first `failures` calls.
pub struct CountingSource {
    pub calls: AtomicUsize,
    failures: usize,
    pictures: Vec<PostPicture>,
}

impl CountingSource {
    pub fn new(pictures: Vec<PostPicture>, failures: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failures,
            pictures,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PictureSource for CountingSource {
    async fn fetch_pictures(&self) -> Result<Vec<PostPicture>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if call < self.failures {
            return Err(FetchError::Network("connection refused".to_string()));
        }
        Ok(self.pictures.clone())
    }
}

#[derive(Default)]
pub struct MemoryPreferences {
    pub values: Mutex<HashMap<(String, String), bool>>,
    pub fail_writes: bool,
}

#[async_trait]
impl Preferences for MemoryPreferences {
    async fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, PreferencesError> {
        let values = self.values.lock().unwrap();
        Ok(values
            .get(&(namespace.to_string(), key.to_string()))
            .copied())
    }

    async fn set_bool(
        &self,
        namespace: &str,
        key: &str,
        value: bool,
    ) -> Result<(), PreferencesError> {
        if self.fail_writes {
            return Err(PreferencesError::Io("read-only file system".to_string()));
        }
        self.values
            .lock()
            .unwrap()
            .insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}

/// Accepts exactly one email/password pair.
pub struct StubIdentity {
    pub email: &'static str,
    pub password: &'static str,
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        tokio::task::yield_now().await;
        if credentials.email == self.email && credentials.password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials(
                "The password is invalid".to_string(),
            ))
        }
    }
}

/// Identity provider that never answers.
pub struct HangingIdentity;

#[async_trait]
impl IdentityProvider for HangingIdentity {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<(), AuthError> {
        futures::future::pending().await
    }
}
