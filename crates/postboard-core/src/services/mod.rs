//! Services - the data-access layer the application's state holders talk to.

mod auth_flag;
mod login;
mod picture_cache;
mod post_editor;
mod post_repository;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_flag::{AUTH_NAMESPACE, AUTHENTICATED_KEY, AuthFlagStore};
pub use login::{LoginFlow, MIN_CREDENTIAL_LENGTH};
pub use picture_cache::PictureCache;
pub use post_editor::{PostDraft, PostEditor, SaveOutcome};
pub use post_repository::PostRepository;
