//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod identity;
mod picture_source;
mod post_store;
mod preferences;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::{AuthError, IdentityProvider, PasswordService};
pub use picture_source::{FetchError, PictureSource};
pub use post_store::PostStore;
pub use preferences::{Preferences, PreferencesError};
