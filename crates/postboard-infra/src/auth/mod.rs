//! Local account sign-in.

mod local;
mod password;

pub use local::{LocalIdentityProvider, parse_accounts};
pub use password::Argon2PasswordService;
