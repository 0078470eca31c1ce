//! Domain entities - the core business objects.

mod color;
mod picture;
mod post;
mod session;

pub use color::{PostColor, UnknownColor};
pub use picture::PostPicture;
pub use post::Post;
pub use session::{Credentials, LoginState};
