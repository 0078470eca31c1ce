//! Login gate for the post, picture and color routes.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Extractor that only succeeds while the login state is `LoggedIn`.
///
/// ```ignore
/// async fn protected_route(_: SignedIn) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SignedIn;

impl FromRequest for SignedIn {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AppError::Unauthorized));
        };

        if state.login_state().is_logged_in() {
            ready(Ok(SignedIn))
        } else {
            ready(Err(AppError::Unauthorized))
        }
    }
}
