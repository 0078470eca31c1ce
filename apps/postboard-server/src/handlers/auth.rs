//! Login and logout handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::Credentials;
use postboard_shared::ApiResponse;
use postboard_shared::dto::{LoginRequest, SessionResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn session_response(state: &AppState) -> SessionResponse {
    SessionResponse {
        state: state.login_state().as_str().to_string(),
        remembered: state.login.is_remembered().await,
    }
}

/// GET /api/auth/session
pub async fn session(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(session_response(&state).await))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::debug!(email = %req.email, remember_me = req.remember_me, "Login requested");

    state
        .login
        .login(Credentials::new(req.email, req.password), req.remember_me)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(session_response(&state).await)))
}

/// POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.login.logout().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(session_response(&state).await)))
}
