//! Picture listing handler.

use actix_web::{HttpResponse, web};

use postboard_shared::ApiResponse;
use postboard_shared::dto::PictureResponse;

use crate::middleware::error::AppResult;
use crate::middleware::session::SignedIn;
use crate::state::AppState;

/// GET /api/pictures - served from the cache after the first success.
pub async fn list_pictures(_: SignedIn, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let pictures: Vec<PictureResponse> = state
        .pictures
        .get_pictures()
        .await?
        .into_iter()
        .map(|p| PictureResponse {
            id: p.id,
            author: p.author,
            width: p.width,
            height: p.height,
            url: p.url,
            download_url: p.download_url,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(pictures)))
}
