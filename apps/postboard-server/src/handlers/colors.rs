//! Color palette handler.

use actix_web::HttpResponse;

use postboard_core::domain::PostColor;
use postboard_shared::ApiResponse;
use postboard_shared::dto::ColorResponse;

use crate::middleware::session::SignedIn;

/// GET /api/colors
pub async fn list_colors(_: SignedIn) -> HttpResponse {
    let colors: Vec<ColorResponse> = PostColor::ALL
        .iter()
        .map(|color| ColorResponse {
            index: color.index(),
            name: color.name().to_string(),
            hex: color.hex().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(ApiResponse::ok(colors))
}
