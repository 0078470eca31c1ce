//! Post list and editor handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::Post;
use postboard_core::services::PostDraft;
use postboard_shared::ApiResponse;
use postboard_shared::dto::{PostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::middleware::session::SignedIn;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.unwrap_or_default(),
        comment: post.comment,
        creation_date: post.creation_date,
        edit_date: post.edit_date,
        picture: post.picture,
        color: post.color,
    }
}

fn to_draft(req: PostRequest) -> PostDraft {
    PostDraft {
        comment: req.comment,
        picture: req.picture,
        color: req.color,
    }
}

/// GET /api/posts
pub async fn list_posts(_: SignedIn, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    let posts: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// POST /api/posts
pub async fn create_post(
    _: SignedIn,
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let outcome = state.editor.save(to_draft(body.into_inner()), None).await?;
    let message = outcome.message();

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        to_response(outcome.into_post()),
        message,
    )))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    _: SignedIn,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let existing = state.posts.find_post(path.into_inner()).await?;
    let outcome = state
        .editor
        .save(to_draft(body.into_inner()), Some(existing))
        .await?;
    let message = outcome.message();

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        to_response(outcome.into_post()),
        message,
    )))
}
