//! Post handlers: create, feed, like toggle.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use cinecraft_core::domain::{MediaRef, Post, Visibility};
use cinecraft_core::ports::LedgerError;
use cinecraft_core::validate;
use cinecraft_shared::dto::{CreatePostRequest, FeedResponse, LikeResponse, PostCreatedResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts/create
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let visibility = match req.visibility.as_deref() {
        None => Visibility::default(),
        Some(raw) => raw.parse().map_err(AppError::BadRequest)?,
    };

    let mut post = Post::new(identity.user_id, req.content);
    post.media = req
        .media
        .into_iter()
        .map(|m| MediaRef {
            url: m.url,
            media_type: m.media_type,
        })
        .collect();
    post.project_title = req.project_title;
    post.location = req.location;
    post.collaboration_open = req.collaboration_open;
    post.visibility = visibility;
    post.craft_tags = req.craft_tags;

    let errors = validate::new_post(&post);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Ok().json(PostCreatedResponse {
        success: true,
        post_id: saved.id,
    }))
}

/// GET /api/posts/feed
pub async fn feed(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.feed.compose_feed(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(FeedResponse {
        success: true,
        posts,
    }))
}

/// POST /api/posts/{post_id}/like
pub async fn like(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let outcome = state
        .ledger
        .toggle_like(post_id, identity.user_id)
        .await
        .map_err(|e| match e {
            LedgerError::ParentMissing => AppError::NotFound("Post not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        success: true,
        liked: outcome.liked,
        likes_count: outcome.likes_count,
    }))
}
