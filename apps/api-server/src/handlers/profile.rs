//! Profile update handler.

use actix_web::{HttpResponse, web};

use cinecraft_core::domain::ProfilePatch;
use cinecraft_shared::Ack;
use cinecraft_shared::dto::UpdateProfileRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/profile/update
///
/// Whole-form submit: absent optional fields clear the stored value (except
/// the NOT NULL craft/experience columns, which only change when provided).
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let patch = ProfilePatch {
        bio: req.bio,
        location: req.location,
        portfolio_url: req.portfolio_url,
        primary_craft: req.primary_craft,
        experience_level: req.experience_level,
        skills: req.skills,
        is_profile_complete: req.is_profile_complete,
    };

    state.users.update_profile(identity.user_id, patch).await?;

    Ok(HttpResponse::Ok().json(Ack::ok()))
}
