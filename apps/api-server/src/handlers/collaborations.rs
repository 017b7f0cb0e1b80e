//! Collaboration handlers: create, listing, join.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use cinecraft_core::domain::Collaboration;
use cinecraft_core::ports::LedgerError;
use cinecraft_core::validate;
use cinecraft_shared::dto::{
    CollaborationCreatedResponse, CollaborationsResponse, CreateCollaborationRequest,
    ParticipantResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/collaborations/create
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateCollaborationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut collab = Collaboration::new(
        identity.user_id,
        req.title,
        req.description,
        req.needed_crafts,
    );
    collab.project_type = req.project_type;
    collab.timeline = req.timeline;
    collab.budget_range = req.budget_range;
    collab.location = req.location;
    collab.remote_allowed = req.remote_allowed;
    collab.max_collaborators = req.max_collaborators;

    let errors = validate::new_collaboration(&collab);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let saved = state.collaborations.create_with_creator(collab).await?;

    Ok(HttpResponse::Ok().json(CollaborationCreatedResponse {
        success: true,
        collaboration_id: saved.id,
    }))
}

/// GET /api/collaborations
pub async fn list(_identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let collaborations = state.feed.list_collaborations().await?;

    Ok(HttpResponse::Ok().json(CollaborationsResponse {
        success: true,
        collaborations,
    }))
}

/// POST /api/collaborations/{collaboration_id}/join
pub async fn join(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let collaboration_id = path.into_inner();

    let participant_id = state
        .ledger
        .join_collaboration(collaboration_id, identity.user_id)
        .await
        .map_err(|e| match e {
            LedgerError::ParentMissing => {
                AppError::NotFound("Collaboration not found".to_string())
            }
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(ParticipantResponse {
        success: true,
        participant_id,
    }))
}
