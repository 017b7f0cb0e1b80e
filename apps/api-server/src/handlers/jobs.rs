//! Job handlers: create, filtered listing, apply.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use cinecraft_core::domain::Job;
use cinecraft_core::ports::{JobFilter, LedgerError};
use cinecraft_core::validate;
use cinecraft_shared::dto::{
    ApplicationResponse, CreateJobRequest, JobCreatedResponse, JobListQuery, JobsResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/jobs/create
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateJobRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut job = Job::new(
        identity.user_id,
        req.title,
        req.description,
        req.craft_required,
        req.experience_level,
        req.job_type,
    );
    job.additional_crafts = req.additional_crafts;
    job.location = req.location;
    job.remote_allowed = req.remote_allowed;
    job.budget_min = req.budget_min;
    job.budget_max = req.budget_max;
    if let Some(currency) = req.currency {
        job.currency = currency;
    }
    job.deadline = req.deadline;

    let errors = validate::new_job(&job);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let saved = state.jobs.insert(job).await?;

    Ok(HttpResponse::Ok().json(JobCreatedResponse {
        success: true,
        job_id: saved.id,
    }))
}

/// GET /api/jobs
pub async fn list(
    _identity: Identity,
    state: web::Data<AppState>,
    query: web::Query<JobListQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();
    let filter = JobFilter {
        search: q.search,
        craft: q.craft,
        experience_level: q.experience_level,
        job_type: q.job_type,
        location: q.location,
        remote_only: q.remote_only.unwrap_or(false),
        budget_min: q.budget_min,
        budget_max: q.budget_max,
        offset: q.offset,
    };

    let jobs = state.feed.list_jobs(&filter).await?;

    Ok(HttpResponse::Ok().json(JobsResponse {
        success: true,
        jobs,
    }))
}

/// POST /api/jobs/{job_id}/apply
pub async fn apply(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let job_id = path.into_inner();

    let application_id = state
        .ledger
        .apply_to_job(job_id, identity.user_id)
        .await
        .map_err(|e| match e {
            LedgerError::ParentMissing => AppError::NotFound("Job not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(ApplicationResponse {
        success: true,
        application_id,
    }))
}
