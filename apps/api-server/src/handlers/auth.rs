//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use cinecraft_core::domain::User;
use cinecraft_core::ports::{PasswordService, TokenService};
use cinecraft_core::validate;
use cinecraft_shared::dto::{AuthResponse, SigninRequest, SignupRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let errors = validate::signup(
        &req.email,
        &req.password,
        &req.name,
        &req.username,
        &req.primary_craft,
        &req.experience_level,
    );
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // Email and username are both unique.
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::BadRequest(
            "User already exists with this email".to_string(),
        ));
    }
    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(AppError::BadRequest("Username is already taken".to_string()));
    }

    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(
        req.email,
        password_hash,
        req.name,
        req.username,
        req.primary_craft,
        req.experience_level,
    );
    let saved = state.users.insert(user).await?;

    let token = token_service
        .issue(saved.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        user: saved.into(),
        token,
    }))
}

/// POST /api/auth/signin
pub async fn signin(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SigninRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    // Same message for unknown email and bad password.
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = token_service
        .issue(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        user: user.into(),
        token,
    }))
}
