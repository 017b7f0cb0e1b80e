//! Event handlers: create, listing, RSVP.
//!
//! Listing is a public discovery surface; create and RSVP authenticate via
//! the same bearer convention as every other mutation, and the organizer is
//! always the verified caller.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use cinecraft_core::domain::Event;
use cinecraft_core::ports::{EventFilter, LedgerError};
use cinecraft_core::validate;
use cinecraft_shared::Ack;
use cinecraft_shared::dto::{CreateEventRequest, EventCreated, EventCreatedResponse, EventListQuery};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/events/create
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateEventRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut event = Event::new(
        identity.user_id,
        req.title,
        req.description,
        req.event_type,
        req.date,
        req.time,
    );
    event.location = req.location;
    event.is_virtual = req.is_virtual;
    event.max_attendees = req.max_attendees;
    event.price = req.price;
    event.craft_focus = req.craft_focus;

    let errors = validate::new_event(&event);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let saved = state.events.insert(event).await?;

    Ok(HttpResponse::Ok().json(EventCreatedResponse {
        success: true,
        event: EventCreated {
            id: saved.id,
            title: saved.title,
            created_at: saved.created_at,
        },
    }))
}

/// GET /api/events
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<EventListQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();
    let filter = EventFilter {
        event_type: q.event_type,
        craft: q.craft,
        upcoming: q.upcoming.unwrap_or(false),
    };

    let events = state.feed.list_events(&filter).await?;

    Ok(HttpResponse::Ok().json(events))
}

/// POST /api/events/{event_id}/rsvp
pub async fn rsvp(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let event_id = path.into_inner();

    state
        .ledger
        .register_for_event(event_id, identity.user_id)
        .await
        .map_err(|e| match e {
            LedgerError::ParentMissing => AppError::NotFound("Event not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(Ack::ok()))
}
