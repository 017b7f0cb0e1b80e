//! SeaORM entity definitions and their domain conversions.

pub mod collaboration;
pub mod collaboration_participant;
pub mod event;
pub mod event_registration;
pub mod job;
pub mod job_application;
pub mod post;
pub mod post_like;
pub mod user;
