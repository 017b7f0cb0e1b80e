//! # CineCraft Infrastructure
//!
//! Concrete implementations of the ports defined in `cinecraft-core`:
//! SeaORM/Postgres persistence (entity store, participation ledger, feed
//! queries), JWT tokens, Argon2 password hashing, and the in-memory rate
//! limiter.

pub mod auth;
pub mod database;
pub mod rate_limit;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, init_pool};
pub use rate_limit::{KeyedRateLimiter, RateLimitConfig};

/// The pooled connection handle adapters are built around, re-exported so
/// downstream crates don't need a direct SeaORM dependency for wiring.
pub use sea_orm::DbConn;
