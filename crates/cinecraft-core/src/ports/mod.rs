//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod feed;
mod ledger;
mod rate_limit;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use feed::{EventFilter, FeedQuery, JobFilter, FEED_LIMIT, LISTING_LIMIT};
pub use ledger::{LedgerError, LikeOutcome, ParticipationLedger};
pub use rate_limit::{RateDecision, RateLimiter};
pub use repository::{BaseRepository, CollaborationRepository, UserRepository};
