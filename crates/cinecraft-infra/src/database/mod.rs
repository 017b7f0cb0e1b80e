//! SeaORM persistence adapters: entity store, participation ledger, and the
//! feed/listing query layer.

mod connections;
pub mod entity;
mod ledger;
mod postgres_base;
mod postgres_repo;
mod query;

pub use connections::{DatabaseConfig, init_pool};
pub use ledger::PostgresParticipationLedger;
pub use postgres_base::PostgresBaseRepository;
pub use postgres_repo::{
    PostgresCollaborationRepository, PostgresEventRepository, PostgresJobRepository,
    PostgresPostRepository, PostgresUserRepository,
};
pub use query::PostgresFeedQuery;

#[cfg(test)]
mod tests;
