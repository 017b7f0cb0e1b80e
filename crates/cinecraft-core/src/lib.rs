//! # CineCraft Core
//!
//! The domain layer of the CineCraft Connect backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validate;

pub use error::{FieldError, RepoError};
