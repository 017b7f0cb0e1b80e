//! # CineCraft Shared
//!
//! Wire types shared between the backend and its clients: request bodies,
//! response envelopes, and query-string shapes.

pub mod dto;
pub mod response;

pub use response::{Ack, ErrorBody};
