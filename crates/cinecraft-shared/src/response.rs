//! Response envelopes.
//!
//! Every failure, regardless of endpoint, is `{"success": false, "error":
//! "<message>"}` with a status from {400, 401, 404, 429, 500}. Success
//! bodies carry `"success": true` plus endpoint-specific fields.

use serde::{Deserialize, Serialize};

/// The uniform error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Bare `{"success": true}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
