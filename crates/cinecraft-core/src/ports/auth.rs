//! Identity Gate ports: token verification and password hashing.

use uuid::Uuid;

/// Claims carried by a signed token. The token is trusted for the user id;
/// anything fresher (profile fields, flags) must be fetched explicitly.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub exp: i64,
}

/// Token service for issuing and verifying bearer credentials.
///
/// Verification is pure: no store lookup, no side effects.
pub trait TokenService: Send + Sync {
    /// Issue a signed token for a user.
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Verify and decode a token.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of freshly issued tokens, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No token provided")]
    MissingCredential,

    #[error("Invalid token")]
    InvalidCredential(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
