//! Typed errors raised by the invoice actions.
//!
//! Handlers return `anyhow::Result` at their boundary; the types below are
//! what ends up inside those errors, so callers can `downcast_ref` to tell a
//! rejected form apart from a broken store or a failed sign-in.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Form input failed the schema checks.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid form input: {errors}")]
pub struct ValidationError {
    pub errors: FieldErrors,
}

impl From<FieldErrors> for ValidationError {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

/// A write or read against the invoice store failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("invalid input syntax: {0}")]
    InvalidInput(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => match db.code().as_deref() {
                // foreign_key_violation
                Some("23503") => StoreError::ForeignKeyViolation(db.message().to_string()),
                // invalid_text_representation, check_violation
                Some("22P02") | Some("23514") => StoreError::InvalidInput(db.message().to_string()),
                _ => StoreError::Database(db.message().to_string()),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(err.to_string()),
            other => StoreError::Database(other.to_string()),
        }
    }
}

/// Failures raised by the action layer itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Failed to Delete Invoice")]
    DeleteInvoice { id: String },
}

/// Sub-type carried by a classified authentication failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// The provider rejected the submitted credentials.
    CredentialsSignin,
    AccessDenied,
    CallbackRouteError,
    Configuration,
    Verification,
}

/// Classified authentication failure reported by an auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("authentication failed: {kind:?}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind) -> Self {
        Self { kind }
    }
}
