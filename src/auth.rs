//! Sign-in form action.
//!
//! Session handling lives in an external provider. This module only forwards
//! the submitted credentials and turns the provider's classified failures
//! into the two messages the login form knows how to show.

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::error::{AuthError, AuthErrorKind};
use crate::models::FormData;

pub const CREDENTIALS_STRATEGY: &str = "credentials";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

/// Email and password as submitted. Never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            email: form.get("email").unwrap_or_default().to_string(),
            password: form.get("password").unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Establish a session using `strategy`.
    ///
    /// A rejected sign-in should fail with an [`AuthError`] so it can be
    /// reported to the user; any other error is passed through untouched.
    async fn sign_in(&self, strategy: &str, credentials: &Credentials) -> Result<()>;
}

impl AuthErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthErrorKind::CredentialsSignin => INVALID_CREDENTIALS,
            _ => SOMETHING_WENT_WRONG,
        }
    }
}

/// Run the credentials sign-in for a submitted login form.
///
/// Returns `Ok(None)` when the provider accepted the credentials, or the
/// message to display for a classified [`AuthError`]. Unclassified errors
/// propagate.
pub async fn authenticate(
    provider: &dyn AuthProvider,
    _prev_message: Option<&str>,
    form: &FormData,
) -> Result<Option<String>> {
    let credentials = Credentials::from_form(form);

    match provider.sign_in(CREDENTIALS_STRATEGY, &credentials).await {
        Ok(()) => Ok(None),
        Err(err) => match err.downcast_ref::<AuthError>() {
            Some(auth) => {
                warn!(kind = ?auth.kind, "sign-in rejected");
                Ok(Some(auth.kind.user_message().to_string()))
            }
            None => Err(err),
        },
    }
}
