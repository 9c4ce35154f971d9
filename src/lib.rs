//! Server-side form actions for invoices.
//!
//! Each action validates a submitted form, performs one write against an
//! [`store::InvoiceStore`], then revalidates the invoice list view and
//! redirects to it through [`effects::ViewEffects`].

pub mod actions;
pub mod auth;
pub mod config;
pub mod db;
pub mod effects;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use actions::{ActionOutcome, InvoiceActions};
pub use auth::{AuthProvider, Credentials, authenticate};
pub use effects::{LogEffects, Redirect, ViewEffects};
pub use error::{ActionError, AuthError, AuthErrorKind, StoreError, ValidationError};
pub use models::{FormData, FormState};
pub use store::{InMemoryInvoiceStore, InvoiceStore};
