//! Form actions for invoices: validate, write, revalidate, redirect.

mod create;
mod delete;
mod fetch;
mod update;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::effects::{Redirect, ViewEffects};
use crate::models::FormState;
use crate::store::InvoiceStore;

pub use fetch::InvoiceForm;

pub const CREATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Create Invoice.";
pub const CREATE_DATABASE_ERROR: &str = "Database Error: Failed to Create Invoice.";
pub const UPDATE_DATABASE_ERROR_PREFIX: &str = "dataBaseError";

/// What the form should do once an action returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionOutcome {
    /// The write succeeded and the list view was revalidated.
    Redirect(Redirect),
    /// Stay on the form and show this state.
    State(FormState),
}

impl ActionOutcome {
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            ActionOutcome::Redirect(redirect) => Some(redirect),
            ActionOutcome::State(_) => None,
        }
    }

    pub fn state(&self) -> Option<&FormState> {
        match self {
            ActionOutcome::State(state) => Some(state),
            ActionOutcome::Redirect(_) => None,
        }
    }
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Invoice actions bound to a store and the host's view effects.
#[derive(Clone)]
pub struct InvoiceActions {
    store: Arc<dyn InvoiceStore>,
    effects: Arc<dyn ViewEffects>,
    invoices_path: String,
    today: fn() -> NaiveDate,
}

impl InvoiceActions {
    pub fn new(store: Arc<dyn InvoiceStore>, effects: Arc<dyn ViewEffects>) -> Self {
        Self {
            store,
            effects,
            invoices_path: "/dashboard/invoices".to_string(),
            today: utc_today,
        }
    }

    pub fn with_invoices_path(mut self, path: impl Into<String>) -> Self {
        self.invoices_path = path.into();
        self
    }

    /// Replace the clock used to stamp new invoices.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn revalidate_and_redirect(&self) -> ActionOutcome {
        self.effects.revalidate_path(&self.invoices_path);
        ActionOutcome::Redirect(self.effects.redirect(&self.invoices_path))
    }
}
