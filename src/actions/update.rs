use anyhow::Result;
use tracing::{error, info};

use super::{ActionOutcome, InvoiceActions, UPDATE_DATABASE_ERROR_PREFIX};
use crate::models::{FormData, FormState, InvoiceChanges};
use crate::validation::{Schema, UpdateInvoiceInput};

impl InvoiceActions {
    /// Rewrite customer, amount and status of invoice `id`.
    ///
    /// Unlike [`InvoiceActions::create_invoice`], a form that fails
    /// validation is an error: the returned `anyhow::Error` wraps a
    /// [`crate::error::ValidationError`]. Store failures come back as a
    /// [`FormState`] message. The row is not looked up first, so an unknown
    /// id updates nothing and still redirects.
    pub async fn update_invoice(&self, id: &str, form: &FormData) -> Result<ActionOutcome> {
        let form = form.clone().with("id", id);
        let UpdateInvoiceInput { id, fields } = UpdateInvoiceInput::parse(&form)?;

        let changes = InvoiceChanges {
            amount: fields.amount_in_cents(),
            customer_id: fields.customer_id,
            status: fields.status,
        };

        let rows = match self.store.update(&id, &changes).await {
            Ok(rows) => rows,
            Err(err) => {
                error!(error = %err, invoice_id = %id, "failed to update invoice");
                return Ok(ActionOutcome::State(FormState::with_message(format!(
                    "{}: {}",
                    UPDATE_DATABASE_ERROR_PREFIX, err
                ))));
            }
        };

        info!(
            invoice_id = %id,
            rows,
            amount = changes.amount,
            status = %changes.status,
            "invoice updated"
        );
        Ok(self.revalidate_and_redirect())
    }
}
