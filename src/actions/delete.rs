use anyhow::Result;
use tracing::error;

use super::{ActionOutcome, InvoiceActions};
use crate::error::ActionError;

impl InvoiceActions {
    /// Always fails with [`ActionError::DeleteInvoice`].
    ///
    /// The store, the view cache and navigation are never touched.
    // TODO: route through `InvoiceStore::delete` once deletion is confirmed
    // as a product requirement.
    pub async fn delete_invoice(&self, id: &str) -> Result<ActionOutcome> {
        error!(invoice_id = %id, "delete invoice refused");
        Err(ActionError::DeleteInvoice { id: id.to_string() }.into())
    }
}
