use anyhow::{Context, Result};
use serde::Serialize;

use super::InvoiceActions;
use crate::models::{Customer, InvoiceStatus};

/// Invoice values used to prefill the edit form. `amount` is in dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceActions {
    pub async fn fetch_invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>> {
        let invoice = self
            .store
            .find_by_id(id)
            .await
            .context("Failed to fetch invoice.")?;

        Ok(invoice.map(|invoice| InvoiceForm {
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: invoice.amount as f64 / 100.0,
            status: invoice.status,
        }))
    }

    pub async fn fetch_customers(&self) -> Result<Vec<Customer>> {
        self.store
            .customers()
            .await
            .context("Failed to fetch all customers.")
    }
}
