//! Write access to the invoices table.
//!
//! Handlers receive an [`InvoiceStore`] instead of reaching for a global
//! client, so the Postgres pool in [`crate::db`] and the in-memory store
//! here are interchangeable.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Customer, Invoice, InvoiceChanges, NewInvoice};

pub use memory::{InMemoryInvoiceStore, Statement};

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// `INSERT INTO invoices (customer_id, amount, status, date)`.
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), StoreError>;

    /// `UPDATE invoices ... WHERE id = $id`. Returns the number of rows
    /// touched, which is zero for an unknown id.
    async fn update(&self, id: &str, changes: &InvoiceChanges) -> Result<u64, StoreError>;

    /// `DELETE FROM invoices WHERE id = $id`.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>, StoreError>;

    /// Customers ordered by name.
    async fn customers(&self) -> Result<Vec<Customer>, StoreError>;
}
