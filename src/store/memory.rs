//! In-memory implementation of [`InvoiceStore`] for tests and offline runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use super::InvoiceStore;
use crate::error::StoreError;
use crate::models::{Customer, Invoice, InvoiceChanges, NewInvoice};

/// Write statement the store has executed, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Insert,
    Update,
    Delete,
}

#[derive(Default)]
struct Tables {
    customers: HashMap<String, Customer>,
    invoices: HashMap<String, Invoice>,
    statements: Vec<Statement>,
}

/// Mirrors the Postgres schema's checks: ids must be uuids and
/// `customer_id` must name a registered customer.
#[derive(Clone, Default)]
pub struct InMemoryInvoiceStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer and return its generated id.
    pub fn add_customer(&self, name: &str) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let mut tables = self.write()?;
        tables.customers.insert(
            id.clone(),
            Customer {
                id: id.clone(),
                name: name.to_string(),
            },
        );
        Ok(id)
    }

    pub fn invoice_count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.invoices.len())
    }

    pub fn invoices(&self) -> Result<Vec<Invoice>, StoreError> {
        Ok(self.read()?.invoices.values().cloned().collect())
    }

    /// Every write statement issued so far, in order.
    pub fn statements(&self) -> Result<Vec<Statement>, StoreError> {
        Ok(self.read()?.statements.clone())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

fn parse_uuid(value: &str) -> Result<(), StoreError> {
    Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| StoreError::InvalidInput(format!("invalid input syntax for type uuid: \"{}\"", value)))
}

fn check_customer(tables: &Tables, customer_id: &str) -> Result<(), StoreError> {
    parse_uuid(customer_id)?;
    if tables.customers.contains_key(customer_id) {
        Ok(())
    } else {
        Err(StoreError::ForeignKeyViolation(format!(
            "Key (customer_id)=({}) is not present in table \"customers\"",
            customer_id
        )))
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        tables.statements.push(Statement::Insert);
        check_customer(&tables, &invoice.customer_id)?;

        let id = Uuid::new_v4().to_string();
        tables.invoices.insert(
            id.clone(),
            Invoice {
                id,
                customer_id: invoice.customer_id.clone(),
                amount: invoice.amount,
                status: invoice.status,
                date: invoice.date,
            },
        );
        Ok(())
    }

    async fn update(&self, id: &str, changes: &InvoiceChanges) -> Result<u64, StoreError> {
        let mut tables = self.write()?;
        tables.statements.push(Statement::Update);
        parse_uuid(id)?;
        parse_uuid(&changes.customer_id)?;

        // The foreign key is only checked for rows that actually change.
        if !tables.invoices.contains_key(id) {
            return Ok(0);
        }
        check_customer(&tables, &changes.customer_id)?;

        let Some(invoice) = tables.invoices.get_mut(id) else {
            return Ok(0);
        };
        invoice.customer_id = changes.customer_id.clone();
        invoice.amount = changes.amount;
        invoice.status = changes.status;
        Ok(1)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut tables = self.write()?;
        tables.statements.push(Statement::Delete);
        parse_uuid(id)?;

        Ok(tables.invoices.remove(id).map_or(0, |_| 1))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        parse_uuid(id)?;
        Ok(self.read()?.invoices.get(id).cloned())
    }

    async fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        let mut customers: Vec<Customer> = self.read()?.customers.values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }
}
