use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::error::StoreError;
use crate::models::{Customer, Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
use crate::store::InvoiceStore;

/// Database connection pool
pub struct Database {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct InvoiceRow {
    id: String,
    customer_id: String,
    amount: i64,
    status: String,
    date: NaiveDate,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = StoreError;

    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        let status: InvoiceStatus = row
            .status
            .parse()
            .map_err(|e: crate::models::UnknownStatus| StoreError::InvalidInput(e.to_string()))?;

        Ok(Self {
            id: row.id,
            customer_id: row.customer_id,
            amount: row.amount,
            status,
            date: row.date,
        })
    }
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(config.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}

// Ids are bound as text and cast to uuid in SQL.
#[async_trait]
impl InvoiceStore for Database {
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            VALUES ($1::uuid, $2, $3, $4)
            "#,
        )
        .bind(&invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(self.get_pool())
        .await?;

        Ok(())
    }

    async fn update(&self, id: &str, changes: &InvoiceChanges) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = $1::uuid, amount = $2, status = $3
            WHERE id = $4::uuid
            "#,
        )
        .bind(&changes.customer_id)
        .bind(changes.amount)
        .bind(changes.status.as_str())
        .bind(id)
        .execute(self.get_pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
            .bind(id)
            .execute(self.get_pool())
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT
                id::text AS id,
                customer_id::text AS customer_id,
                amount::int8 AS amount,
                status,
                date
            FROM invoices
            WHERE id = $1::uuid
            "#,
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        row.map(Invoice::try_from).transpose()
    }

    async fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id::text AS id, name FROM customers ORDER BY name ASC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(customers)
    }
}

/// Initialize the database connection pool
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;

    Ok(db)
}
