//! Form schemas for the invoice actions.
//!
//! Every schema reports through one result-returning entry point,
//! [`Schema::safe_parse`]. [`Schema::parse`] is the same check wrapped in a
//! [`ValidationError`] for callers that treat a bad form as fatal.

mod errors;
pub mod rules;

pub use errors::{Field, FieldErrors};

use crate::error::ValidationError;
use crate::models::{FormData, InvoiceStatus};

pub const CUSTOMER_REQUIRED: &str = "please select a customer";
pub const AMOUNT_GREATER_THAN_ZERO: &str = "please enter an amount greater than $0.";
pub const STATUS_REQUIRED: &str = "Please select an invoice status";
pub const INVOICE_ID_REQUIRED: &str = "Missing invoice id.";

/// Largest amount, in cents, the `invoices.amount` INT column holds.
pub const MAX_AMOUNT_CENTS: i64 = i32::MAX as i64;

pub trait Schema: Sized {
    /// Coerce and check `form`, collecting every failing field.
    fn safe_parse(form: &FormData) -> Result<Self, FieldErrors>;

    fn parse(form: &FormData) -> Result<Self, ValidationError> {
        Self::safe_parse(form).map_err(ValidationError::from)
    }
}

/// The mutable invoice fields after coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub customer_id: String,
    /// Dollars, strictly positive and finite.
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceInput {
    /// Always within `1..=MAX_AMOUNT_CENTS` for input built by `safe_parse`.
    pub fn amount_in_cents(&self) -> i64 {
        rules::to_cents(self.amount)
    }
}

impl Schema for InvoiceInput {
    fn safe_parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = errors.check(
            Field::CustomerId,
            rules::required_text(form.get(Field::CustomerId.as_str()), CUSTOMER_REQUIRED),
        );
        let amount = errors.check(
            Field::Amount,
            rules::coerce_number(form.get(Field::Amount.as_str()), AMOUNT_GREATER_THAN_ZERO)
                .and_then(|amount| rules::greater_than(amount, 0.0, AMOUNT_GREATER_THAN_ZERO))
                .and_then(|amount| {
                    rules::cents_within(amount, 1, MAX_AMOUNT_CENTS, AMOUNT_GREATER_THAN_ZERO)
                }),
        );
        let status = errors.check(
            Field::Status,
            rules::one_of::<InvoiceStatus>(form.get(Field::Status.as_str()), STATUS_REQUIRED),
        );

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) if errors.is_empty() => Ok(Self {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Update form: the invoice fields plus the id of the row being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInvoiceInput {
    pub id: String,
    pub fields: InvoiceInput,
}

impl Schema for UpdateInvoiceInput {
    fn safe_parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let id = errors.check(
            Field::Id,
            rules::required_text(form.get(Field::Id.as_str()), INVOICE_ID_REQUIRED),
        );

        match (id, InvoiceInput::safe_parse(form)) {
            (Some(id), Ok(fields)) => Ok(Self { id, fields }),
            (_, Err(field_errors)) => {
                errors.merge(field_errors);
                Err(errors)
            }
            (None, Ok(_)) => Err(errors),
        }
    }
}
