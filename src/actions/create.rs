use tracing::{error, info, warn};

use super::{ActionOutcome, CREATE_DATABASE_ERROR, CREATE_MISSING_FIELDS, InvoiceActions};
use crate::models::{FormData, FormState, NewInvoice};
use crate::validation::{InvoiceInput, Schema};

impl InvoiceActions {
    /// Create an invoice from the submitted form.
    ///
    /// Invalid input and store failures come back as a [`FormState`] for the
    /// form to re-render. Success revalidates the list view and redirects to
    /// it. `_prev_state` is whatever the form showed last; it is not read.
    pub async fn create_invoice(&self, _prev_state: &FormState, form: &FormData) -> ActionOutcome {
        let input = match InvoiceInput::safe_parse(form) {
            Ok(input) => input,
            Err(errors) => {
                warn!(%errors, "create invoice rejected");
                return ActionOutcome::State(FormState::with_errors(errors, CREATE_MISSING_FIELDS));
            }
        };

        let invoice = NewInvoice {
            amount: input.amount_in_cents(),
            customer_id: input.customer_id,
            status: input.status,
            date: (self.today)(),
        };

        if let Err(err) = self.store.insert(&invoice).await {
            error!(error = %err, customer_id = %invoice.customer_id, "failed to create invoice");
            return ActionOutcome::State(FormState::with_message(CREATE_DATABASE_ERROR));
        }

        info!(
            customer_id = %invoice.customer_id,
            amount = invoice.amount,
            status = %invoice.status,
            date = %invoice.date,
            "invoice created"
        );
        self.revalidate_and_redirect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{fixed_today, list_view_effects, setup};
    use crate::models::InvoiceStatus;
    use crate::store::Statement;
    use crate::validation::{AMOUNT_GREATER_THAN_ZERO, CUSTOMER_REQUIRED, Field};

    fn form(customer_id: &str, amount: &str, status: &str) -> FormData {
        FormData::new()
            .with("customerId", customer_id)
            .with("amount", amount)
            .with("status", status)
    }

    #[tokio::test]
    async fn valid_form_inserts_cents_and_redirects() {
        let (actions, store, effects) = setup();
        let customer = store.add_customer("Amy Burns").unwrap();

        let outcome = actions
            .create_invoice(&FormState::default(), &form(&customer, "12.34", "pending"))
            .await;

        assert_eq!(outcome.redirect().map(|r| r.location()), Some("/dashboard/invoices"));
        let invoices = store.invoices().unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].amount, 1234);
        assert_eq!(invoices[0].customer_id, customer);
        assert_eq!(invoices[0].status, InvoiceStatus::Pending);
        assert_eq!(invoices[0].date, fixed_today());
        assert_eq!(effects.recorded(), list_view_effects());
    }

    #[tokio::test]
    async fn invalid_amount_returns_field_errors_without_a_write() {
        let (actions, store, effects) = setup();
        let customer = store.add_customer("Amy Burns").unwrap();

        for amount in ["0", "-5"] {
            let outcome = actions
                .create_invoice(&FormState::default(), &form(&customer, amount, "paid"))
                .await;

            let state = outcome.state().unwrap();
            assert_eq!(state.message.as_deref(), Some(CREATE_MISSING_FIELDS));
            assert_eq!(
                state.errors.get(Field::Amount),
                Some(&[AMOUNT_GREATER_THAN_ZERO.to_string()][..])
            );
        }

        assert!(store.statements().unwrap().is_empty());
        assert!(effects.recorded().is_empty());
    }

    #[tokio::test]
    async fn amounts_outside_the_cent_range_are_not_stored() {
        let (actions, store, effects) = setup();
        let customer = store.add_customer("Amy Burns").unwrap();

        for amount in ["0.001", "0.004", "1e17", "1e300"] {
            let outcome = actions
                .create_invoice(&FormState::default(), &form(&customer, amount, "paid"))
                .await;

            let state = outcome.state().unwrap();
            assert_eq!(
                state.errors.get(Field::Amount),
                Some(&[AMOUNT_GREATER_THAN_ZERO.to_string()][..])
            );
        }

        assert_eq!(store.invoice_count().unwrap(), 0);
        assert!(store.statements().unwrap().is_empty());
        assert!(effects.recorded().is_empty());
    }

    #[tokio::test]
    async fn missing_customer_is_reported_under_customer_id() {
        let (actions, store, _) = setup();
        let form = FormData::new().with("amount", "10").with("status", "paid");

        let outcome = actions.create_invoice(&FormState::default(), &form).await;

        let state = outcome.state().unwrap();
        assert_eq!(
            state.errors.get(Field::CustomerId),
            Some(&[CUSTOMER_REQUIRED.to_string()][..])
        );
        assert_eq!(store.invoice_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn store_failure_returns_database_message_and_skips_effects() {
        let (actions, store, effects) = setup();
        let unknown_customer = uuid::Uuid::new_v4().to_string();

        let outcome = actions
            .create_invoice(&FormState::default(), &form(&unknown_customer, "10", "paid"))
            .await;

        assert_eq!(
            outcome,
            ActionOutcome::State(FormState::with_message(CREATE_DATABASE_ERROR))
        );
        assert_eq!(store.statements().unwrap(), vec![Statement::Insert]);
        assert!(effects.recorded().is_empty());
    }

    #[tokio::test]
    async fn previous_state_does_not_leak_into_the_result() {
        let (actions, store, _) = setup();
        let customer = store.add_customer("Amy Burns").unwrap();
        let prev = FormState::with_message(CREATE_DATABASE_ERROR);

        let outcome = actions
            .create_invoice(&prev, &form(&customer, "1", "paid"))
            .await;

        assert!(outcome.redirect().is_some());
    }
}
