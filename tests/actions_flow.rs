//! End-to-end runs of the invoice actions against the in-memory store.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use invoice_actions::models::{FormData, FormState, InvoiceStatus};
use invoice_actions::store::Statement;
use invoice_actions::validation::Field;
use invoice_actions::{
    ActionError, ActionOutcome, InMemoryInvoiceStore, InvoiceActions, Redirect, ValidationError,
    ViewEffects,
};

#[derive(Default)]
struct Recorder {
    revalidated: Mutex<Vec<String>>,
    redirects: Mutex<Vec<String>>,
}

impl ViewEffects for Recorder {
    fn revalidate_path(&self, path: &str) {
        self.revalidated.lock().unwrap().push(path.to_string());
    }

    fn redirect(&self, path: &str) -> Redirect {
        self.redirects.lock().unwrap().push(path.to_string());
        Redirect::to(path)
    }
}

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn setup(path: &str) -> (InvoiceActions, InMemoryInvoiceStore, Arc<Recorder>) {
    let store = InMemoryInvoiceStore::new();
    let recorder = Arc::new(Recorder::default());
    let actions = InvoiceActions::new(Arc::new(store.clone()), recorder.clone())
        .with_invoices_path(path)
        .with_clock(march_first);
    (actions, store, recorder)
}

fn invoice_form(customer_id: &str, amount: &str, status: &str) -> FormData {
    [
        ("customerId", customer_id),
        ("amount", amount),
        ("status", status),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn create_edit_then_refuse_delete() {
    let (actions, store, recorder) = setup("/billing/invoices");
    let customer = store.add_customer("Hector Simpson").unwrap();
    let other = store.add_customer("Jared Palmer").unwrap();

    let created = actions
        .create_invoice(&FormState::default(), &invoice_form(&customer, "250.5", "pending"))
        .await;
    assert_eq!(created, ActionOutcome::Redirect(Redirect::to("/billing/invoices")));

    let invoice = store.invoices().unwrap().remove(0);
    assert_eq!(invoice.amount, 25050);
    assert_eq!(invoice.date, march_first());

    let updated = actions
        .update_invoice(&invoice.id, &invoice_form(&other, "300", "paid"))
        .await
        .unwrap();
    assert!(updated.redirect().is_some());

    let form = actions.fetch_invoice_by_id(&invoice.id).await.unwrap().unwrap();
    assert_eq!(form.customer_id, other);
    assert_eq!(form.amount, 300.0);
    assert_eq!(form.status, InvoiceStatus::Paid);

    let err = actions.delete_invoice(&invoice.id).await.unwrap_err();
    assert!(err.downcast_ref::<ActionError>().is_some());
    assert_eq!(store.invoice_count().unwrap(), 1);
    assert_eq!(
        store.statements().unwrap(),
        vec![Statement::Insert, Statement::Update]
    );

    assert_eq!(
        *recorder.revalidated.lock().unwrap(),
        vec!["/billing/invoices", "/billing/invoices"]
    );
    assert_eq!(recorder.redirects.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn create_reports_every_bad_field() {
    let (actions, store, recorder) = setup("/dashboard/invoices");

    let outcome = actions
        .create_invoice(&FormState::default(), &invoice_form("", "abc", "late"))
        .await;

    let state = outcome.state().unwrap();
    let fields: Vec<Field> = state.errors.fields().collect();
    assert_eq!(fields, vec![Field::CustomerId, Field::Amount, Field::Status]);
    assert_eq!(
        serde_json::to_value(state).unwrap(),
        serde_json::json!({
            "errors": {
                "customerId": ["please select a customer"],
                "amount": ["please enter an amount greater than $0."],
                "status": ["Please select an invoice status"]
            },
            "message": "Missing Fields. Failed to Create Invoice."
        })
    );
    assert_eq!(store.invoice_count().unwrap(), 0);
    assert!(recorder.revalidated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn update_with_bad_form_propagates_validation_error() {
    let (actions, store, _) = setup("/dashboard/invoices");
    let customer = store.add_customer("Hector Simpson").unwrap();

    let err = actions
        .update_invoice("", &invoice_form(&customer, "10", "paid"))
        .await
        .unwrap_err();

    let validation = err.downcast_ref::<ValidationError>().unwrap();
    assert!(validation.errors.contains(Field::Id));
    assert!(store.statements().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_creates_store_the_same_cents() {
    let (actions, store, _) = setup("/dashboard/invoices");
    let customer = store.add_customer("Hector Simpson").unwrap();

    for _ in 0..20 {
        actions
            .create_invoice(&FormState::default(), &invoice_form(&customer, "12.34", "paid"))
            .await;
    }

    let invoices = store.invoices().unwrap();
    assert_eq!(invoices.len(), 20);
    assert!(invoices.iter().all(|invoice| invoice.amount == 1234));
}
