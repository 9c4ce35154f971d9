mod customer;
mod form;
mod invoice;

pub use customer::Customer;
pub use form::{FormData, FormState};
pub use invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice, UnknownStatus};
