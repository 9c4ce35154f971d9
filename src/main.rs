use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use invoice_actions::models::{FormData, FormState};
use invoice_actions::{ActionOutcome, InvoiceActions, LogEffects, config, db};

/// Run the invoice form actions against the configured database
#[derive(Parser)]
#[command(name = "invoice-actions", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an invoice dated today
    Create(InvoiceFields),
    /// Update customer, amount and status of an invoice
    Update {
        id: String,
        #[command(flatten)]
        fields: InvoiceFields,
    },
    /// Delete an invoice
    Delete { id: String },
    /// Show an invoice as the edit form would see it
    Show { id: String },
    /// List customers
    Customers,
}

// Raw strings on purpose: coercion and checks belong to the form schema.
#[derive(Args)]
struct InvoiceFields {
    #[arg(long)]
    customer_id: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,
    #[arg(long)]
    status: Option<String>,
}

impl InvoiceFields {
    fn into_form(self) -> FormData {
        let mut form = FormData::new();
        if let Some(customer_id) = self.customer_id {
            form.insert("customerId", customer_id);
        }
        if let Some(amount) = self.amount {
            form.insert("amount", amount);
        }
        if let Some(status) = self.status {
            form.insert("status", status);
        }
        form
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = config::init()?;

    // Initialize database connection
    let db = db::init(&config).await?;

    let actions = InvoiceActions::new(Arc::new(db), Arc::new(LogEffects))
        .with_invoices_path(config.invoices_path.clone());

    match cli.command {
        Command::Create(fields) => {
            let outcome = actions
                .create_invoice(&FormState::default(), &fields.into_form())
                .await;
            print_outcome(&outcome)?;
        }
        Command::Update { id, fields } => {
            let outcome = actions.update_invoice(&id, &fields.into_form()).await?;
            print_outcome(&outcome)?;
        }
        Command::Delete { id } => {
            let outcome = actions.delete_invoice(&id).await?;
            print_outcome(&outcome)?;
        }
        Command::Show { id } => match actions.fetch_invoice_by_id(&id).await? {
            Some(invoice) => println!("{}", serde_json::to_string_pretty(&invoice)?),
            None => println!("Invoice {} not found", id),
        },
        Command::Customers => {
            let customers = actions.fetch_customers().await?;
            println!("{}", serde_json::to_string_pretty(&customers)?);
        }
    }

    Ok(())
}

fn print_outcome(outcome: &ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Redirect(redirect) => println!("Redirect to {}", redirect.location()),
        ActionOutcome::State(state) => println!("{}", serde_json::to_string_pretty(state)?),
    }

    Ok(())
}
