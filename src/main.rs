use checkout_pricing::application::checkout::Checkout;
use checkout_pricing::domain::payment::Customer;
use checkout_pricing::domain::ports::{PointWalletBox, ProductSourceBox};
use checkout_pricing::infrastructure::in_memory::{InMemoryPointWallet, InMemoryProductSource};
use checkout_pricing::infrastructure::json_file::JsonFileProductSource;
use checkout_pricing::interfaces::csv::action_reader::ActionReader;
use checkout_pricing::interfaces::csv::summary_writer::SummaryWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pricing actions CSV file (`action,value` rows)
    input: PathBuf,

    /// Product JSON file. Defaults to the built-in mock product.
    #[arg(long)]
    product: Option<PathBuf>,

    /// Points held in the customer's wallet
    #[arg(long, default_value_t = 2_000)]
    wallet_points: u64,

    /// Print the payment widget request after the summary
    #[arg(long)]
    payment_request: bool,

    /// Origin used to build the payment success/fail URLs
    #[arg(long, default_value = "http://localhost:3000")]
    origin: String,

    /// Customer name sent with the payment request
    #[arg(long, default_value = "customer")]
    customer_name: String,

    /// Customer email sent with the payment request
    #[arg(long, default_value = "customer@example.com")]
    customer_email: String,

    /// Customer mobile phone sent with the payment request
    #[arg(long, default_value = "01000000000")]
    customer_phone: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let products: ProductSourceBox = match &cli.product {
        Some(path) => Box::new(JsonFileProductSource::new(path)),
        None => Box::new(InMemoryProductSource::new()),
    };
    let wallet: PointWalletBox = Box::new(InMemoryPointWallet::with_balance(cli.wallet_points));

    let mut checkout = Checkout::new();
    checkout
        .load(products.as_ref(), wallet.as_ref())
        .await
        .into_diagnostic()
        .wrap_err("Failed to load order")?;

    // Apply pricing actions in order
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    for action_result in reader.actions() {
        match action_result {
            Ok(action) => {
                if let Err(e) = checkout.apply(&action) {
                    eprintln!("Error applying action: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading action: {}", e);
            }
        }
    }

    let summary = checkout.summary().into_diagnostic()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    SummaryWriter::new(&mut out)
        .write_summary(&summary)
        .into_diagnostic()?;

    if cli.payment_request {
        let customer = Customer {
            name: cli.customer_name,
            email: cli.customer_email,
            mobile_phone: cli.customer_phone,
        };
        let request = checkout
            .payment_request(&customer, &cli.origin)
            .into_diagnostic()?;
        serde_json::to_writer(&mut out, &request).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    }

    Ok(())
}
