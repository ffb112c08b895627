//! Payments CLI
//!
//! Command-line interface for the payment gateway API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use payments_client::PaymentsClient;
use payments_types::PaymentRequest;

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the payment gateway
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a card payment
    Process {
        /// 16-digit card number
        #[arg(long)]
        card_number: String,
        /// Expiry year, e.g. 2030
        #[arg(long)]
        expiry_year: u32,
        /// Expiry month, 1-12
        #[arg(long)]
        expiry_month: u32,
        /// 3-digit CVV
        #[arg(long)]
        cvv: String,
        /// Amount with up to two decimal places, e.g. 10.05
        #[arg(long)]
        amount: Decimal,
        /// Currency (EUR, GBP)
        #[arg(long, default_value = "GBP")]
        currency: String,
    },
    /// Get a processed payment
    Get {
        /// Payment ID returned by `process`
        id: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Process {
            card_number,
            expiry_year,
            expiry_month,
            cvv,
            amount,
            currency,
        } => {
            let req = PaymentRequest {
                card_number,
                expiry_year,
                expiry_month,
                cvv,
                amount: amount.into(),
                currency,
            };
            let payment = client.process_payment(&req).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Get { id } => {
            let payment = client.get_payment(&id).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }
    }

    Ok(())
}
