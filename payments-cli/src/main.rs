//! Payments CLI
//!
//! Command-line interface for the Payments Gateway API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use payments_client::PaymentsClient;
use payments_types::PaymentRequest;

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payments gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// Send a JSON object to the echo endpoint
    Echo {
        /// JSON object to send, e.g. '{"hello":"world"}'
        payload: String,
    },
    /// Submit a payment
    Pay {
        /// Paying party
        #[arg(long)]
        payer: String,
        /// Receiving party
        #[arg(long)]
        payee: String,
        /// Amount as a decimal, e.g. 10.00
        #[arg(long, allow_hyphen_values = true)]
        amount: Decimal,
        /// Currency code
        #[arg(long, default_value = "USD")]
        currency: String,
    },
}

fn parse_object(raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("Echo payload must be a JSON object, got: {}", other),
    }
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

        Commands::Echo { payload } => {
            let payload = parse_object(&payload)?;
            let received = client.echo(payload).await?;
            println!("{}", serde_json::to_string_pretty(&received)?);
        }

        Commands::Pay {
            payer,
            payee,
            amount,
            currency,
        } => {
            let req = PaymentRequest::new(payer, payee, amount, currency);
            let result = client.process_payment(&req).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
