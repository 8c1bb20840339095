//! currencylayer CLI
//!
//! Command-line interface for the currencylayer.com API. Responses are
//! printed as pretty JSON so they can be piped into jq.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currencylayer_client::CurrencyLayerApi;

#[derive(Parser)]
#[command(name = "currencylayer")]
#[command(author, version, about = "currencylayer.com exchange-rate CLI", long_about = None)]
struct Cli {
    /// API access key
    #[arg(long, env = "CURRENCYLAYER_ACCESS_KEY")]
    access_key: String,

    /// Use HTTPS (available for paying subscribers)
    #[arg(long)]
    secure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all supported currencies
    List,
    /// Fetch live exchange rates
    Live {
        /// Comma-separated target currency codes, e.g. "EUR,GBP,HUF"
        #[arg(long)]
        currencies: Option<String>,
        /// Source currency code (the API defaults to USD)
        #[arg(long)]
        source: Option<String>,
    },
    /// Fetch exchange rates for a past date
    Historical {
        /// Date in YYYY-MM-DD format
        date: NaiveDate,
        /// Comma-separated target currency codes, e.g. "EUR,GBP,HUF"
        #[arg(long)]
        currencies: Option<String>,
        /// Source currency code (the API defaults to USD)
        #[arg(long)]
        source: Option<String>,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Amount to convert
        amount: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,currencylayer_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let api = CurrencyLayerApi::new(cli.access_key, cli.secure);

    match cli.command {
        Commands::List => print_json(&api.list().await?),
        Commands::Live { currencies, source } => print_json(
            &api.live(currencies.as_deref(), source.as_deref())
                .await?,
        ),
        Commands::Historical {
            date,
            currencies,
            source,
        } => print_json(
            &api.historical(date, currencies.as_deref(), source.as_deref())
                .await?,
        ),
        Commands::Convert { from, to, amount } => {
            print_json(&api.convert(&from, &to, amount).await?)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
