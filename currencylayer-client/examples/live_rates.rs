//! Fetches live exchange rates against the real API.
//!
//! Run with: CURRENCYLAYER_ACCESS_KEY=... cargo run -p currencylayer-client --example live_rates

use currencylayer_client::CurrencyLayerApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let access_key = std::env::var("CURRENCYLAYER_ACCESS_KEY")?;
    let api = CurrencyLayerApi::new(access_key, false);

    let response = api.live(Some("EUR,GBP,HUF"), None).await?;
    println!("source: {}", response.source.as_deref().unwrap_or("USD"));
    for (pair, rate) in &response.quotes {
        println!("{pair}: {rate}");
    }

    let converted = api.convert("USD", "HUF", 10.0).await?;
    println!(
        "10 USD = {} HUF (quote {})",
        converted.result, converted.info.quote
    );

    Ok(())
}
