use clap::Parser;

use dragnet::collector::Collector;
use dragnet::config::Config;
use dragnet::exporter;
use dragnet::fetcher::BrokerCheckFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    dotenvy::dotenv().ok();
    let config = Config::parse();

    log::info!("starting scrape...");

    let fetcher = BrokerCheckFetcher::new(&config)?;
    let collector = Collector::new(fetcher, config.page_size, config.page_delay());
    let brokers = collector.run().await;

    // A failed write is logged; the other writer still runs.
    if let Err(e) = exporter::save_to_json(&brokers, &config.json_out) {
        log::error!("error writing {}: {:#}", config.json_out.display(), e);
    }
    if let Err(e) = exporter::save_to_csv(&brokers, &config.csv_out) {
        log::error!("error writing {}: {:#}", config.csv_out.display(), e);
    }

    Ok(())
}
