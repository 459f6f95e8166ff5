use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// BrokerCheck individual search endpoint. Found by inspecting the
/// Fetch/XHR traffic of the BrokerCheck website.
pub const API_URL: &str = "https://api.brokercheck.finra.org/search/individual";

// The API answers browser-looking clients most reliably, so send a browser
// User-Agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout enforced by the HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser, Debug, Clone)]
#[command(name = "dragnet", version, about = "Pull every BrokerCheck record around a point into JSON and CSV")]
pub struct Config {
    /// Latitude of the search center, fixed-precision decimal string
    #[arg(long, env = "DRAGNET_LAT", default_value = "38.895568")]
    pub latitude: String,

    /// Longitude of the search center, fixed-precision decimal string
    #[arg(long, env = "DRAGNET_LON", default_value = "-77.026278")]
    pub longitude: String,

    /// Search radius in miles
    #[arg(long, env = "DRAGNET_RADIUS", default_value = "25")]
    pub radius: String,

    /// Records per page (the API caps this at 100)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,

    /// Pause between page fetches, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub page_delay_ms: u64,

    /// Path for the structured JSON output
    #[arg(long, default_value = "brokers.json")]
    pub json_out: PathBuf,

    /// Path for the flattened CSV output
    #[arg(long, default_value = "brokers.csv")]
    pub csv_out: PathBuf,
}

impl Config {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}
