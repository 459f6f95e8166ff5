use reqwest::StatusCode;
use reqwest::header;
use thiserror::Error;

use crate::config::{API_URL, Config, REQUEST_TIMEOUT, USER_AGENT};
use crate::data_models::{SearchPage, SearchResponse};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("bad status code: {status} for URL: {url}. body: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("error decoding response: {source}. body: {body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },
}

/// Fetch one page of search results by offset. The pagination loop only
/// talks to this trait, so tests can drive it with canned pages.
pub trait FetchPage {
    async fn fetch(&self, offset: u32) -> Result<SearchPage, FetchError>;
}

/// Fetcher against the live BrokerCheck search API. Holds one long-lived
/// client so every page rides the same connection pool.
pub struct BrokerCheckFetcher {
    client: reqwest::Client,
    latitude: String,
    longitude: String,
    radius: String,
    page_size: u32,
}

impl BrokerCheckFetcher {
    pub fn new(config: &Config) -> Result<BrokerCheckFetcher, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(BrokerCheckFetcher {
            client,
            latitude: config.latitude.clone(),
            longitude: config.longitude.clone(),
            radius: config.radius.clone(),
            page_size: config.page_size,
        })
    }

    fn query_params(&self, offset: u32) -> Vec<(&'static str, String)> {
        vec![
            ("lat", self.latitude.clone()),
            ("lon", self.longitude.clone()),
            ("includePrevious", "true".to_string()),
            ("hl", "true".to_string()),
            ("nrows", self.page_size.to_string()),
            ("start", offset.to_string()),
            ("r", self.radius.clone()),
            ("sort", "score desc".to_string()),
            ("wt", "json".to_string()),
        ]
    }
}

impl FetchPage for BrokerCheckFetcher {
    async fn fetch(&self, offset: u32) -> Result<SearchPage, FetchError> {
        let response = self
            .client
            .get(API_URL)
            .query(&self.query_params(offset))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(FetchError::Status { status, url, body });
        }

        let decoded: SearchResponse =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode { source, body })?;

        Ok(decoded.hits)
    }
}

#[test]
fn test_query_params() {
    use clap::Parser;

    let config = Config::parse_from(["dragnet"]);
    let fetcher = BrokerCheckFetcher::new(&config).unwrap();

    let params = fetcher.query_params(200);
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    };

    assert_eq!(get("lat"), "38.895568");
    assert_eq!(get("lon"), "-77.026278");
    assert_eq!(get("nrows"), "100");
    assert_eq!(get("start"), "200");
    assert_eq!(get("r"), "25");
    assert_eq!(get("includePrevious"), "true");
    assert_eq!(get("hl"), "true");
    assert_eq!(get("sort"), "score desc");
    assert_eq!(get("wt"), "json");
}
