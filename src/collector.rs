use std::time::Duration;

use crate::data_models::BrokerRecord;
use crate::fetcher::FetchPage;

/// Drives the paginated search to completion, one page at a time.
pub struct Collector<F> {
    fetcher: F,
    page_size: u32,
    page_delay: Duration,
}

impl<F: FetchPage> Collector<F> {
    pub fn new(fetcher: F, page_size: u32, page_delay: Duration) -> Collector<F> {
        Collector {
            fetcher,
            page_size,
            page_delay,
        }
    }

    /// Fetch pages until the result set is exhausted, accumulating records
    /// in server order. A fetch error stops the run; whatever has been
    /// accumulated so far is returned either way.
    pub async fn run(&self) -> Vec<BrokerRecord> {
        let mut brokers: Vec<BrokerRecord> = Vec::new();
        let mut page: u32 = 0;
        // Unknown until the first successful page, and never re-read after
        // that; a legitimately empty result set is Some(0).
        let mut total: Option<u64> = None;

        loop {
            let offset = page * self.page_size;

            if let Some(total) = total {
                if u64::from(offset) >= total {
                    break;
                }
            }

            log::info!("fetching page {} (starting at record {offset})", page + 1);

            let fetched = match self.fetcher.fetch(offset).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    log::error!("error fetching page {}: {e}", page + 1);
                    break;
                }
            };

            if total.is_none() {
                if fetched.total == 0 {
                    log::info!("search returned 0 total results");
                    break;
                }
                log::info!("found {} total results", fetched.total);
                total = Some(fetched.total);
            }

            let returned = fetched.hits.len();
            brokers.extend(fetched.hits.into_iter().map(|hit| hit.source));

            // A short page is the authoritative end-of-data signal, whatever
            // the reported total says.
            if returned < self.page_size as usize {
                break;
            }

            page += 1;
            tokio::time::sleep(self.page_delay).await;
        }

        log::info!("finished; collected {} brokers", brokers.len());
        brokers
    }
}
