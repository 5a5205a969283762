//! Page transport.
//!
//! The scraper only needs "give me the body at this URL". [`PageFetcher`]
//! is that seam; [`HttpFetcher`] is the real implementation over `reqwest`.
//! No retries or backoff happen here: a failed request is reported once and
//! the caller decides what to skip.

use crate::error::{ArchiveError, Result};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

/// Something that can fetch the raw markup of a page.
pub trait PageFetcher {
    /// Fetch `url` and return its body as text.
    ///
    /// The response status is not inspected: an error page body is returned
    /// like any other. Only transport failures are errors.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// [`PageFetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher around a fresh `reqwest::Client`.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Upper bound for each request; `None` keeps the client default
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Client`] if the TLS backend or client cannot be
    /// initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch(&self, url: &Url) -> Result<String> {
        let t0 = Instant::now();
        let res = match self.client.get(url.clone()).send().await {
            Ok(resp) => resp.text().await,
            Err(e) => Err(e),
        };
        let dt = t0.elapsed();

        match res {
            Ok(body) => {
                debug!(bytes = body.len(), elapsed_ms = dt.as_millis() as u64, "Fetched page");
                Ok(body)
            }
            Err(e) => {
                warn!(elapsed_ms = dt.as_millis() as u64, error = %e, "Fetch failed");
                Err(ArchiveError::Fetch {
                    url: url.to_string(),
                    source: Box::new(e),
                })
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeFetcher;
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fetch_future_can_be_spawned() {
        let fetcher = Arc::new(FakeFetcher::default().with_page("http://awards.test/a", "<p>ok</p>"));
        let url = Url::parse("http://awards.test/a").unwrap();

        let handle = tokio::spawn({
            let fetcher = Arc::clone(&fetcher);
            async move { fetcher.fetch(&url).await }
        });

        assert_eq!(handle.await.unwrap().unwrap(), "<p>ok</p>");
        assert_eq!(fetcher.requests(), vec!["http://awards.test/a"]);
    }

    #[test]
    fn test_http_fetcher_builds_with_timeout() {
        assert!(HttpFetcher::new(Some(Duration::from_secs(5))).is_ok());
    }
}
