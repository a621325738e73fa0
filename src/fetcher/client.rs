use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "JaundiceBot/0.1 (+https://github.com/jaundice-rate)";

/// Fetch budget used when the caller does not supply one.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Builds the HTTP client shared by every worker of a batch.
pub fn build_client() -> Result<Client, FetchError> {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                reqwest::header::HeaderValue::from_static(
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                ),
            );
            headers
        })
        .build()
        .map_err(FetchError::from_reqwest_error)
}

/// Article downloader on top of a pooled `reqwest::Client`.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GETs `url` and decodes the body to UTF-8.
    ///
    /// `timeout` bounds the whole exchange, headers and body included.
    /// Expiry cancels only this request; the pool is left intact.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str, timeout: Duration) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;

        match tokio::time::timeout(timeout, self.download(parsed_url)).await {
            Ok(result) => result,
            Err(_) => {
                debug!(?timeout, "fetch deadline elapsed");
                Err(FetchError::RequestTimeout)
            }
        }
    }

    async fn download(&self, url: url::Url) -> Result<PageResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        let body_bytes = response
            .bytes()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Content-Length may be missing or wrong
        if body_bytes.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
        }

        Ok(process_response(final_url, status, &body_bytes, &content_type))
    }
}
