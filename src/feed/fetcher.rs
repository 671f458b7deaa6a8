use crate::feed::parser::{parse_entries, Entry};
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;

const MAX_RETRIES: u32 = 2;
const MAX_FEED_SIZE: usize = 2 * 1024 * 1024; // 2MB

/// Errors that can occur while retrieving a feed.
///
/// These cover the full lifecycle of a fetch: network issues, HTTP errors,
/// and parsing failures. The loader wraps them as `LoadError::Retrieval`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Feed XML could not be parsed as RSS or Atom
    #[error("Parse error: {0}")]
    Parse(String),
    /// Response body exceeded the 2MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
}

/// Fetch one feed and parse it into entries.
///
/// The whole retrieval is bounded by `timeout`, so callers awaiting this
/// future always get an answer; there is no path that hangs. Server errors
/// (5xx) are retried with exponential backoff up to 2 retries; client
/// errors fail immediately.
pub async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<Vec<Entry>, FetchError> {
    let mut retry_count = 0;

    let bytes = loop {
        let response = tokio::time::timeout(timeout, client.get(url).send())
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(FetchError::Network)?;

        // Retry server errors (5xx) with exponential backoff
        if response.status().is_server_error() {
            if retry_count >= MAX_RETRIES {
                return Err(FetchError::HttpStatus(response.status().as_u16()));
            }

            let delay_secs = 2u64.pow(retry_count); // 2s, 4s
            tracing::warn!(
                feed = %url,
                status = %response.status(),
                retry = retry_count,
                delay_secs = delay_secs,
                "Server error, retrying after delay"
            );

            tokio::time::sleep(Duration::from_secs(delay_secs)).await;
            retry_count += 1;
            continue;
        }

        // Client errors (4xx) fail immediately
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        break read_limited_bytes(response, MAX_FEED_SIZE).await?;
    };

    parse_entries(&bytes).map_err(|e| FetchError::Parse(e.to_string()))
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
