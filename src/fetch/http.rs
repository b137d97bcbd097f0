// src/fetch/http.rs
// =============================================================================
// This module downloads an HTML page over HTTP.
//
// Key functionality:
// - Makes a GET request and returns the full response body
// - Retries transient failures (timeouts, refused connections, 5xx, 429)
//   a bounded number of times, waiting a fixed delay between attempts
// - Gives up straight away on failures a retry cannot fix (404, bad TLS, ...)
//
// Rust concepts:
// - async/await: The request and the retry delay are both awaited
// - Result<T, E>: Every failure ends up as GraderError::Download
// =============================================================================

use crate::error::{GraderError, GraderResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// How many times to try a download and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero is treated as one.
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    /// A single attempt, no retries.
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(5))
    }
}

/// Settings for a download: retry policy plus the per-request timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOptions {
    pub retry: RetryPolicy,
    pub timeout: Duration,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(10),
        }
    }
}

// Why one attempt failed, and whether trying again could help
#[derive(Debug)]
struct Failure {
    reason: String,
    retryable: bool,
}

// Downloads a page and returns its body
//
// Parameters:
//   url: the page to fetch
//   options: retry policy and request timeout
//
// Returns: the complete body on the first successful attempt, or
//          GraderError::Download once retries are used up
pub async fn download(url: &Url, options: &DownloadOptions) -> GraderResult<String> {
    let client = Client::builder()
        .timeout(options.timeout)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| GraderError::Download {
            url: url.to_string(),
            attempts: 0,
            reason: format!("could not create HTTP client: {e}"),
        })?;

    let max_attempts = options.retry.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        tracing::debug!(%url, attempt, max_attempts, "downloading");

        match fetch_once(&client, url).await {
            Ok(body) => {
                tracing::info!(%url, bytes = body.len(), attempt, "downloaded");
                return Ok(body);
            }
            Err(failure) if failure.retryable && attempt < max_attempts => {
                tracing::warn!(
                    %url,
                    attempt,
                    reason = %failure.reason,
                    "download failed, retrying in {:?}",
                    options.retry.backoff
                );
                tokio::time::sleep(options.retry.backoff).await;
            }
            Err(failure) => {
                return Err(GraderError::Download {
                    url: url.to_string(),
                    attempts: attempt,
                    reason: failure.reason,
                });
            }
        }
    }
}

// Makes a single GET request
async fn fetch_once(client: &Client, url: &Url) -> Result<String, Failure> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(categorize_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Failure {
            reason: format!("HTTP {}", status.as_u16()),
            retryable: is_retryable_status(status),
        });
    }

    response.text().await.map_err(categorize_error)
}

// Server-side trouble may go away on its own; client errors will not
fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

// Turns a reqwest error into a readable reason
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
fn categorize_error(error: reqwest::Error) -> Failure {
    let error_string = error.to_string();

    let (reason, retryable) = if error.is_timeout() {
        ("Request timed out".to_string(), true)
    } else if error.is_redirect() {
        ("Too many redirects".to_string(), false)
    } else if error.is_connect() {
        if error_string.contains("dns") {
            ("Could not resolve hostname".to_string(), true)
        } else {
            ("Connection failed".to_string(), true)
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        ("SSL certificate error".to_string(), false)
    } else if error.is_builder() {
        (error_string, false)
    } else {
        (error_string, true)
    };

    Failure { reason, retryable }
}
