//! Shared HTTP client construction. One client with browser-like default
//! headers is built at startup and handed to the fetchers; per-request
//! timeouts are set by each fetcher.

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

    Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build shared HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_default_headers() {
        assert!(build_client().is_ok());
    }
}
