//! Source fetchers. Each submodule produces one semantic record and converts
//! every failure into a pre-defined fallback at its own boundary; nothing in
//! here surfaces an error to the orchestrator.

use thiserror::Error;

pub mod currency;
pub mod destination;
pub mod weather;

/// Recoverable fetch failures. Always caught at the fetcher boundary and
/// replaced by the fallback record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse response from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("no qualifying content extracted from {url}")]
    NoContent { url: String },
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary; slicing mid-character would panic.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 100 three-byte chars put the byte cap mid-character.
        let euros = "€".repeat(100);
        let truncated = truncate_body(&euros);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().all(|c| c == '€' || c == '.'));
        assert!(truncated.len() <= 203);

        // Two-byte chars straddle the cap as well when offset by one.
        let mixed = format!("x{}", "ş".repeat(150));
        let truncated = truncate_body(&mixed);
        assert!(truncated.ends_with("..."));
    }
}
