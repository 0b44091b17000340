use chrono::Utc;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

use crate::fetch::{FetchError, truncate_body};
use crate::knowledge;
use crate::model::{DestinationInfo, Fetched};

pub const DESTINATION_URL: &str = "https://www.lonelyplanet.com/turkey";

const TIMEOUT: Duration = Duration::from_secs(15);

/// Keyword set for the best-effort highlight scan.
const KEYWORDS: &[&str] = &["highlight", "attraction", "must see", "best", "top"];

/// Trimmed length bounds (exclusive) and cap for kept highlights.
const MIN_CHARS: usize = 20;
const MAX_CHARS: usize = 200;
const MAX_HIGHLIGHTS: usize = 10;

/// Fetches descriptive travel content from a remote page, falling back to the
/// knowledge base on any failure. Best-effort, no retry.
#[derive(Debug, Clone)]
pub struct DestinationFetcher {
    http: Client,
    url: String,
}

impl DestinationFetcher {
    pub fn new(http: Client) -> Self {
        Self::with_url(http, DESTINATION_URL)
    }

    pub fn with_url(http: Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }

    /// Always yields a complete record: `Live` when the scrape produced at
    /// least one qualifying highlight, `Fallback` otherwise.
    pub async fn fetch(&self) -> Fetched<DestinationInfo> {
        match self.try_fetch().await {
            Ok(info) => Fetched::Live(info),
            Err(err) => {
                println!("Error scraping Turkey travel info: {err}");
                Fetched::Fallback(fallback_destination_info())
            }
        }
    }

    async fn try_fetch(&self) -> Result<DestinationInfo, FetchError> {
        let res = self
            .http
            .get(&self.url)
            .timeout(TIMEOUT)
            .send()
            .await
            .map_err(|source| FetchError::Network { url: self.url.clone(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Network { url: self.url.clone(), source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
                body: truncate_body(&body),
            });
        }

        let highlights = extract_highlights(&body);
        if highlights.is_empty() {
            return Err(FetchError::NoContent { url: self.url.clone() });
        }

        Ok(DestinationInfo {
            destination: knowledge::DESTINATION_NAME.to_string(),
            scraped_at: Utc::now(),
            highlights,
            travel_tips: Vec::new(),
            best_time_to_visit: knowledge::BEST_TIME_TO_VISIT.to_string(),
            currency: knowledge::CURRENCY_NAME.to_string(),
            language: knowledge::LANGUAGE.to_string(),
            visa_info: knowledge::VISA_INFO.to_string(),
        })
    }
}

/// Scan heading/paragraph elements for highlight-like text: must contain one
/// of the keywords (case-insensitive), trimmed length strictly between
/// `MIN_CHARS` and `MAX_CHARS`, capped at `MAX_HIGHLIGHTS` in document order.
pub(crate) fn extract_highlights(html: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse("h2, h3, p") else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut highlights = Vec::new();

    for element in document.select(&selector) {
        let text = element.text().collect::<String>();
        let text = text.trim();

        let lower = text.to_lowercase();
        if !KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            continue;
        }

        let chars = text.chars().count();
        if chars <= MIN_CHARS || chars >= MAX_CHARS {
            continue;
        }

        highlights.push(text.to_string());
        if highlights.len() == MAX_HIGHLIGHTS {
            break;
        }
    }

    highlights
}

/// Complete record built entirely from the knowledge base. Highlights and tips
/// are guaranteed non-empty so the report always has content.
pub fn fallback_destination_info() -> DestinationInfo {
    DestinationInfo {
        destination: knowledge::DESTINATION_NAME.to_string(),
        scraped_at: Utc::now(),
        highlights: knowledge::FALLBACK_HIGHLIGHTS.iter().map(|s| s.to_string()).collect(),
        travel_tips: knowledge::FALLBACK_TIPS.iter().map(|s| s.to_string()).collect(),
        best_time_to_visit: knowledge::BEST_TIME_TO_VISIT_FALLBACK.to_string(),
        currency: knowledge::CURRENCY_NAME.to_string(),
        language: knowledge::LANGUAGE_FALLBACK.to_string(),
        visa_info: knowledge::VISA_INFO_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http;

    #[test]
    fn extracts_keyword_paragraphs_within_length_bounds() {
        let html = r#"
            <html><body>
                <h2>Top sights in Istanbul worth your time</h2>
                <p>best</p>
                <p>This paragraph mentions a famous attraction and is long enough to keep.</p>
                <p>No matching words here, despite being comfortably long enough to pass.</p>
            </body></html>
        "#;

        let highlights = extract_highlights(html);
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0], "Top sights in Istanbul worth your time");
        assert!(highlights[1].contains("attraction"));
    }

    #[test]
    fn caps_highlights_at_ten() {
        let mut html = String::from("<html><body>");
        for i in 0..15 {
            html.push_str(&format!(
                "<p>Highlight number {i}: another must see spot on the itinerary</p>"
            ));
        }
        html.push_str("</body></html>");

        assert_eq!(extract_highlights(&html).len(), 10);
    }

    #[test]
    fn rejects_text_outside_length_bounds() {
        let too_short = "<p>top pick</p>";
        let too_long = format!("<p>best {}</p>", "x".repeat(250));

        assert!(extract_highlights(too_short).is_empty());
        assert!(extract_highlights(&too_long).is_empty());
    }

    #[test]
    fn fallback_has_ten_highlights_and_six_tips() {
        let info = fallback_destination_info();
        assert_eq!(info.highlights.len(), 10);
        assert_eq!(info.travel_tips.len(), 6);
        assert_eq!(info.destination, "Turkey");
    }

    #[tokio::test]
    async fn unreachable_source_yields_fallback() {
        let client = http::build_client().expect("client must build");
        let fetcher = DestinationFetcher::with_url(client, "http://127.0.0.1:9/turkey");

        let result = fetcher.fetch().await;
        assert!(result.is_fallback());

        let info = result.into_inner();
        assert_eq!(info.highlights.len(), 10);
        assert_eq!(info.travel_tips.len(), 6);
    }
}
