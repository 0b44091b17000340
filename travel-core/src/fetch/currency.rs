use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::fetch::{FetchError, truncate_body};
use crate::model::{BudgetGuide, CurrencyInfo, ExchangeRate, Fetched, MealCosts};

pub const CURRENCY_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

const TIMEOUT: Duration = Duration::from_secs(10);

pub const BASE_CURRENCY: &str = "USD";
pub const TARGET_CURRENCY: &str = "TRY";

/// Advisory shown in place of a numeric rate when the lookup fails.
pub const RATE_ADVISORY: &str = "Check current rates online";
pub const FALLBACK_NOTE: &str = "Turkey is generally affordable for tourists";

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
    date: Option<String>,
}

/// Queries the exchange-rate service for USD→TRY, falling back to an advisory
/// record without a budget guide on any failure.
#[derive(Debug, Clone)]
pub struct CurrencyFetcher {
    http: Client,
    url: String,
}

impl CurrencyFetcher {
    pub fn new(http: Client) -> Self {
        Self::with_url(http, CURRENCY_URL)
    }

    pub fn with_url(http: Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }

    pub async fn fetch(&self) -> Fetched<CurrencyInfo> {
        match self.try_fetch().await {
            Ok(info) => Fetched::Live(info),
            Err(err) => {
                println!("Error getting currency rates: {err}");
                Fetched::Fallback(fallback_currency_info())
            }
        }
    }

    async fn try_fetch(&self) -> Result<CurrencyInfo, FetchError> {
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

        parse_rates(&self.url, &body)
    }
}

fn parse_rates(url: &str, body: &str) -> Result<CurrencyInfo, FetchError> {
    let parsed: RatesResponse = serde_json::from_str(body).map_err(|err| FetchError::Parse {
        url: url.to_string(),
        reason: err.to_string(),
    })?;

    let rate = parsed.rates.get(TARGET_CURRENCY).copied().ok_or_else(|| FetchError::Parse {
        url: url.to_string(),
        reason: format!("no {TARGET_CURRENCY} rate in response"),
    })?;

    let last_updated =
        parsed.date.unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

    Ok(CurrencyInfo {
        base_currency: BASE_CURRENCY.to_string(),
        target_currency: TARGET_CURRENCY.to_string(),
        exchange_rate: ExchangeRate::Rate(rate),
        last_updated,
        budget_guide: Some(budget_guide()),
        note: None,
    })
}

/// Static three-tier budget guide attached to every live record.
pub fn budget_guide() -> BudgetGuide {
    BudgetGuide {
        budget_daily: "$30-50 USD".to_string(),
        mid_range_daily: "$50-100 USD".to_string(),
        luxury_daily: "$100+ USD".to_string(),
        meal_costs: MealCosts {
            street_food: "$2-5 USD".to_string(),
            restaurant: "$10-20 USD".to_string(),
            fine_dining: "$30+ USD".to_string(),
        },
    }
}

/// Advisory record used when the rate service is unreachable. Carries no
/// budget guide; renderers must degrade gracefully.
pub fn fallback_currency_info() -> CurrencyInfo {
    CurrencyInfo {
        base_currency: BASE_CURRENCY.to_string(),
        target_currency: TARGET_CURRENCY.to_string(),
        exchange_rate: ExchangeRate::Advisory(RATE_ADVISORY.to_string()),
        last_updated: Utc::now().format("%Y-%m-%d").to_string(),
        budget_guide: None,
        note: Some(FALLBACK_NOTE.to_string()),
    }
}
