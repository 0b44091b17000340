use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Descriptive travel content for the destination, either scraped live or
/// built from the knowledge-base fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationInfo {
    pub destination: String,
    pub scraped_at: DateTime<Utc>,
    pub highlights: Vec<String>,
    pub travel_tips: Vec<String>,
    pub best_time_to_visit: String,
    pub currency: String,
    pub language: String,
    pub visa_info: String,
}

/// One weather observation for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind_speed: String,
    /// `YYYY-MM-DD` of the day the reading was taken.
    pub forecast_date: String,
    pub description: String,
}

/// Exchange rate as reported by the rate service, or an advisory string when
/// the live lookup failed. Serialized untagged so the JSON document carries a
/// plain number on the live path and the advisory text on fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExchangeRate {
    Rate(f64),
    Advisory(String),
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeRate::Rate(rate) => write!(f, "{rate}"),
            ExchangeRate::Advisory(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCosts {
    pub street_food: String,
    pub restaurant: String,
    pub fine_dining: String,
}

/// Static daily-spend and meal-cost bands in USD. Domain knowledge, not
/// derived from the live rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGuide {
    pub budget_daily: String,
    pub mid_range_daily: String,
    pub luxury_daily: String,
    pub meal_costs: MealCosts,
}

/// USD→TRY exchange information. The budget guide is present only on the live
/// path; consumers must treat it as optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub base_currency: String,
    pub target_currency: String,
    pub exchange_rate: ExchangeRate,
    /// `YYYY-MM-DD` as reported by the rate service, or today on fallback.
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_guide: Option<BudgetGuide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One entry of a canned itinerary. Day indices are 1-based and contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub city: String,
    pub activities: String,
}

/// Aggregate record produced once per run by the report assembler. Matches the
/// top-level shape of the structured JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPacket {
    pub travel_info: DestinationInfo,
    pub weather: BTreeMap<String, WeatherReading>,
    pub currency: CurrencyInfo,
    pub itinerary: Vec<ItineraryDay>,
    pub generated_at: DateTime<Utc>,
}

/// Result of a fetch-with-fallback step. Both variants carry a complete,
/// renderable value; the tag records whether the remote source answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback(T),
}

impl<T> Fetched<T> {
    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(value) | Fetched::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_rate_serializes_as_number_or_string() {
        let live = serde_json::to_value(ExchangeRate::Rate(32.5)).unwrap();
        assert!(live.is_number());

        let fallback =
            serde_json::to_value(ExchangeRate::Advisory("Check current rates online".into()))
                .unwrap();
        assert_eq!(fallback, serde_json::json!("Check current rates online"));
    }

    #[test]
    fn absent_budget_guide_is_omitted_from_json() {
        let info = CurrencyInfo {
            base_currency: "USD".into(),
            target_currency: "TRY".into(),
            exchange_rate: ExchangeRate::Advisory("Check current rates online".into()),
            last_updated: "2024-01-01".into(),
            budget_guide: None,
            note: Some("Turkey is generally affordable for tourists".into()),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("budget_guide").is_none());
        assert!(value.get("note").is_some());
    }

    #[test]
    fn fetched_into_inner_ignores_tag() {
        assert_eq!(Fetched::Live(1).into_inner(), 1);
        assert_eq!(Fetched::Fallback(2).into_inner(), 2);
        assert!(Fetched::Fallback(()).is_fallback());
        assert!(!Fetched::Live(()).is_fallback());
    }
}
