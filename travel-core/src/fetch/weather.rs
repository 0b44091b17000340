use async_trait::async_trait;
use chrono::Utc;
use std::fmt::Debug;

use crate::model::WeatherReading;

/// Weather source abstraction. The current implementation is a simulation;
/// the trait keeps it swappable for a real provider without touching callers.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> anyhow::Result<WeatherReading>;
}

/// Fixed-content readings stamped with today's date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedProvider;

#[async_trait]
impl WeatherProvider for SimulatedProvider {
    async fn current(&self, city: &str) -> anyhow::Result<WeatherReading> {
        Ok(WeatherReading {
            city: city.to_string(),
            temperature: "22°C".to_string(),
            condition: "Sunny".to_string(),
            humidity: "60%".to_string(),
            wind_speed: "10 km/h".to_string(),
            forecast_date: Utc::now().format("%Y-%m-%d").to_string(),
            description: "Perfect weather for sightseeing!".to_string(),
        })
    }
}
