//! Orchestrator: runs the five pipeline steps in fixed order and writes the
//! two output documents. Fetcher failures never abort a run; only filesystem
//! errors propagate.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::currency::{CURRENCY_URL, CurrencyFetcher};
use crate::fetch::destination::{DESTINATION_URL, DestinationFetcher};
use crate::fetch::weather::{SimulatedProvider, WeatherProvider};
use crate::model::TravelPacket;
use crate::{http, itinerary, knowledge, report};

/// Output directories ensured under the root. The weather and attractions
/// directories are reserved for raw per-source dumps and currently unused.
const OUTPUT_DIRS: &[&str] =
    &["turkey_weather", "turkey_attractions", "turkey_reports", "turkey_data"];

const REPORTS_DIR: &str = "turkey_reports";
const DATA_DIR: &str = "turkey_data";

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory the four output directories are created under.
    pub output_root: PathBuf,
    pub trip_days: u32,
    /// Pause between per-city weather calls, as courtesy to the source.
    pub pacing: Duration,
    pub destination_url: String,
    pub currency_url: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            trip_days: 7,
            pacing: Duration::from_secs(1),
            destination_url: DESTINATION_URL.to_string(),
            currency_url: CURRENCY_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub html_path: PathBuf,
    pub json_path: PathBuf,
}

/// Run the full pipeline with the simulated weather provider.
pub async fn run(options: &PipelineOptions) -> Result<PipelineOutput> {
    run_with_provider(options, &SimulatedProvider).await
}

pub async fn run_with_provider(
    options: &PipelineOptions,
    provider: &dyn WeatherProvider,
) -> Result<PipelineOutput> {
    println!("🚀 Starting Complete Turkey Travel Analysis...");
    println!("{}", "=".repeat(60));

    ensure_directories(&options.output_root)?;
    let client = http::build_client()?;

    println!("\n1️⃣ Gathering Turkey travel information...");
    let travel_info = DestinationFetcher::with_url(client.clone(), &options.destination_url)
        .fetch()
        .await
        .into_inner();

    println!("\n2️⃣ Getting weather data for major cities...");
    let mut weather = BTreeMap::new();
    for city in knowledge::WEATHER_CITIES {
        println!("🌤️  Getting weather for {city}...");
        match provider.current(city).await {
            Ok(reading) => {
                weather.insert((*city).to_string(), reading);
            }
            Err(err) => println!("Error getting weather for {city}: {err}"),
        }
        tokio::time::sleep(options.pacing).await;
    }

    println!("\n3️⃣ Getting currency information...");
    let currency =
        CurrencyFetcher::with_url(client, &options.currency_url).fetch().await.into_inner();

    println!("\n4️⃣ Creating suggested itinerary...");
    println!("📅 Creating {}-day Turkey itinerary...", options.trip_days);
    let itinerary = itinerary::build(options.trip_days);

    println!("\n5️⃣ Generating travel report...");
    let packet = TravelPacket::assemble(travel_info, weather, currency, itinerary, Utc::now());
    let output = write_outputs(&options.output_root, &packet)?;

    println!("\n✅ Turkey Travel Analysis Complete!");
    println!("🌐 HTML Report: {}", output.html_path.display());
    println!("📊 JSON Data: {}", output.json_path.display());

    Ok(output)
}

fn ensure_directories(root: &Path) -> Result<()> {
    for name in OUTPUT_DIRS {
        let dir = root.join(name);
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            println!("Created directory: {}", dir.display());
        }
    }
    Ok(())
}

fn write_outputs(root: &Path, packet: &TravelPacket) -> Result<PipelineOutput> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");

    let html_path = root.join(REPORTS_DIR).join(format!("turkey_travel_report_{stamp}.html"));
    let html = report::render_html(packet);
    fs::write(&html_path, html)
        .with_context(|| format!("Failed to write HTML report: {}", html_path.display()))?;
    println!("💾 Saved travel report: {}", html_path.display());

    let json_path = root.join(DATA_DIR).join(format!("turkey_data_{stamp}.json"));
    let json = report::to_json(packet)?;
    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write JSON data: {}", json_path.display()))?;

    Ok(PipelineOutput { html_path, json_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExchangeRate;

    fn test_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir()
            .join("turkey-travel-tests")
            .join(format!("{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        root
    }

    fn offline_options(root: PathBuf) -> PipelineOptions {
        // Unroutable endpoints force both network fetchers onto the
        // fallback path; zero pacing keeps the test fast.
        PipelineOptions {
            output_root: root,
            trip_days: 7,
            pacing: Duration::ZERO,
            destination_url: "http://127.0.0.1:9/turkey".to_string(),
            currency_url: "http://127.0.0.1:9/v4/latest/USD".to_string(),
        }
    }

    #[test]
    fn ensure_directories_creates_all_four() {
        let root = test_root("dirs");
        ensure_directories(&root).expect("directories must be creatable");

        for name in OUTPUT_DIRS {
            assert!(root.join(name).is_dir(), "missing directory {name}");
        }

        // Second call is a no-op, not an error.
        ensure_directories(&root).expect("existing directories are fine");
        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn offline_run_completes_on_fallbacks() {
        let root = test_root("offline");
        let options = offline_options(root.clone());

        let output = run(&options).await.expect("run must complete without network");
        assert!(output.html_path.is_file());
        assert!(output.json_path.is_file());

        let json = fs::read_to_string(&output.json_path).expect("JSON output must be readable");
        let packet: TravelPacket =
            serde_json::from_str(&json).expect("JSON output must parse back");

        // Both network fetchers fell back.
        assert_eq!(packet.travel_info.highlights.len(), 10);
        assert_eq!(packet.travel_info.travel_tips.len(), 6);
        assert!(matches!(packet.currency.exchange_rate, ExchangeRate::Advisory(ref s) if !s.is_empty()));
        assert!(packet.currency.budget_guide.is_none());

        // Simulation answered for every queried city.
        assert_eq!(packet.weather.len(), knowledge::WEATHER_CITIES.len());

        assert_eq!(packet.itinerary.len(), 7);
        assert_eq!(packet.itinerary[0].day, 1);
        assert_eq!(packet.itinerary[0].city, "Istanbul");
        assert_eq!(
            packet.itinerary[0].activities,
            "Arrive, Hagia Sophia, Blue Mosque, Grand Bazaar"
        );

        let html = fs::read_to_string(&output.html_path).expect("HTML output must be readable");
        assert!(html.contains("Turkey Travel Guide"));
        assert!(html.contains("Check current rates online"));

        let _ = fs::remove_dir_all(&root);
    }
}
