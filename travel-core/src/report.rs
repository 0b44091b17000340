//! Report assembler: merges the fetched records into a [`TravelPacket`] and
//! renders it as a styled HTML report and a structured JSON document. Both
//! renderings are deterministic functions of the packet.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::model::{CurrencyInfo, DestinationInfo, ItineraryDay, TravelPacket, WeatherReading};

impl TravelPacket {
    /// Merge the four source records into the aggregate. `generated_at` is
    /// injected so callers (and tests) control the embedded timestamp.
    pub fn assemble(
        travel_info: DestinationInfo,
        weather: BTreeMap<String, WeatherReading>,
        currency: CurrencyInfo,
        itinerary: Vec<ItineraryDay>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self { travel_info, weather, currency, itinerary, generated_at }
    }
}

pub fn to_json(packet: &TravelPacket) -> Result<String> {
    serde_json::to_string_pretty(packet).context("Failed to serialize travel packet to JSON")
}

const STYLE: &str = r#"        body { font-family: 'Georgia', serif; margin: 0; padding: 20px; background: linear-gradient(135deg, #e74c3c, #c0392b); color: white; }
        .container { max-width: 900px; margin: 0 auto; background: white; color: #333; padding: 30px; border-radius: 15px; box-shadow: 0 10px 30px rgba(0,0,0,0.3); }
        .header { text-align: center; margin-bottom: 30px; }
        .flag { font-size: 3em; margin-bottom: 10px; }
        h1 { color: #e74c3c; margin: 0; font-size: 2.5em; text-shadow: 2px 2px 4px rgba(0,0,0,0.1); }
        .section { margin: 25px 0; padding: 20px; background: #f8f9fa; border-radius: 10px; border-left: 5px solid #e74c3c; }
        .section h2 { color: #c0392b; margin-top: 0; }
        .highlight { background: #fff3cd; padding: 15px; border-radius: 8px; margin: 10px 0; border-left: 4px solid #ffc107; }
        .itinerary-day { background: white; margin: 10px 0; padding: 15px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
        .weather { background: linear-gradient(45deg, #3498db, #2980b9); color: white; padding: 15px; border-radius: 10px; text-align: center; }
        .currency { background: linear-gradient(45deg, #27ae60, #229954); color: white; padding: 15px; border-radius: 10px; }
        ul { padding-left: 20px; }
        li { margin: 8px 0; }
        .footer { text-align: center; margin-top: 30px; color: #666; font-style: italic; }
"#;

/// Render the styled report. Never fails: the one structural edge case, a
/// missing budget guide, degrades to the advisory note.
pub fn render_html(packet: &TravelPacket) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str("    <title>🇹🇷 Turkey Travel Guide</title>\n");
    out.push_str("    <style>\n");
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");

    render_header(&mut out, packet.generated_at);
    render_highlights(&mut out, &packet.travel_info);
    render_weather(&mut out, &packet.weather);
    render_currency(&mut out, &packet.currency);
    render_itinerary(&mut out, &packet.itinerary);
    render_tips(&mut out, &packet.travel_info);
    render_essentials(&mut out, &packet.travel_info);

    out.push_str("        <div class=\"footer\">\n");
    out.push_str("            <p>🧳 Happy travels to beautiful Turkey! 🇹🇷</p>\n");
    out.push_str("            <p>Generated by turkey-travel</p>\n");
    out.push_str("        </div>\n    </div>\n</body>\n</html>\n");

    out
}

fn render_header(out: &mut String, generated_at: DateTime<Utc>) {
    out.push_str("        <div class=\"header\">\n");
    out.push_str("            <div class=\"flag\">🇹🇷</div>\n");
    out.push_str("            <h1>Turkey Travel Guide</h1>\n");
    out.push_str(
        "            <p style=\"color: #666; font-size: 1.1em;\">Your Complete Guide to Türkiye</p>\n",
    );
    out.push_str(&format!(
        "            <p style=\"color: #999;\">Generated on {}</p>\n",
        generated_at.format("%B %d, %Y at %I:%M %p")
    ));
    out.push_str("        </div>\n");
}

fn render_highlights(out: &mut String, info: &DestinationInfo) {
    out.push_str("        <div class=\"section\">\n");
    out.push_str("            <h2>🌟 Top Highlights & Attractions</h2>\n");
    for highlight in &info.highlights {
        out.push_str(&format!("            <div class=\"highlight\">✨ {highlight}</div>\n"));
    }
    out.push_str("        </div>\n");
}

fn render_weather(out: &mut String, weather: &BTreeMap<String, WeatherReading>) {
    out.push_str("        <div class=\"section\">\n");
    out.push_str("            <h2>🌤️ Weather Information</h2>\n");
    out.push_str("            <div class=\"weather\">\n");
    // Cities without a reading are skipped, not shown as "no data".
    for (city, reading) in weather {
        out.push_str(&format!(
            "                <strong>{city}:</strong> {} - {}<br>\n",
            reading.temperature, reading.condition
        ));
        out.push_str(&format!(
            "                Humidity: {} | Wind: {}<br><br>\n",
            reading.humidity, reading.wind_speed
        ));
    }
    out.push_str("            </div>\n        </div>\n");
}

fn render_currency(out: &mut String, currency: &CurrencyInfo) {
    out.push_str("        <div class=\"section\">\n");
    out.push_str("            <h2>💱 Currency & Budget Information</h2>\n");
    out.push_str("            <div class=\"currency\">\n");
    out.push_str(&format!(
        "                <strong>Exchange Rate:</strong> 1 {} = {} {}<br>\n",
        currency.base_currency, currency.exchange_rate, currency.target_currency
    ));

    match &currency.budget_guide {
        Some(guide) => {
            out.push_str("                <strong>Daily Budget:</strong><br>\n");
            out.push_str(&format!("                💰 Budget: {}<br>\n", guide.budget_daily));
            out.push_str(&format!(
                "                💳 Mid-range: {}<br>\n",
                guide.mid_range_daily
            ));
            out.push_str(&format!("                💎 Luxury: {}\n", guide.luxury_daily));
        }
        None => {
            let note = currency.note.as_deref().unwrap_or("Budget guide unavailable");
            out.push_str(&format!("                {note}\n"));
        }
    }

    out.push_str("            </div>\n        </div>\n");
}

fn render_itinerary(out: &mut String, itinerary: &[ItineraryDay]) {
    out.push_str("        <div class=\"section\">\n");
    out.push_str(&format!(
        "            <h2>📅 Suggested {}-Day Itinerary</h2>\n",
        itinerary.len()
    ));
    for entry in itinerary {
        out.push_str("            <div class=\"itinerary-day\">\n");
        out.push_str(&format!(
            "                <strong>Day {}: {}</strong><br>\n",
            entry.day, entry.city
        ));
        out.push_str(&format!("                📍 {}\n", entry.activities));
        out.push_str("            </div>\n");
    }
    out.push_str("        </div>\n");
}

fn render_tips(out: &mut String, info: &DestinationInfo) {
    out.push_str("        <div class=\"section\">\n");
    out.push_str("            <h2>💡 Travel Tips</h2>\n            <ul>\n");
    for tip in &info.travel_tips {
        out.push_str(&format!("                <li>{tip}</li>\n"));
    }
    out.push_str("            </ul>\n        </div>\n");
}

fn render_essentials(out: &mut String, info: &DestinationInfo) {
    out.push_str("        <div class=\"section\">\n");
    out.push_str("            <h2>📋 Essential Information</h2>\n");
    out.push_str(&format!(
        "            <p><strong>Best Time to Visit:</strong> {}</p>\n",
        info.best_time_to_visit
    ));
    out.push_str(&format!("            <p><strong>Currency:</strong> {}</p>\n", info.currency));
    out.push_str(&format!("            <p><strong>Language:</strong> {}</p>\n", info.language));
    out.push_str(&format!("            <p><strong>Visa:</strong> {}</p>\n", info.visa_info));
    out.push_str("        </div>\n");
}
