//! Core library for the `turkey-travel` CLI.
//!
//! This crate defines:
//! - The static knowledge base (cities, fallback content, canned itineraries)
//! - Source fetchers with a fetch-with-fallback contract
//! - The report assembler (HTML + JSON renderings)
//! - The pipeline orchestrator
//!
//! It is used by `travel-cli`, but can also be reused by other binaries or services.

pub mod fetch;
pub mod http;
pub mod itinerary;
pub mod knowledge;
pub mod model;
pub mod pipeline;
pub mod report;

pub use fetch::currency::CurrencyFetcher;
pub use fetch::destination::DestinationFetcher;
pub use fetch::weather::{SimulatedProvider, WeatherProvider};
pub use model::{
    CurrencyInfo, DestinationInfo, Fetched, ItineraryDay, TravelPacket, WeatherReading,
};
pub use pipeline::{PipelineOptions, PipelineOutput};
