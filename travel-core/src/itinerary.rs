//! Itinerary builder: selects a canned day-by-day plan by trip length.

use crate::knowledge::{self, PlannedDay};
use crate::model::ItineraryDay;

/// Returns the canned plan for the requested trip length. Lengths without a
/// template fall back to the 7-day plan.
pub fn build(days: u32) -> Vec<ItineraryDay> {
    let plan: &[PlannedDay] = match days {
        14 => knowledge::ITINERARY_14_DAY,
        _ => knowledge::ITINERARY_7_DAY,
    };

    plan.iter()
        .map(|entry| ItineraryDay {
            day: entry.day,
            city: entry.city.to_string(),
            activities: entry.activities.to_string(),
        })
        .collect()
}
