//! Static knowledge base: city coordinates, fallback destination content and
//! the canned itineraries. Immutable tables, defined once rather than rebuilt
//! per call.

/// A destination city with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

pub const CITIES: &[City] = &[
    City { name: "Istanbul", lat: 41.0082, lon: 28.9784 },
    City { name: "Ankara", lat: 39.9334, lon: 32.8597 },
    City { name: "Izmir", lat: 38.4192, lon: 27.1287 },
    City { name: "Antalya", lat: 36.8969, lon: 30.7133 },
    City { name: "Cappadocia", lat: 38.6431, lon: 34.8288 },
    City { name: "Bodrum", lat: 37.0345, lon: 27.4305 },
    City { name: "Pamukkale", lat: 37.9200, lon: 29.1200 },
];

/// Cities the orchestrator gathers weather for, in query order.
pub const WEATHER_CITIES: &[&str] = &["Istanbul", "Cappadocia", "Antalya", "Pamukkale"];

pub fn city(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.name == name)
}

/// Fallback highlights used when the live scrape yields nothing. Exactly 10
/// entries; the report relies on this list never being empty.
pub const FALLBACK_HIGHLIGHTS: &[&str] = &[
    "Hagia Sophia - Iconic Byzantine architecture in Istanbul",
    "Cappadocia - Hot air balloons over fairy chimneys",
    "Pamukkale - White travertine terraces and thermal pools",
    "Blue Mosque - Beautiful Ottoman architecture",
    "Grand Bazaar - Historic covered market in Istanbul",
    "Ephesus - Ancient Greek and Roman ruins",
    "Turkish Baths (Hammam) - Traditional spa experience",
    "Bosphorus Cruise - Bridge between Europe and Asia",
    "Mount Nemrut - Ancient statues and sunrise views",
    "Turkish Cuisine - Kebabs, baklava, and Turkish delight",
];

/// Fallback travel tips. Exactly 6 entries.
pub const FALLBACK_TIPS: &[&str] = &[
    "Learn basic Turkish phrases - locals appreciate the effort",
    "Bargain in bazaars and markets - it's expected",
    "Try Turkish breakfast - it's a feast!",
    "Remove shoes when entering mosques",
    "Carry cash - many places don't accept cards",
    "Book Cappadocia hot air balloon rides in advance",
];

pub const DESTINATION_NAME: &str = "Turkey";

// Short-form field strings used on the live-scrape path.
pub const BEST_TIME_TO_VISIT: &str = "April to October";
pub const CURRENCY_NAME: &str = "Turkish Lira (TRY)";
pub const LANGUAGE: &str = "Turkish";
pub const VISA_INFO: &str = "e-Visa required for most tourists";

// Long-form variants used in the fallback record.
pub const BEST_TIME_TO_VISIT_FALLBACK: &str = "April to October (spring and autumn are ideal)";
pub const LANGUAGE_FALLBACK: &str = "Turkish (English widely spoken in tourist areas)";
pub const VISA_INFO_FALLBACK: &str = "e-Visa required - apply online before travel";

/// One day of a canned itinerary template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedDay {
    pub day: u32,
    pub city: &'static str,
    pub activities: &'static str,
}

pub const ITINERARY_7_DAY: &[PlannedDay] = &[
    PlannedDay { day: 1, city: "Istanbul", activities: "Arrive, Hagia Sophia, Blue Mosque, Grand Bazaar" },
    PlannedDay { day: 2, city: "Istanbul", activities: "Topkapi Palace, Bosphorus Cruise, Turkish Bath" },
    PlannedDay { day: 3, city: "Cappadocia", activities: "Travel to Cappadocia, Goreme Open Air Museum" },
    PlannedDay { day: 4, city: "Cappadocia", activities: "Hot Air Balloon, Underground City, Pottery Workshop" },
    PlannedDay { day: 5, city: "Pamukkale", activities: "Travel to Pamukkale, Travertine Terraces, Hierapolis" },
    PlannedDay { day: 6, city: "Istanbul", activities: "Return to Istanbul, Galata Tower, Turkish Cuisine Tour" },
    PlannedDay { day: 7, city: "Istanbul", activities: "Last-minute shopping, Departure" },
];

pub const ITINERARY_14_DAY: &[PlannedDay] = &[
    PlannedDay { day: 1, city: "Istanbul", activities: "Arrive, Sultanahmet District" },
    PlannedDay { day: 2, city: "Istanbul", activities: "Museums and Palaces" },
    PlannedDay { day: 3, city: "Istanbul", activities: "Bosphorus and Asian Side" },
    PlannedDay { day: 4, city: "Cappadocia", activities: "Travel and Exploration" },
    PlannedDay { day: 5, city: "Cappadocia", activities: "Hot Air Balloon and Valleys" },
    PlannedDay { day: 6, city: "Cappadocia", activities: "Underground Cities" },
    PlannedDay { day: 7, city: "Antalya", activities: "Mediterranean Coast" },
    PlannedDay { day: 8, city: "Antalya", activities: "Ancient Sites and Beaches" },
    PlannedDay { day: 9, city: "Pamukkale", activities: "Thermal Springs" },
    PlannedDay { day: 10, city: "Ephesus", activities: "Ancient Ruins" },
    PlannedDay { day: 11, city: "Bodrum", activities: "Aegean Coast" },
    PlannedDay { day: 12, city: "Izmir", activities: "Modern Turkish City" },
    PlannedDay { day: 13, city: "Istanbul", activities: "Return and Rest" },
    PlannedDay { day: 14, city: "Istanbul", activities: "Departure" },
];
