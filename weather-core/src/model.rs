use serde::Serialize;

/// Rendered in place of a reading the upstream did not provide.
pub const UNAVAILABLE: &str = "N/A";

/// One location's first 12-hour forecast period.
///
/// Only built when every element is present, so all fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRecord {
    pub location_name: String,
    pub period_start: String,
    pub period_end: String,
    pub weather_description: String,
    pub precipitation_chance_pct: String,
    pub min_temp_c: String,
    pub max_temp_c: String,
}

/// One station's latest reading. `None` means unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationRecord {
    pub station_name: Option<String>,
    pub observed_at: Option<String>,
    pub temp_c: Option<String>,
    pub relative_humidity_pct: Option<String>,
    pub rain_24h_mm: Option<String>,
}

/// One earthquake report, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarthquakeRecord {
    pub origin_time: Option<String>,
    pub magnitude: Option<String>,
    pub depth_km: Option<String>,
    pub epicenter: Option<String>,
    pub report: String,
    pub web_url: String,
}
