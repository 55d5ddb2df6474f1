//! Fixed-layout text rendering of record lists.
//!
//! Downstream agents may parse these blocks, so labels and field order are
//! stable. Blocks are separated by one blank line.

use crate::model::{EarthquakeRecord, ForecastRecord, ObservationRecord, UNAVAILABLE};

pub const NO_FORECAST: &str = "No forecast data found.";
pub const NO_EARTHQUAKES: &str = "No recent earthquake reports found.";

pub fn no_observations(location_name: &str) -> String {
    format!("No observation data found for '{location_name}'. Try a specific district or city name.")
}

pub fn format_forecast(records: &[ForecastRecord]) -> String {
    if records.is_empty() {
        return NO_FORECAST.to_string();
    }
    join_blocks(records.iter().map(|r| {
        format!(
            "📍 {} ({} ~ {})\n   🌡️ Temp: {}°C - {}°C\n   🌦️ Weather: {}\n   ☔ Rain Chance: {}%",
            r.location_name,
            r.period_start,
            r.period_end,
            r.min_temp_c,
            r.max_temp_c,
            r.weather_description,
            r.precipitation_chance_pct,
        )
    }))
}

/// `location_name` is the query filter, quoted in the "no data" sentence.
pub fn format_observations(records: &[ObservationRecord], location_name: &str) -> String {
    if records.is_empty() {
        return no_observations(location_name);
    }
    join_blocks(records.iter().map(|r| {
        format!(
            "📡 Station: {} ({})\n   🌡️ Temp: {}°C\n   💧 Humidity: {}%\n   🌧️ 24h Rain: {}mm",
            or_unavailable(&r.station_name),
            or_unavailable(&r.observed_at),
            or_unavailable(&r.temp_c),
            or_unavailable(&r.relative_humidity_pct),
            or_unavailable(&r.rain_24h_mm),
        )
    }))
}

pub fn format_earthquakes(records: &[EarthquakeRecord]) -> String {
    if records.is_empty() {
        return NO_EARTHQUAKES.to_string();
    }
    join_blocks(records.iter().map(|r| {
        format!(
            "⚠️ **Earthquake** at {}\n   📍 Location: {}\n   📊 Magnitude: {}\n   📉 Depth: {}km\n   📝 Report: {}\n   🔗 {}",
            or_unavailable(&r.origin_time),
            or_unavailable(&r.epicenter),
            or_unavailable(&r.magnitude),
            or_unavailable(&r.depth_km),
            r.report,
            r.web_url,
        )
    }))
}

fn or_unavailable(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNAVAILABLE)
}

fn join_blocks(blocks: impl Iterator<Item = String>) -> String {
    blocks.collect::<Vec<_>>().join("\n\n")
}
