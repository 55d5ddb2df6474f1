use serde_json::Value;

use crate::json::{element_named, list, text_at};
use crate::model::ObservationRecord;

/// Upper bound on stations reported for one query.
pub const MAX_OBSERVATIONS: usize = 5;

/// Upstream placeholder for "no reading".
const MISSING_READING: &str = "-99";

/// Reads `TEMP`, `HUMD` and `H_24R` for at most [`MAX_OBSERVATIONS`] stations.
///
/// `-99` temperatures and humidities become `None`. Humidity arrives as a
/// fraction and is reported as a whole percentage, rounding halves up.
/// Rainfall is passed through as sent, `-99` included.
pub fn extract_observations(payload: &Value) -> Vec<ObservationRecord> {
    list(payload, &["records", "location"])
        .iter()
        .take(MAX_OBSERVATIONS)
        .map(station_record)
        .collect()
}

fn station_record(station: &Value) -> ObservationRecord {
    let elements = list(station, &["weatherElement"]);
    let reading = |name: &str| {
        element_named(elements, name).and_then(|el| text_at(el, &["elementValue"]))
    };

    ObservationRecord {
        station_name: text_at(station, &["locationName"]),
        observed_at: text_at(station, &["time", "obsTime"]),
        temp_c: reading("TEMP").filter(|t| t != MISSING_READING),
        relative_humidity_pct: reading("HUMD")
            .filter(|h| h != MISSING_READING)
            .and_then(|h| humidity_percent(&h)),
        rain_24h_mm: reading("H_24R"),
    }
}

/// `"0.825"` → `"83"`. Unparseable values are unavailable.
fn humidity_percent(fraction: &str) -> Option<String> {
    let value: f64 = fraction.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}", (value * 100.0).round() as i64))
}
