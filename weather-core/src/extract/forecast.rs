use serde_json::Value;

use crate::json::{element_named, field, list, text_at};
use crate::model::ForecastRecord;

const ELEMENTS: [&str; 4] = ["Wx", "PoP", "MinT", "MaxT"];

/// Builds one record per location that carries all of `Wx`, `PoP`, `MinT` and
/// `MaxT`. Locations missing any of them are omitted, not reported partially.
///
/// The payload must report `"success": "true"`; anything else yields no records.
pub fn extract_forecast(payload: &Value) -> Vec<ForecastRecord> {
    if field(payload, "success").and_then(Value::as_str) != Some("true") {
        tracing::debug!("forecast payload not marked successful");
        return Vec::new();
    }

    list(payload, &["records", "location"]).iter().filter_map(location_record).collect()
}

fn location_record(location: &Value) -> Option<ForecastRecord> {
    let name = text_at(location, &["locationName"]);
    let elements = list(location, &["weatherElement"]);

    // Period 0 of each series; the four series share period ordering upstream.
    let [wx, pop, min_t, max_t] = ELEMENTS.map(|el| {
        element_named(elements, el).and_then(|e| list(e, &["time"]).first())
    });
    let (wx, pop, min_t, max_t) = (wx?, pop?, min_t?, max_t?);

    let record = ForecastRecord {
        location_name: name?,
        period_start: text_at(wx, &["startTime"])?,
        period_end: text_at(wx, &["endTime"])?,
        weather_description: parameter_name(wx)?,
        precipitation_chance_pct: parameter_name(pop)?,
        min_temp_c: parameter_name(min_t)?,
        max_temp_c: parameter_name(max_t)?,
    };

    Some(record)
}

fn parameter_name(period: &Value) -> Option<String> {
    text_at(period, &["parameter", "parameterName"])
}
