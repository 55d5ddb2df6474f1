use serde_json::Value;

use crate::json::{list, text_at};
use crate::model::EarthquakeRecord;

pub const DEFAULT_EARTHQUAKE_LIMIT: i64 = 3;

/// First `limit` reports in upstream order (newest first). `limit <= 0` yields
/// nothing.
pub fn extract_earthquakes(payload: &Value, limit: i64) -> Vec<EarthquakeRecord> {
    let limit = usize::try_from(limit).unwrap_or(0);

    list(payload, &["records", "earthquake"])
        .iter()
        .take(limit)
        .map(earthquake_record)
        .collect()
}

fn earthquake_record(eq: &Value) -> EarthquakeRecord {
    EarthquakeRecord {
        origin_time: text_at(eq, &["earthquakeInfo", "originTime"]),
        magnitude: text_at(eq, &["earthquakeInfo", "earthquakeMagnitude", "magnitudeValue"]),
        depth_km: text_at(eq, &["earthquakeInfo", "depth", "value"]),
        epicenter: text_at(eq, &["earthquakeInfo", "epiCenter", "location"]),
        report: text_at(eq, &["reportContent"]).unwrap_or_else(|| "No details".to_string()),
        web_url: text_at(eq, &["web"]).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quake(n: u32) -> Value {
        json!({
            "earthquakeNo": 114000 + n,
            "reportContent": format!("report {n}"),
            "web": format!("https://scweb.cwa.gov.tw/{n}"),
            "earthquakeInfo": {
                "originTime": format!("2025-01-0{n} 10:00:00"),
                "depth": { "value": 10.5 },
                "epiCenter": { "location": "花蓮縣政府南南東方 20.0 公里" },
                "earthquakeMagnitude": { "magnitudeType": "芮氏規模", "magnitudeValue": 4.2 }
            }
        })
    }

    fn payload(count: u32) -> Value {
        json!({ "records": { "earthquake": (1..=count).map(quake).collect::<Vec<_>>() } })
    }

    #[test]
    fn takes_first_entries_in_order() {
        let records = extract_earthquakes(&payload(5), 2);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].report, "report 1");
        assert_eq!(records[1].report, "report 2");
        assert_eq!(records[0].origin_time.as_deref(), Some("2025-01-01 10:00:00"));
        assert_eq!(records[0].magnitude.as_deref(), Some("4.2"));
        assert_eq!(records[0].depth_km.as_deref(), Some("10.5"));
        assert_eq!(records[0].web_url, "https://scweb.cwa.gov.tw/1");
    }

    #[test]
    fn limit_larger_than_list_returns_all() {
        assert_eq!(extract_earthquakes(&payload(2), DEFAULT_EARTHQUAKE_LIMIT).len(), 2);
    }

    #[test]
    fn non_positive_limit_yields_nothing() {
        assert!(extract_earthquakes(&payload(5), 0).is_empty());
        assert!(extract_earthquakes(&payload(5), -2).is_empty());
    }

    #[test]
    fn missing_nested_fields_do_not_drop_the_report() {
        let p = json!({ "records": { "earthquake": [ { "earthquakeInfo": { "originTime": "t" } } ] } });

        let records = extract_earthquakes(&p, 3);

        assert_eq!(
            records,
            vec![EarthquakeRecord {
                origin_time: Some("t".into()),
                magnitude: None,
                depth_km: None,
                epicenter: None,
                report: "No details".into(),
                web_url: String::new(),
            }]
        );
    }

    #[test]
    fn missing_list_yields_nothing() {
        assert!(extract_earthquakes(&json!({ "records": {} }), 3).is_empty());
    }
}
