use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::{dataset::DatasetId, error::Result};

pub mod cwa;

pub use cwa::CwaClient;

/// Query parameters for one dataset request. The credential and response
/// format are added by the source, never by callers.
pub type Query = Vec<(&'static str, String)>;

/// Something that can return the raw JSON body of a CWA dataset.
///
/// Implementations make at most one attempt per call and report transport,
/// status and decoding problems as [`WeatherError::Fetch`](crate::WeatherError::Fetch).
#[async_trait]
pub trait DatasetSource: Send + Sync + Debug {
    async fn fetch(&self, dataset: DatasetId, query: Query) -> Result<Value>;
}

/// Query with an optional `locationName` filter; blank names mean "everywhere".
pub fn location_query(location_name: Option<&str>) -> Query {
    match location_name.map(str::trim) {
        Some(name) if !name.is_empty() => vec![("locationName", name.to_string())],
        _ => Vec::new(),
    }
}
