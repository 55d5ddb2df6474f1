use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::ClientSettings,
    dataset::DatasetId,
    error::{Result, WeatherError},
};

use super::{DatasetSource, Query};

/// HTTP client for the CWA open-data datastore.
#[derive(Debug, Clone)]
pub struct CwaClient {
    settings: ClientSettings,
    http: Client,
}

impl CwaClient {
    pub fn new(settings: ClientSettings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client for CWA")?;

        Ok(Self { settings, http })
    }

    pub fn has_credential(&self) -> bool {
        self.settings.credential.is_some()
    }

    fn dataset_url(&self, dataset: DatasetId) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), dataset)
    }

    fn transport_failure(&self, dataset: DatasetId, err: reqwest::Error) -> WeatherError {
        let message = if err.is_timeout() {
            format!(
                "Request for {dataset} timed out after {}s",
                self.settings.timeout.as_secs_f64()
            )
        } else {
            // The URL carries the credential; keep it out of the message.
            format!("Error fetching {dataset}: {}", err.without_url())
        };
        warn!(%dataset, %message, "CWA request failed");
        WeatherError::fetch(dataset, message)
    }
}

#[async_trait]
impl DatasetSource for CwaClient {
    async fn fetch(&self, dataset: DatasetId, mut query: Query) -> Result<Value> {
        let credential = self
            .settings
            .credential
            .as_ref()
            .ok_or(WeatherError::MissingCredential)?;

        query.push(("Authorization", credential.expose().to_string()));
        query.push(("format", "JSON".to_string()));

        debug!(%dataset, "fetching CWA dataset");

        let res = self
            .http
            .get(self.dataset_url(dataset))
            .query(&query)
            .send()
            .await
            .map_err(|e| self.transport_failure(dataset, e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| self.transport_failure(dataset, e))?;

        if !status.is_success() {
            let message = format!(
                "CWA request for {dataset} failed with status {status}: {}",
                truncate_body(&body)
            );
            warn!(%dataset, %status, "CWA returned an error status");
            return Err(WeatherError::fetch(dataset, message));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(%dataset, error = %e, "CWA returned malformed JSON");
            WeatherError::fetch(dataset, format!("Failed to parse {dataset} JSON: {e}"))
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credential;
    use serde_json::json;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: &str, timeout: Duration) -> ClientSettings {
        ClientSettings {
            base_url: base_url.to_string(),
            timeout,
            credential: Credential::new("CWA-TEST-KEY"),
        }
    }

    fn client(server: &MockServer) -> CwaClient {
        CwaClient::new(settings(&server.uri(), Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn fetch_injects_credential_and_format() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/F-C0032-001"))
            .and(query_param("Authorization", "CWA-TEST-KEY"))
            .and(query_param("format", "JSON"))
            .and(query_param("locationName", "臺北市"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": "true" })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client(&server)
            .fetch(DatasetId::Forecast36h, vec![("locationName", "臺北市".to_string())])
            .await
            .unwrap();

        assert_eq!(body["success"], "true");
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut s = settings(&server.uri(), Duration::from_secs(5));
        s.credential = None;
        let err = CwaClient::new(s).unwrap().fetch(DatasetId::Observation, Vec::new()).await.unwrap_err();

        assert!(matches!(err, WeatherError::MissingCredential));
        assert!(err.to_string().contains("CWA_API_KEY"));
    }

    #[tokio::test]
    async fn error_status_becomes_fetch_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/E-A0015-001"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client(&server)
            .fetch(DatasetId::EarthquakeSignificant, Vec::new())
            .await
            .unwrap_err();

        match err {
            WeatherError::Fetch { dataset, message } => {
                assert_eq!(dataset, DatasetId::EarthquakeSignificant);
                assert!(message.contains("401"));
                assert!(message.contains("Unauthorized"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_becomes_fetch_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client(&server).fetch(DatasetId::Observation, Vec::new()).await.unwrap_err();

        assert!(matches!(err, WeatherError::Fetch { .. }));
        assert!(err.to_string().contains("Failed to parse O-A0003-001 JSON"));
    }

    #[tokio::test]
    async fn slow_upstream_times_out_within_bound() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let timeout = Duration::from_millis(200);
        let client = CwaClient::new(settings(&server.uri(), timeout)).unwrap();

        let started = Instant::now();
        let err = client.fetch(DatasetId::Forecast36h, Vec::new()).await.unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(err.to_string().contains("timed out"));
        assert!(!err.to_string().contains("CWA-TEST-KEY"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "天".repeat(100);
        let out = truncate_body(&body);

        assert!(out.ends_with("..."));
        assert!(out.len() <= 203);
    }
}
