//! Tool catalog and call dispatch.
//!
//! The catalog is static and can be listed before any call. [`Dispatcher::call`]
//! always produces a [`ToolOutput`]; failures come back as `Error: ...` text
//! with `is_error` set.

use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    dataset::DatasetId,
    error::{Result, WeatherError},
    extract::{DEFAULT_EARTHQUAKE_LIMIT, extract_earthquakes, extract_forecast, extract_observations},
    report::{format_earthquakes, format_forecast, format_observations},
    source::{DatasetSource, location_query},
};

pub const FORECAST_TOOL: &str = "get_weather_forecast_36h";
pub const OBSERVATION_TOOL: &str = "get_current_observation";
pub const EARTHQUAKE_TOOL: &str = "get_latest_earthquakes";

/// A catalog entry as advertised to the host.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub fn catalog() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: FORECAST_TOOL,
            description: "Get the 36-hour weather forecast for a specific city in Taiwan.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location_name": {
                        "type": "string",
                        "description": "City or County name in Traditional Chinese (e.g., '臺北市', '高雄市'). Omit for all locations."
                    }
                }
            }),
        },
        ToolSpec {
            name: OBSERVATION_TOOL,
            description: "Get real-time weather data (Temp, Rain, Humidity) for a specific location or station.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location_name": {
                        "type": "string",
                        "description": "Station name or City name (e.g., '臺北', '板橋')."
                    }
                },
                "required": ["location_name"]
            }),
        },
        ToolSpec {
            name: EARTHQUAKE_TOOL,
            description: "Get the most recent significant earthquake reports in Taiwan.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Number of reports to return (default 3).",
                        "default": DEFAULT_EARTHQUAKE_LIMIT
                    },
                    "include_small": {
                        "type": "boolean",
                        "description": "Include small regional earthquakes (default False).",
                        "default": false
                    }
                }
            }),
        },
    ]
}

/// A validated call with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    Forecast { location_name: Option<String> },
    Observation { location_name: String },
    Earthquakes { limit: i64, include_small: bool },
}

impl ToolCall {
    /// `args` may be `null` (no arguments) or an object.
    pub fn parse(name: &str, args: &Value) -> Result<Self> {
        if !catalog().iter().any(|tool| tool.name == name) {
            return Err(WeatherError::UnknownTool(name.to_string()));
        }

        let empty = serde_json::Map::new();
        let args = match args {
            Value::Null => &empty,
            Value::Object(map) => map,
            _ => return Err(WeatherError::InvalidArgument("arguments must be an object".into())),
        };
        let arg = |key: &str| args.get(key).filter(|v| !v.is_null());

        match name {
            FORECAST_TOOL => {
                let location_name = arg("location_name").map(|v| string_arg("location_name", v)).transpose()?;
                Ok(ToolCall::Forecast { location_name })
            }
            OBSERVATION_TOOL => {
                let location_name = arg("location_name")
                    .map(|v| string_arg("location_name", v))
                    .transpose()?
                    .filter(|s| !s.trim().is_empty())
                    .ok_or_else(|| WeatherError::InvalidArgument("location_name is required".into()))?;
                Ok(ToolCall::Observation { location_name })
            }
            EARTHQUAKE_TOOL => {
                let limit = match arg("limit") {
                    Some(v) => v.as_i64().ok_or_else(|| {
                        WeatherError::InvalidArgument(format!("limit must be an integer, got {v}"))
                    })?,
                    None => DEFAULT_EARTHQUAKE_LIMIT,
                };
                let include_small = match arg("include_small") {
                    Some(v) => v.as_bool().ok_or_else(|| {
                        WeatherError::InvalidArgument(format!("include_small must be a boolean, got {v}"))
                    })?,
                    None => false,
                };
                Ok(ToolCall::Earthquakes { limit, include_small })
            }
            other => Err(WeatherError::UnknownTool(other.to_string())),
        }
    }
}

fn string_arg(key: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| WeatherError::InvalidArgument(format!("{key} must be a string, got {value}")))
}

/// Text reply for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(err: &WeatherError) -> Self {
        Self { text: format!("Error: {err}"), is_error: true }
    }
}

/// Routes named calls to the fetch → extract → format pipeline.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    source: Arc<dyn DatasetSource>,
}

impl Dispatcher {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    pub fn catalog(&self) -> Vec<ToolSpec> {
        catalog()
    }

    pub async fn call(&self, name: &str, args: &Value) -> ToolOutput {
        match self.run(name, args).await {
            Ok(text) => ToolOutput::text(text),
            Err(err) => {
                warn!(tool = name, error = %err, "tool call failed");
                ToolOutput::error(&err)
            }
        }
    }

    async fn run(&self, name: &str, args: &Value) -> Result<String> {
        let call = ToolCall::parse(name, args)?;
        info!(tool = name, ?call, "dispatching tool call");
        self.execute(call).await
    }

    pub async fn execute(&self, call: ToolCall) -> Result<String> {
        match call {
            ToolCall::Forecast { location_name } => {
                let payload = self
                    .source
                    .fetch(DatasetId::Forecast36h, location_query(location_name.as_deref()))
                    .await?;
                Ok(format_forecast(&extract_forecast(&payload)))
            }
            ToolCall::Observation { location_name } => {
                let payload = self
                    .source
                    .fetch(DatasetId::Observation, location_query(Some(&location_name)))
                    .await?;
                Ok(format_observations(&extract_observations(&payload), &location_name))
            }
            ToolCall::Earthquakes { limit, include_small } => {
                let payload = self
                    .source
                    .fetch(DatasetId::earthquakes(include_small), Vec::new())
                    .await?;
                Ok(format_earthquakes(&extract_earthquakes(&payload, limit)))
            }
        }
    }
}
