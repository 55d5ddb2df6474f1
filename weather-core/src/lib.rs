//! Core library for the Taiwan CWA weather MCP server.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The upstream CWA open-data client
//! - Extraction of forecast, observation and earthquake records
//! - Fixed-layout text reports and the tool catalog/dispatcher
//!
//! It is used by `cwa-weather-mcp`, but has no protocol or transport code of its own.

pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod json;
pub mod model;
pub mod report;
pub mod source;
pub mod tools;

pub use config::{ClientSettings, Config, Credential};
pub use dataset::DatasetId;
pub use error::{Result, WeatherError};
pub use model::{EarthquakeRecord, ForecastRecord, ObservationRecord};
pub use source::{CwaClient, DatasetSource};
pub use tools::{Dispatcher, ToolCall, ToolOutput, ToolSpec, catalog};
