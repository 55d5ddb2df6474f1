use crate::dataset::DatasetId;

pub type Result<T> = std::result::Result<T, WeatherError>;

/// Failures that can surface from a tool call.
///
/// An empty upstream result is not an error: extractors return an empty record
/// list and the report layer renders the dataset's "no data" sentence.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error(
        "Missing CWA_API_KEY environment variable. Please obtain one from https://opendata.cwa.gov.tw/"
    )]
    MissingCredential,

    #[error("{message}")]
    Fetch { dataset: DatasetId, message: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl WeatherError {
    pub(crate) fn fetch(dataset: DatasetId, message: impl Into<String>) -> Self {
        WeatherError::Fetch { dataset, message: message.into() }
    }
}
