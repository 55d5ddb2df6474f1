use std::fmt;

/// Upstream data collections served by the CWA open-data datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetId {
    /// 36-hour county/city forecast.
    Forecast36h,
    /// Automatic weather station observations.
    Observation,
    /// Numbered (significant) earthquake reports.
    EarthquakeSignificant,
    /// Small regional earthquake reports.
    EarthquakeSmall,
}

impl DatasetId {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetId::Forecast36h => "F-C0032-001",
            DatasetId::Observation => "O-A0003-001",
            DatasetId::EarthquakeSignificant => "E-A0015-001",
            DatasetId::EarthquakeSmall => "E-A0016-001",
        }
    }

    pub const fn all() -> &'static [DatasetId] {
        &[
            DatasetId::Forecast36h,
            DatasetId::Observation,
            DatasetId::EarthquakeSignificant,
            DatasetId::EarthquakeSmall,
        ]
    }

    pub fn earthquakes(include_small: bool) -> Self {
        if include_small { DatasetId::EarthquakeSmall } else { DatasetId::EarthquakeSignificant }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DatasetId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DatasetId::all()
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                let supported: Vec<_> = DatasetId::all().iter().map(DatasetId::as_str).collect();
                anyhow::anyhow!(
                    "Unknown dataset '{value}'. Supported datasets: {}.",
                    supported.join(", ")
                )
            })
    }
}
