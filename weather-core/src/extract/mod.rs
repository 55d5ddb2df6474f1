//! Normalization of raw CWA payloads into record lists.
//!
//! Extractors never fail: a malformed location or station is dropped, and a
//! missing reading becomes `None`.

pub mod earthquake;
pub mod forecast;
pub mod observation;

pub use earthquake::{DEFAULT_EARTHQUAKE_LIMIT, extract_earthquakes};
pub use forecast::extract_forecast;
pub use observation::{MAX_OBSERVATIONS, extract_observations};
