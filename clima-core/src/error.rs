use crate::location::LocationError;

/// Why a single fetch produced no reading.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Weather service unreachable: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather data unavailable: {0}")]
    MalformedPayload(String),
    #[error("Location unavailable: {0}")]
    LocationUnavailable(#[from] LocationError),
}

impl FetchError {
    /// Short message suitable for showing in place of a reading.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "Connection issues",
            FetchError::MalformedPayload(_) => "Weather Unavailable",
            FetchError::LocationUnavailable(_) => "Location Unavailable",
        }
    }
}
