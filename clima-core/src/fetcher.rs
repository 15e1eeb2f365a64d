use reqwest::Client;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::{
    error::FetchError,
    location::{LocationSource, select_fix},
    model::{Coordinates, WeatherQuery, WeatherReading},
};

pub type FetchResult = Result<WeatherReading, FetchError>;

/// Fetches current conditions from an OpenWeatherMap-compatible endpoint.
///
/// Holds no mutable state, so clones can run concurrent fetches freely.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl WeatherFetcher {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_by_coordinates(&self, latitude: f64, longitude: f64) -> FetchResult {
        self.fetch(&WeatherQuery::Coordinates(Coordinates::new(latitude, longitude)))
            .await
    }

    pub async fn fetch_by_city_name(&self, name: &str) -> FetchResult {
        self.fetch(&WeatherQuery::CityName(name.to_owned())).await
    }

    /// Resolves the current position through `source`, then fetches by coordinates.
    ///
    /// No request is made when the source fails or has no usable fix.
    pub async fn fetch_current_location(&self, source: &dyn LocationSource) -> FetchResult {
        let updates = source
            .updates()
            .await
            .inspect_err(|err| warn!(%err, "location source failed"))?;

        let coordinates = select_fix(&updates)
            .inspect_err(|err| warn!(%err, updates = updates.len(), "no usable location fix"))?;

        self.fetch(&WeatherQuery::Coordinates(coordinates)).await
    }

    /// One request/response cycle. Resolves exactly once, to a reading or an error.
    pub async fn fetch(&self, query: &WeatherQuery) -> FetchResult {
        debug!(kind = query.kind(), endpoint = %self.endpoint, "requesting current weather");

        let mut params = query.params();
        params.push(("appid", self.api_key.clone()));

        let res = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .inspect_err(|err| warn!(%err, "weather request failed"))?
            .error_for_status()
            .inspect_err(|err| warn!(status = ?err.status(), "weather request rejected"))?;

        let body: Value = res
            .json()
            .await
            .inspect_err(|err| warn!(%err, "weather response was not JSON"))?;

        let reading =
            parse_reading(&body).inspect_err(|err| warn!(%err, "weather response rejected"))?;

        debug!(
            city = reading.city(),
            temperature = reading.temperature_celsius(),
            code = reading.condition_code(),
            "weather reading ready"
        );

        Ok(reading)
    }

    /// Runs `fetch` on the current tokio runtime and delivers its result on a channel.
    ///
    /// Must be called from within a runtime. Dropping the receiver discards the result.
    pub fn spawn(&self, query: WeatherQuery) -> oneshot::Receiver<FetchResult> {
        let (tx, rx) = oneshot::channel();
        let fetcher = self.clone();

        tokio::spawn(async move {
            let outcome = fetcher.fetch(&query).await;
            if tx.send(outcome).is_err() {
                debug!("weather result dropped, receiver gone");
            }
        });

        rx
    }
}

/// Normalizes a current-weather payload.
///
/// Only `main.temp` is required. A missing `name` becomes an empty city and a
/// missing `weather[0].id` becomes code 0, which maps to the default icon.
pub fn parse_reading(body: &Value) -> FetchResult {
    let kelvin = body
        .pointer("/main/temp")
        .and_then(Value::as_f64)
        .ok_or_else(|| FetchError::MalformedPayload("missing numeric main.temp".to_string()))?;

    let city = body
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let condition_code = body
        .pointer("/weather/0/id")
        .and_then(Value::as_i64)
        .and_then(|id| i32::try_from(id).ok())
        .unwrap_or(0);

    Ok(WeatherReading::from_kelvin(city, kelvin, condition_code))
}
