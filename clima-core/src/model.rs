use serde::{Deserialize, Serialize};

use crate::condition::icon_for_condition;

const KELVIN_OFFSET: f64 = 273.15;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// What to look the weather up by.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    Coordinates(Coordinates),
    CityName(String),
}

impl WeatherQuery {
    /// Query parameters for this lookup, without the credential.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            WeatherQuery::Coordinates(c) => vec![
                ("lat", c.latitude.to_string()),
                ("lon", c.longitude.to_string()),
            ],
            WeatherQuery::CityName(name) => vec![("q", name.clone())],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            WeatherQuery::Coordinates(_) => "coordinates",
            WeatherQuery::CityName(_) => "city",
        }
    }
}

/// A normalized weather snapshot for one location.
///
/// Built once per successful fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReading {
    city: String,
    temperature_celsius: i32,
    condition_code: i32,
    icon_name: &'static str,
}

impl WeatherReading {
    /// Builds a reading from a raw Kelvin temperature.
    ///
    /// Celsius is truncated toward zero, so 300.0 K gives 26, not 27.
    pub fn from_kelvin(city: String, kelvin: f64, condition_code: i32) -> Self {
        Self {
            city,
            temperature_celsius: kelvin_to_celsius(kelvin),
            condition_code,
            icon_name: icon_for_condition(condition_code),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn temperature_celsius(&self) -> i32 {
        self.temperature_celsius
    }

    pub fn condition_code(&self) -> i32 {
        self.condition_code
    }

    pub fn icon_name(&self) -> &'static str {
        self.icon_name
    }
}

fn kelvin_to_celsius(kelvin: f64) -> i32 {
    // `as` truncates toward zero and saturates on out-of-range values.
    (kelvin - KELVIN_OFFSET) as i32
}
