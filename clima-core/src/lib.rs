//! Core library for the `clima` weather client.
//!
//! This crate defines:
//! - Configuration of the weather endpoint and credential
//! - The `WeatherFetcher`, which turns a city name or coordinates into a reading
//! - Shared domain models (queries, readings, location fixes) and errors
//!
//! It is used by `clima-cli`, but can also be reused by other front ends.

pub mod condition;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod location;
pub mod model;

pub use condition::icon_for_condition;
pub use config::Config;
pub use error::FetchError;
pub use fetcher::{FetchResult, WeatherFetcher};
pub use location::{FixedLocation, LocationError, LocationFix, LocationSource};
pub use model::{Coordinates, WeatherQuery, WeatherReading};
