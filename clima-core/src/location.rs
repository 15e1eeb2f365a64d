//! The coordinate-providing collaborator.
//!
//! Platform location services are out of scope; anything that can yield
//! recent position fixes implements [`LocationSource`].

use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::Coordinates;

/// A single position update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub coordinates: Coordinates,
    /// Radius of uncertainty in meters. Zero or negative means the fix is invalid.
    pub horizontal_accuracy_m: f64,
}

impl LocationFix {
    pub fn is_usable(&self) -> bool {
        self.horizontal_accuracy_m > 0.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("No usable location fix")]
    NoFix,
    #[error("Location error: {0}")]
    Other(String),
}

#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    /// Returns the updates received so far, oldest first.
    async fn updates(&self) -> Result<Vec<LocationFix>, LocationError>;
}

/// Picks the most recent update, if it is usable.
pub fn select_fix(updates: &[LocationFix]) -> Result<Coordinates, LocationError> {
    updates
        .last()
        .filter(|fix| fix.is_usable())
        .map(|fix| fix.coordinates)
        .ok_or(LocationError::NoFix)
}

/// A source that always reports the same position, e.g. from user input.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    fix: LocationFix,
}

impl FixedLocation {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            fix: LocationFix {
                coordinates,
                horizontal_accuracy_m: 1.0,
            },
        }
    }
}

#[async_trait]
impl LocationSource for FixedLocation {
    async fn updates(&self) -> Result<Vec<LocationFix>, LocationError> {
        Ok(vec![self.fix])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(lat: f64, accuracy: f64) -> LocationFix {
        LocationFix {
            coordinates: Coordinates::new(lat, 0.0),
            horizontal_accuracy_m: accuracy,
        }
    }

    #[test]
    fn last_update_wins() {
        let coords = select_fix(&[fix(1.0, 50.0), fix(2.0, 10.0)]).unwrap();
        assert_eq!(coords.latitude, 2.0);
    }

    #[test]
    fn invalid_last_update_is_rejected() {
        let err = select_fix(&[fix(1.0, 50.0), fix(2.0, -1.0)]).unwrap_err();
        assert!(matches!(err, LocationError::NoFix));
    }

    #[test]
    fn empty_updates_are_rejected() {
        assert!(matches!(select_fix(&[]), Err(LocationError::NoFix)));
    }

    #[tokio::test]
    async fn fixed_location_yields_usable_fix() {
        let source = FixedLocation::new(Coordinates::new(48.85, 2.35));
        let updates = source.updates().await.unwrap();

        assert_eq!(select_fix(&updates).unwrap(), Coordinates::new(48.85, 2.35));
    }
}
