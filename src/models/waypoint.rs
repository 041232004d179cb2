//! Named geographic waypoint.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// A named point on the globe that a tour must visit.
///
/// Names identify waypoints within a single request only. Coordinates are in
/// decimal degrees. Construction does not validate; call [`Waypoint::validate`]
/// (the optimizer does this before any solver runs).
///
/// Deserialization accepts `lat`/`lng`/`lon` as aliases and ignores any extra
/// fields, so city records enriched with weather data can be fed in directly.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Waypoint;
///
/// let paris = Waypoint::new("Paris", 48.8566, 2.3522);
/// assert_eq!(paris.name(), "Paris");
/// assert!(paris.validate().is_ok());
///
/// let bad = Waypoint::new("Nowhere", 95.0, 0.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    name: String,
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    longitude: f64,
}

impl Waypoint {
    /// Creates a waypoint.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Waypoint name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Checks that latitude lies in [-90, 90] and longitude in [-180, 180].
    ///
    /// Non-finite values are rejected as well.
    pub fn validate(&self) -> Result<()> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(RouteError::InvalidCoordinate {
                name: self.name.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}
