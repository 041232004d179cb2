//! Transport modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Means of travel used to price a tour.
///
/// # Examples
///
/// ```
/// use u_itinerary::cost::TransportMode;
///
/// let mode: TransportMode = "Train".parse().unwrap();
/// assert_eq!(mode, TransportMode::Train);
/// assert_eq!(mode.to_string(), "train");
/// assert!("bicycle".parse::<TransportMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Air travel.
    Plane,
    /// Rail travel.
    Train,
    /// Road travel.
    Car,
}

impl TransportMode {
    /// All modes, in declaration order.
    pub const ALL: [TransportMode; 3] = [Self::Plane, Self::Train, Self::Car];

    /// Lowercase name as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Train => "train",
            Self::Car => "car",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RouteError::InvalidInput(format!("unknown transport mode `{s}`")))
    }
}
