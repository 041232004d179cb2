//! Error type shared by every engine operation.
//!
//! All failures are input-validation failures. They are deterministic for a
//! given input, so callers should surface them rather than retry.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors returned by the itinerary engine.
///
/// # Examples
///
/// ```
/// use u_itinerary::error::RouteError;
///
/// let err = RouteError::InsufficientWaypoints { count: 1 };
/// assert_eq!(err.kind(), "insufficient_waypoints");
/// assert_eq!(err.to_string(), "at least 2 waypoints are required, got 1");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// A latitude or longitude is outside its valid range or not finite.
    #[error("invalid coordinate for waypoint `{name}`: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Name of the offending waypoint.
        name: String,
        /// Latitude as supplied, in degrees.
        latitude: f64,
        /// Longitude as supplied, in degrees.
        longitude: f64,
    },

    /// Fewer than two waypoints were supplied.
    #[error("at least 2 waypoints are required, got {count}")]
    InsufficientWaypoints {
        /// Number of waypoints supplied.
        count: usize,
    },

    /// Malformed request or configuration (unknown algorithm, unknown mode
    /// string, duplicate names, bad rate, bad ceiling).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The transport mode is valid but has no rate in the configured table.
    #[error("no rate configured for transport mode `{0}`")]
    UnknownTransportMode(String),

    /// The exact solver was asked for more waypoints than its ceiling allows.
    #[error("exact solver supports at most {max} waypoints, got {count}")]
    ProblemTooLarge {
        /// Number of waypoints requested.
        count: usize,
        /// Configured ceiling.
        max: usize,
    },
}

impl RouteError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate { .. } => "invalid_coordinate",
            Self::InsufficientWaypoints { .. } => "insufficient_waypoints",
            Self::InvalidInput(_) => "invalid_input",
            Self::UnknownTransportMode(_) => "unknown_transport_mode",
            Self::ProblemTooLarge { .. } => "problem_too_large",
        }
    }
}
