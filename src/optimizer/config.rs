//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::cost::RateTable;
use crate::error::{Result, RouteError};
use crate::models::TourShape;
use crate::solver::{DEFAULT_MAX_EXACT_WAYPOINTS, MAX_SUPPORTED_EXACT_WAYPOINTS};

/// Settings shared by every request an [`Optimizer`](super::Optimizer) serves.
///
/// Missing JSON fields fall back to their defaults: exact ceiling 16, open
/// tours, and the plane/train/car rate table.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::TourShape;
/// use u_itinerary::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::from_json(r#"{ "tourShape": "closed" }"#).unwrap();
/// assert_eq!(config.tour_shape(), TourShape::Closed);
/// assert_eq!(config.max_exact_waypoints(), 16);
///
/// let config = OptimizerConfig::default().with_max_exact_waypoints(12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    max_exact_waypoints: usize,
    tour_shape: TourShape,
    rates: RateTable,
}

impl OptimizerConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RouteError::InvalidInput(format!("invalid optimizer config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the largest waypoint count the exact solver will accept.
    pub fn with_max_exact_waypoints(mut self, max: usize) -> Self {
        self.max_exact_waypoints = max;
        self
    }

    /// Sets the tour shape used by both solvers.
    pub fn with_tour_shape(mut self, shape: TourShape) -> Self {
        self.tour_shape = shape;
        self
    }

    /// Replaces the rate table.
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Largest waypoint count the exact solver will accept.
    pub fn max_exact_waypoints(&self) -> usize {
        self.max_exact_waypoints
    }

    /// Tour shape used by both solvers.
    pub fn tour_shape(&self) -> TourShape {
        self.tour_shape
    }

    /// Per-kilometer rates.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Checks the exact ceiling lies in `2..=20` and every rate is valid.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_SUPPORTED_EXACT_WAYPOINTS).contains(&self.max_exact_waypoints) {
            return Err(RouteError::InvalidInput(format!(
                "maxExactWaypoints must be between 2 and {MAX_SUPPORTED_EXACT_WAYPOINTS}, got {}",
                self.max_exact_waypoints
            )));
        }
        self.rates.validate()
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_exact_waypoints: DEFAULT_MAX_EXACT_WAYPOINTS,
            tour_shape: TourShape::Open,
            rates: RateTable::default(),
        }
    }
}
