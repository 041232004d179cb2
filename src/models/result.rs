//! Costed optimization result.

use serde::{Deserialize, Serialize};

use super::Waypoint;
use crate::cost::TransportMode;
use crate::solver::Algorithm;

/// Final artifact of one optimization request.
///
/// Serializes in camelCase, matching the JSON shape the route API returns.
/// Attaching user identity or persistence metadata is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostedResult {
    /// Waypoints in visiting order.
    pub path: Vec<Waypoint>,
    /// Indices into the request's waypoint list, in visiting order.
    pub order: Vec<usize>,
    /// Total tour distance in kilometers.
    pub total_distance: f64,
    /// Transport mode used for costing.
    pub transport_mode: TransportMode,
    /// `total_distance * rate(transport_mode)`.
    pub total_cost: f64,
    /// Wall-clock solver time in milliseconds (matrix build and costing excluded).
    pub execution_time_ms: f64,
    /// Solver that produced the tour.
    pub algorithm: Algorithm,
}

impl CostedResult {
    /// Waypoint names in visiting order.
    pub fn names(&self) -> Vec<&str> {
        self.path.iter().map(Waypoint::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostedResult {
        CostedResult {
            path: vec![Waypoint::new("A", 0.0, 0.0), Waypoint::new("B", 0.0, 1.0)],
            order: vec![0, 1],
            total_distance: 111.19,
            transport_mode: TransportMode::Car,
            total_cost: 11.119,
            execution_time_ms: 0.01,
            algorithm: Algorithm::Greedy,
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(sample().names(), vec!["A", "B"]);
    }

    #[test]
    fn test_camel_case_fields() {
        let value = serde_json::to_value(sample()).expect("serializable");
        assert_eq!(value["totalDistance"], 111.19);
        assert_eq!(value["transportMode"], "car");
        assert_eq!(value["algorithm"], "greedy");
        assert!(value.get("executionTimeMs").is_some());
        assert_eq!(value["path"][1]["name"], "B");
    }
}
