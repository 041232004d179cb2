//! Tour solvers.
//!
//! - [`NearestNeighbor`] — Greedy nearest-neighbor construction, O(n²)
//! - [`HeldKarp`] — Exact bitmask dynamic programming (Held & Karp, 1962), O(2ⁿn²)
//!
//! Both start at index 0 and share the same [`TourShape`](crate::models::TourShape)
//! convention, so their distances are directly comparable.

mod held_karp;
mod nearest_neighbor;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::models::SolveResult;

pub use held_karp::{HeldKarp, DEFAULT_MAX_EXACT_WAYPOINTS, MAX_SUPPORTED_EXACT_WAYPOINTS};
pub use nearest_neighbor::NearestNeighbor;

/// A solver that orders every location of a distance matrix into a tour.
///
/// Implementations must return a permutation of `0..n` beginning at 0, with
/// `total_distance` equal to the matrix path length of that order.
pub trait TourSolver: Send + Sync {
    /// Short solver name for logs.
    fn name(&self) -> &'static str;

    /// Solves the instance described by `distances`.
    fn solve(&self, distances: &DistanceMatrix) -> Result<SolveResult>;
}

/// Solver selector accepted by the optimizer.
///
/// Parsing is case-insensitive. `"dynamic"` and `"held-karp"` select the
/// exact solver; `"nearest-neighbor"` selects the greedy one.
///
/// # Examples
///
/// ```
/// use u_itinerary::solver::Algorithm;
///
/// assert_eq!("greedy".parse::<Algorithm>().unwrap(), Algorithm::Greedy);
/// assert_eq!("dynamic".parse::<Algorithm>().unwrap(), Algorithm::Exact);
/// assert!("bicycle".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Nearest-neighbor heuristic.
    Greedy,
    /// Held-Karp dynamic programming.
    Exact,
}

impl Algorithm {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" | "nearest-neighbor" => Ok(Self::Greedy),
            "exact" | "dynamic" | "held-karp" => Ok(Self::Exact),
            _ => Err(RouteError::InvalidInput(format!(
                "unknown algorithm `{s}`, expected `greedy` or `exact`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        for s in ["greedy", "GREEDY", " nearest-neighbor "] {
            assert_eq!(s.parse::<Algorithm>(), Ok(Algorithm::Greedy), "{s}");
        }
        for s in ["exact", "Dynamic", "held-karp"] {
            assert_eq!(s.parse::<Algorithm>(), Ok(Algorithm::Exact), "{s}");
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bicycle".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
        assert!(err.to_string().contains("bicycle"));
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Algorithm::Exact.to_string(), "exact");
        assert_eq!(
            serde_json::to_string(&Algorithm::Greedy).expect("serializable"),
            "\"greedy\""
        );
    }

    #[test]
    fn test_solvers_as_trait_objects() {
        let solvers: Vec<Box<dyn TourSolver>> = vec![
            Box::new(NearestNeighbor::default()),
            Box::new(HeldKarp::default()),
        ];
        let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0])
            .expect("square");
        for s in &solvers {
            let res = s.solve(&dm).expect("solvable");
            assert!(res.tour.is_permutation_of(3), "{}", s.name());
            assert_eq!(res.total_distance, 2.0, "{}", s.name());
        }
    }
}
