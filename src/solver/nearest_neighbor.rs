//! Nearest-neighbor tour construction.
//!
//! Builds a tour greedily: starting from the origin (index 0), always move to
//! the nearest unvisited waypoint. Ties go to the lowest index. The start is
//! fixed, so the result is deterministic.
//!
//! # Complexity
//!
//! O(n²) where n = number of waypoints.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. It gives no optimality
//! guarantee and typically lands 15-25% above optimal, but it scales to
//! instances far beyond the exact solver's reach.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::models::{SolveResult, Tour, TourShape};

use super::TourSolver;

/// Greedy nearest-neighbor solver.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::models::TourShape;
/// use u_itinerary::solver::{NearestNeighbor, TourSolver};
///
/// // Points on a line at 0, 10, 1, 3.
/// let pos = [0.0_f64, 10.0, 1.0, 3.0];
/// let data: Vec<f64> = pos
///     .iter()
///     .flat_map(|a| pos.iter().map(move |b| (a - b).abs()))
///     .collect();
/// let dm = DistanceMatrix::from_data(4, data).unwrap();
///
/// let result = NearestNeighbor::new(TourShape::Open).solve(&dm).unwrap();
/// assert_eq!(result.tour.order(), &[0, 2, 3, 1]);
/// assert_eq!(result.total_distance, 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor {
    shape: TourShape,
}

impl NearestNeighbor {
    /// Creates a solver producing tours of the given shape.
    pub fn new(shape: TourShape) -> Self {
        Self { shape }
    }
}

impl TourSolver for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn solve(&self, distances: &DistanceMatrix) -> Result<SolveResult> {
        let n = distances.size();
        if n < 2 {
            return Err(RouteError::InsufficientWaypoints { count: n });
        }

        // Kept in ascending order so ties resolve to the lowest index.
        let mut remaining: Vec<usize> = (1..n).collect();
        let mut order = Vec::with_capacity(n);
        let mut current = 0;
        order.push(current);

        while let Some(next) = distances.nearest_neighbor(current, &remaining) {
            remaining.retain(|&i| i != next);
            order.push(next);
            current = next;
        }

        let total_distance = distances.path_length(&order, self.shape);
        Ok(SolveResult {
            tour: Tour::new(order),
            total_distance,
        })
    }
}
