//! Tour, tour shape, and solver output types.

use serde::{Deserialize, Serialize};

/// Whether a tour returns to its origin after the last waypoint.
///
/// `Open` tours end at the last visited waypoint. `Closed` tours add the
/// edge from the last waypoint back to the origin to the total distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourShape {
    /// Hamiltonian path from the origin.
    #[default]
    Open,
    /// Hamiltonian cycle through the origin.
    Closed,
}

/// An ordered visiting sequence over waypoint indices.
///
/// A valid tour is a permutation of `0..n` starting at the origin (index 0).
/// The return leg of a closed tour is implied and not stored.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1]);
/// assert!(tour.is_permutation_of(3));
/// assert!(!Tour::new(vec![0, 0, 1]).is_permutation_of(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps an index sequence.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Waypoint indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns `true` if every index in `0..n` appears exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Consumes the tour, returning the index sequence.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

/// Output of a single solver invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Visiting order.
    pub tour: Tour,
    /// Sum of consecutive leg distances along `tour` in kilometers,
    /// including the return leg for closed tours.
    pub total_distance: f64,
}
