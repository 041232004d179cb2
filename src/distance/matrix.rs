//! Dense distance matrix.

use crate::error::{Result, RouteError};
use crate::models::{TourShape, Waypoint};

use super::haversine::haversine_km;

/// A dense n×n distance matrix in kilometers, stored in row-major order.
///
/// Built from waypoints it is symmetric with a zero diagonal. Explicit data
/// can be supplied for testing or for distances from another source.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Waypoint;
/// use u_itinerary::distance::DistanceMatrix;
///
/// let waypoints = vec![
///     Waypoint::new("A", 0.0, 0.0),
///     Waypoint::new("B", 0.0, 1.0),
///     Waypoint::new("C", 1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_waypoints(&waypoints).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.get(0, 2), dm.get(2, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a haversine distance matrix from waypoint coordinates.
    ///
    /// Every waypoint is validated before any distance is computed. Each of
    /// the `n(n-1)/2` unique pairs is evaluated once and mirrored.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InsufficientWaypoints`] if fewer than two waypoints are given
    /// - [`RouteError::InvalidCoordinate`] if any coordinate is out of range
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Result<Self> {
        let n = waypoints.len();
        if n < 2 {
            return Err(RouteError::InsufficientWaypoints { count: n });
        }
        for w in waypoints {
            w.validate()?;
        }

        let coords: Vec<(f64, f64)> = waypoints
            .iter()
            .map(|w| (w.latitude(), w.longitude()))
            .collect();

        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(coords[i], coords[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first, so ascending candidates break
    /// ties by lowest index. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Total length of visiting `order` front to back.
    ///
    /// For [`TourShape::Closed`] the leg from the last index back to the first
    /// is included. Orders with fewer than two entries have length zero.
    pub fn path_length(&self, order: &[usize], shape: TourShape) -> f64 {
        let mut total: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        if shape == TourShape::Closed {
            if let (Some(&first), Some(&last)) = (order.first(), order.last()) {
                total += self.get(last, first);
            }
        }
        total
    }
}
