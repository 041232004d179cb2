//! Exact tour search by Held-Karp dynamic programming.
//!
//! # Algorithm
//!
//! The origin (index 0) is fixed as the first waypoint. For every subset `S`
//! of the remaining waypoints and every `j ∈ S`, the table holds
//!
//! ```text
//! C(S, j) = min cost of a path that leaves the origin, visits exactly S,
//!           and ends at j
//! C({j}, j)    = d(0, j)
//! C(S ∪ {k}, k) = min over j ∈ S of C(S, j) + d(j, k)
//! ```
//!
//! The answer is `min_j C(all, j)` for an open tour, or
//! `min_j C(all, j) + d(j, 0)` for a closed one. The predecessor of each
//! entry is stored alongside it so the optimal path can be walked back.
//!
//! # Complexity
//!
//! O(2ⁿ·n²) time and O(2ⁿ·n) memory. The solver refuses instances above its
//! configured ceiling before allocating anything.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A Dynamic Programming Approach to
//! Sequencing Problems", *Journal of the SIAM* 10(1), 196-210.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::models::{SolveResult, Tour, TourShape};

use super::TourSolver;

/// Default waypoint ceiling for the exact solver.
pub const DEFAULT_MAX_EXACT_WAYPOINTS: usize = 16;

/// Largest ceiling that may be configured. At 20 waypoints the tables take
/// roughly 120 MB.
pub const MAX_SUPPORTED_EXACT_WAYPOINTS: usize = 20;

const NO_PARENT: u32 = u32::MAX;

/// Exact Held-Karp solver with a waypoint ceiling.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::models::TourShape;
/// use u_itinerary::solver::{HeldKarp, TourSolver};
///
/// // Points on a line at 0, 10, 1, 3.
/// let pos = [0.0_f64, 10.0, 1.0, 3.0];
/// let data: Vec<f64> = pos
///     .iter()
///     .flat_map(|a| pos.iter().map(move |b| (a - b).abs()))
///     .collect();
/// let dm = DistanceMatrix::from_data(4, data).unwrap();
///
/// let open = HeldKarp::default().solve(&dm).unwrap();
/// assert_eq!(open.total_distance, 10.0);
///
/// let closed = HeldKarp::default().with_shape(TourShape::Closed).solve(&dm).unwrap();
/// assert_eq!(closed.total_distance, 20.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeldKarp {
    max_waypoints: usize,
    shape: TourShape,
}

impl HeldKarp {
    /// Creates a solver accepting at most `max_waypoints` waypoints.
    ///
    /// The ceiling is clamped to [`MAX_SUPPORTED_EXACT_WAYPOINTS`].
    pub fn new(max_waypoints: usize) -> Self {
        Self {
            max_waypoints: max_waypoints.min(MAX_SUPPORTED_EXACT_WAYPOINTS),
            shape: TourShape::Open,
        }
    }

    /// Sets the tour shape.
    pub fn with_shape(mut self, shape: TourShape) -> Self {
        self.shape = shape;
        self
    }

    /// Configured waypoint ceiling.
    pub fn max_waypoints(&self) -> usize {
        self.max_waypoints
    }

    /// Fails with [`RouteError::ProblemTooLarge`] if `count` exceeds the ceiling.
    pub fn check_size(&self, count: usize) -> Result<()> {
        if count > self.max_waypoints {
            return Err(RouteError::ProblemTooLarge {
                count,
                max: self.max_waypoints,
            });
        }
        Ok(())
    }
}

impl Default for HeldKarp {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXACT_WAYPOINTS)
    }
}

impl TourSolver for HeldKarp {
    fn name(&self) -> &'static str {
        "held-karp"
    }

    fn solve(&self, distances: &DistanceMatrix) -> Result<SolveResult> {
        let n = distances.size();
        if n < 2 {
            return Err(RouteError::InsufficientWaypoints { count: n });
        }
        self.check_size(n)?;

        // Waypoint `j + 1` is bit `j`; the origin is implicit.
        let m = n - 1;
        let full = (1usize << m) - 1;
        let idx = |mask: usize, j: usize| mask * m + j;

        let mut cost = vec![f64::INFINITY; (full + 1) * m];
        let mut parent = vec![NO_PARENT; (full + 1) * m];

        for j in 0..m {
            cost[idx(1 << j, j)] = distances.get(0, j + 1);
        }

        // Every predecessor mask is numerically smaller than its successor,
        // so ascending order finalizes each entry before it is extended.
        for mask in 1..=full {
            for j in 0..m {
                if mask & (1 << j) == 0 {
                    continue;
                }
                let base = cost[idx(mask, j)];
                if !base.is_finite() {
                    continue;
                }
                for k in 0..m {
                    if mask & (1 << k) != 0 {
                        continue;
                    }
                    let next = mask | (1 << k);
                    let candidate = base + distances.get(j + 1, k + 1);
                    if candidate < cost[idx(next, k)] {
                        cost[idx(next, k)] = candidate;
                        parent[idx(next, k)] = j as u32;
                    }
                }
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for j in 0..m {
            let mut total = cost[idx(full, j)];
            if self.shape == TourShape::Closed {
                total += distances.get(j + 1, 0);
            }
            if best.is_none_or(|(_, bt)| total < bt) {
                best = Some((j, total));
            }
        }
        let (mut last, _) = best.ok_or(RouteError::InsufficientWaypoints { count: n })?;

        let mut order = Vec::with_capacity(n);
        let mut mask = full;
        loop {
            order.push(last + 1);
            let prev = parent[idx(mask, last)];
            if prev == NO_PARENT {
                break;
            }
            mask &= !(1 << last);
            last = prev as usize;
        }
        order.push(0);
        order.reverse();

        let total_distance = distances.path_length(&order, self.shape);
        Ok(SolveResult {
            tour: Tour::new(order),
            total_distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Waypoint;
    use crate::solver::NearestNeighbor;

    fn from_rows(rows: &[&[f64]]) -> DistanceMatrix {
        let n = rows.len();
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        DistanceMatrix::from_data(n, data).expect("square")
    }

    /// Minimum over every permutation that starts at 0.
    fn brute_force(dm: &DistanceMatrix, shape: TourShape) -> f64 {
        fn recurse(
            dm: &DistanceMatrix,
            shape: TourShape,
            order: &mut Vec<usize>,
            used: &mut [bool],
            best: &mut f64,
        ) {
            if order.len() == dm.size() {
                *best = best.min(dm.path_length(order, shape));
                return;
            }
            for k in 1..dm.size() {
                if !used[k] {
                    used[k] = true;
                    order.push(k);
                    recurse(dm, shape, order, used, best);
                    order.pop();
                    used[k] = false;
                }
            }
        }
        let mut best = f64::INFINITY;
        let mut used = vec![false; dm.size()];
        used[0] = true;
        recurse(dm, shape, &mut vec![0], &mut used, &mut best);
        best
    }

    #[test]
    fn test_hk_two_waypoints() {
        let dm = from_rows(&[&[0.0, 7.0], &[7.0, 0.0]]);
        let res = HeldKarp::default().solve(&dm).expect("solvable");
        assert_eq!(res.tour.order(), &[0, 1]);
        assert_eq!(res.total_distance, 7.0);

        let closed = HeldKarp::default()
            .with_shape(TourShape::Closed)
            .solve(&dm)
            .expect("solvable");
        assert_eq!(closed.total_distance, 14.0);
    }

    #[test]
    fn test_hk_beats_greedy_trap() {
        // Greedy takes the cheap edges 0→1→2 and pays 100 for the last leg.
        let dm = from_rows(&[
            &[0.0, 1.0, 5.0, 4.0],
            &[1.0, 0.0, 2.0, 3.0],
            &[5.0, 2.0, 0.0, 100.0],
            &[4.0, 3.0, 100.0, 0.0],
        ]);
        let greedy = NearestNeighbor::default().solve(&dm).expect("solvable");
        let exact = HeldKarp::default().solve(&dm).expect("solvable");
        assert_eq!(greedy.tour.order(), &[0, 1, 2, 3]);
        assert_eq!(greedy.total_distance, 103.0);
        assert_eq!(exact.tour.order(), &[0, 3, 1, 2]);
        assert_eq!(exact.total_distance, 9.0);
        assert!(exact.total_distance < greedy.total_distance);
    }

    #[test]
    fn test_hk_matches_brute_force() {
        // Deterministic pseudo-random symmetric matrix.
        let n = 7;
        let mut dm = DistanceMatrix::new(n);
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for i in 0..n {
            for j in (i + 1)..n {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                let d = (seed % 1000) as f64 / 10.0 + 1.0;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        for shape in [TourShape::Open, TourShape::Closed] {
            let res = HeldKarp::default()
                .with_shape(shape)
                .solve(&dm)
                .expect("solvable");
            assert!(res.tour.is_permutation_of(n));
            assert_eq!(res.tour.order()[0], 0);
            assert!((res.total_distance - brute_force(&dm, shape)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hk_unit_square() {
        let wps = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 1.0),
            Waypoint::new("C", 1.0, 1.0),
            Waypoint::new("D", 1.0, 0.0),
        ];
        let dm = DistanceMatrix::from_waypoints(&wps).expect("valid");
        let res = HeldKarp::default().solve(&dm).expect("solvable");
        assert_eq!(res.tour.order()[0], 0);
        assert!(res.tour.is_permutation_of(4));
        assert!((res.total_distance - brute_force(&dm, TourShape::Open)).abs() < 1e-9);
        // Walking three sides of the square is optimal.
        let sides = dm.get(0, 1) + dm.get(1, 2) + dm.get(2, 3);
        assert!(res.total_distance <= sides + 1e-9);
    }

    #[test]
    fn test_hk_too_large_rejected() {
        let dm = DistanceMatrix::new(6);
        let err = HeldKarp::new(5).solve(&dm).unwrap_err();
        assert_eq!(err, RouteError::ProblemTooLarge { count: 6, max: 5 });
    }

    #[test]
    fn test_hk_ceiling_clamped() {
        assert_eq!(
            HeldKarp::new(64).max_waypoints(),
            MAX_SUPPORTED_EXACT_WAYPOINTS
        );
    }

    #[test]
    fn test_hk_rejects_single_waypoint() {
        let err = HeldKarp::default()
            .solve(&DistanceMatrix::new(1))
            .unwrap_err();
        assert_eq!(err.kind(), "insufficient_waypoints");
    }
}
