//! Optimization façade.
//!
//! The only entry point callers need: validate the request, build the
//! distance matrix, run the chosen solver under a timer, and price the tour.
//! Each call owns its matrix and solver state, so one [`Optimizer`] can serve
//! concurrent requests by shared reference.

mod config;

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::cost::{route_cost, TransportMode};
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::models::{CostedResult, Waypoint};
use crate::solver::{Algorithm, HeldKarp, NearestNeighbor, TourSolver};

pub use config::OptimizerConfig;

/// Greedy and exact results for the same request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Nearest-neighbor result.
    pub greedy: CostedResult,
    /// Held-Karp result.
    pub exact: CostedResult,
    /// How far the greedy distance lies above the optimum, in percent.
    /// Zero when the optimum is zero.
    pub gap_percent: f64,
}

/// Itinerary optimizer.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Waypoint;
/// use u_itinerary::optimizer::Optimizer;
///
/// let cities = vec![
///     Waypoint::new("A", 0.0, 0.0),
///     Waypoint::new("B", 0.0, 1.0),
///     Waypoint::new("C", 1.0, 1.0),
///     Waypoint::new("D", 1.0, 0.0),
/// ];
/// let optimizer = Optimizer::default();
///
/// let result = optimizer.optimize(&cities, "greedy", "car").unwrap();
/// assert_eq!(result.names(), vec!["A", "B", "C", "D"]);
/// assert_eq!(result.total_cost, result.total_distance * 0.10);
///
/// let err = optimizer.optimize(&cities, "bicycle", "car").unwrap_err();
/// assert_eq!(err.kind(), "invalid_input");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer after validating `config`.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "optimizer ready: exact ceiling {}, {:?} tours, rates for {:?}",
            config.max_exact_waypoints(),
            config.tour_shape(),
            config.rates().modes().collect::<Vec<_>>()
        );
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes a tour from string selectors, as received from a request.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidInput`] for an unknown algorithm or mode string,
    ///   or duplicate waypoint names
    /// - [`RouteError::UnknownTransportMode`] if the mode has no configured rate
    /// - [`RouteError::InsufficientWaypoints`] for fewer than two waypoints
    /// - [`RouteError::InvalidCoordinate`] for out-of-range coordinates
    /// - [`RouteError::ProblemTooLarge`] if the exact solver is asked for more
    ///   waypoints than the configured ceiling
    pub fn optimize(
        &self,
        waypoints: &[Waypoint],
        algorithm: &str,
        transport_mode: &str,
    ) -> Result<CostedResult> {
        let algorithm: Algorithm = algorithm.parse()?;
        let mode: TransportMode = transport_mode.parse()?;
        self.optimize_with(waypoints, algorithm, mode)
    }

    /// Optimizes a tour with already-parsed selectors.
    ///
    /// All validation happens before the distance matrix is built.
    pub fn optimize_with(
        &self,
        waypoints: &[Waypoint],
        algorithm: Algorithm,
        mode: TransportMode,
    ) -> Result<CostedResult> {
        self.config.rates().rate(mode)?;
        validate_waypoints(waypoints)?;
        let solver = self.solver(algorithm);
        if algorithm == Algorithm::Exact {
            self.exact_solver().check_size(waypoints.len()).inspect_err(|e| warn!("{e}"))?;
        }

        let distances = DistanceMatrix::from_waypoints(waypoints)?;
        debug!(
            "built {n}x{n} distance matrix, solving with {}",
            solver.name(),
            n = distances.size()
        );
        let result = self.run(waypoints, &distances, solver.as_ref(), algorithm, mode)?;
        info!(
            "{} tour over {} waypoints: {:.3} km, cost {:.2} by {}, solved in {:.3} ms",
            algorithm,
            waypoints.len(),
            result.total_distance,
            result.total_cost,
            mode,
            result.execution_time_ms
        );
        Ok(result)
    }

    /// Runs both solvers on one distance matrix and reports the greedy gap.
    ///
    /// Subject to the same validation as [`optimize_with`](Self::optimize_with),
    /// including the exact solver's ceiling.
    pub fn compare(&self, waypoints: &[Waypoint], mode: TransportMode) -> Result<Comparison> {
        self.config.rates().rate(mode)?;
        validate_waypoints(waypoints)?;
        let exact_solver = self.exact_solver();
        exact_solver
            .check_size(waypoints.len())
            .inspect_err(|e| warn!("{e}"))?;

        let distances = DistanceMatrix::from_waypoints(waypoints)?;
        let greedy_solver = NearestNeighbor::new(self.config.tour_shape());
        let greedy = self.run(waypoints, &distances, &greedy_solver, Algorithm::Greedy, mode)?;
        let exact = self.run(waypoints, &distances, &exact_solver, Algorithm::Exact, mode)?;

        let gap_percent = if exact.total_distance > 0.0 {
            (greedy.total_distance - exact.total_distance) / exact.total_distance * 100.0
        } else {
            0.0
        };
        debug!("greedy is {gap_percent:.2}% above optimal");
        Ok(Comparison {
            greedy,
            exact,
            gap_percent,
        })
    }

    fn exact_solver(&self) -> HeldKarp {
        HeldKarp::new(self.config.max_exact_waypoints()).with_shape(self.config.tour_shape())
    }

    fn solver(&self, algorithm: Algorithm) -> Box<dyn TourSolver> {
        match algorithm {
            Algorithm::Greedy => Box::new(NearestNeighbor::new(self.config.tour_shape())),
            Algorithm::Exact => Box::new(self.exact_solver()),
        }
    }

    /// Solves under the timer and prices the tour.
    fn run(
        &self,
        waypoints: &[Waypoint],
        distances: &DistanceMatrix,
        solver: &dyn TourSolver,
        algorithm: Algorithm,
        mode: TransportMode,
    ) -> Result<CostedResult> {
        let start = Instant::now();
        let solved = solver.solve(distances)?;
        let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let total_cost = route_cost(solved.total_distance, mode, self.config.rates())?;
        let order = solved.tour.into_order();
        let path = order.iter().map(|&i| waypoints[i].clone()).collect();

        Ok(CostedResult {
            path,
            order,
            total_distance: solved.total_distance,
            transport_mode: mode,
            total_cost,
            execution_time_ms,
            algorithm,
        })
    }
}

/// Optimizes with the default configuration.
///
/// Shorthand for `Optimizer::default().optimize(..)`.
pub fn optimize(
    waypoints: &[Waypoint],
    algorithm: &str,
    transport_mode: &str,
) -> Result<CostedResult> {
    Optimizer::default().optimize(waypoints, algorithm, transport_mode)
}

fn validate_waypoints(waypoints: &[Waypoint]) -> Result<()> {
    if waypoints.len() < 2 {
        return Err(RouteError::InsufficientWaypoints {
            count: waypoints.len(),
        });
    }
    let mut names = HashSet::with_capacity(waypoints.len());
    for w in waypoints {
        w.validate()?;
        if !names.insert(w.name()) {
            return Err(RouteError::InvalidInput(format!(
                "duplicate waypoint name `{}`",
                w.name()
            )));
        }
    }
    Ok(())
}
