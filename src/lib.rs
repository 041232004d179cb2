//! # u-itinerary
//!
//! Itinerary optimization engine: orders a set of named, geolocated
//! waypoints into a tour and prices it by transport mode.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Waypoint, Tour, SolveResult, CostedResult)
//! - [`distance`] — Haversine distance and the pairwise distance matrix
//! - [`solver`] — Tour solvers (Nearest Neighbor, Held-Karp)
//! - [`cost`] — Transport modes, rate table, and tour costing
//! - [`optimizer`] — The façade callers use: validate, solve, time, price
//! - [`error`] — Error kinds shared by every operation
//!
//! ## Quick start
//!
//! ```
//! use u_itinerary::models::Waypoint;
//! use u_itinerary::optimizer::optimize;
//!
//! let cities = vec![
//!     Waypoint::new("Paris", 48.8566, 2.3522),
//!     Waypoint::new("Brussels", 50.8503, 4.3517),
//!     Waypoint::new("Lyon", 45.7640, 4.8357),
//! ];
//! let result = optimize(&cities, "exact", "train").unwrap();
//! assert_eq!(result.path[0].name(), "Paris");
//! assert_eq!(result.total_cost, result.total_distance * 0.20);
//! ```

pub mod cost;
pub mod distance;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod solver;

pub use error::{Result, RouteError};
