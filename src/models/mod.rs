//! Domain model types for itinerary optimization.
//!
//! Waypoints come in from the caller, tours and solve results come out of
//! the solvers, and the costed result is handed back to the caller.

mod result;
mod tour;
mod waypoint;

pub use result::CostedResult;
pub use tour::{SolveResult, Tour, TourShape};
pub use waypoint::Waypoint;
