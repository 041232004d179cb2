//! Trip costing by transport mode.
//!
//! - [`TransportMode`] — Plane, train, or car
//! - [`RateTable`] — Currency-per-kilometer rate for each mode
//! - [`route_cost`] — Distance × rate

mod mode;
mod rates;

pub use mode::TransportMode;
pub use rates::{route_cost, RateTable};
