//! Geographic distance model and pairwise distance matrix.
//!
//! - [`haversine`] — Great-circle distance on a 6371 km sphere
//! - [`DistanceMatrix`] — Dense symmetric matrix built once per request

pub mod haversine;
mod matrix;

pub use haversine::{distance, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
