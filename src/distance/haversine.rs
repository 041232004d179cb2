//! Great-circle distance on a spherical Earth.

use crate::error::Result;
use crate::models::Waypoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two `(latitude, longitude)`
/// pairs given in degrees. Inputs are not validated.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just outside [0, 1] for antipodal points.
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Great-circle distance in kilometers between two waypoints.
///
/// Fails with [`RouteError::InvalidCoordinate`](crate::error::RouteError::InvalidCoordinate)
/// if either waypoint is out of range.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Waypoint;
/// use u_itinerary::distance::distance;
///
/// let a = Waypoint::new("A", 0.0, 0.0);
/// let b = Waypoint::new("B", 0.0, 1.0);
/// let d = distance(&a, &b).unwrap();
/// assert!((d - 111.195).abs() < 1e-3);
/// assert_eq!(distance(&a, &a).unwrap(), 0.0);
/// ```
pub fn distance(a: &Waypoint, b: &Waypoint) -> Result<f64> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_km(
        (a.latitude(), a.longitude()),
        (b.latitude(), b.longitude()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_on_equator() {
        let d = haversine_km((0.0, 0.0), (0.0, 1.0));
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_identity_is_zero() {
        assert_eq!(haversine_km((48.85, 2.35), (48.85, 2.35)), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = (40.7128, -74.0060);
        let b = (51.5074, -0.1278);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_known_city_pair() {
        // New York to London, roughly 5570 km.
        let d = haversine_km((40.7128, -74.0060), (51.5074, -0.1278));
        assert!((d - 5570.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = haversine_km((0.0, 0.0), (0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_distance_rejects_invalid() {
        let ok = Waypoint::new("ok", 0.0, 0.0);
        let bad = Waypoint::new("bad", 0.0, 200.0);
        let err = distance(&ok, &bad).unwrap_err();
        assert_eq!(err.kind(), "invalid_coordinate");
    }
}
