//! Per-kilometer rate table and tour costing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TransportMode;
use crate::error::{Result, RouteError};

/// Currency-per-kilometer rate for each configured transport mode.
///
/// The default table is plane 0.50, train 0.20, car 0.10. A table may omit
/// modes; pricing an omitted mode fails with
/// [`RouteError::UnknownTransportMode`].
///
/// Serializes as a plain map, e.g. `{"plane": 0.5, "car": 0.1}`.
///
/// # Examples
///
/// ```
/// use u_itinerary::cost::{RateTable, TransportMode};
///
/// let table = RateTable::default();
/// assert_eq!(table.rate(TransportMode::Car).unwrap(), 0.10);
///
/// let trains_only = RateTable::empty().with_rate(TransportMode::Train, 0.25).unwrap();
/// assert!(trains_only.rate(TransportMode::Plane).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<TransportMode, f64>,
}

impl RateTable {
    /// A table with no modes configured.
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Sets the rate for `mode`, replacing any previous value.
    ///
    /// Fails with [`RouteError::InvalidInput`] if `rate` is negative or not finite.
    pub fn with_rate(mut self, mode: TransportMode, rate: f64) -> Result<Self> {
        check_rate(mode, rate)?;
        self.rates.insert(mode, rate);
        Ok(self)
    }

    /// Rate per kilometer for `mode`.
    pub fn rate(&self, mode: TransportMode) -> Result<f64> {
        self.rates
            .get(&mode)
            .copied()
            .ok_or_else(|| RouteError::UnknownTransportMode(mode.to_string()))
    }

    /// Configured modes, in [`TransportMode`] order.
    pub fn modes(&self) -> impl Iterator<Item = TransportMode> + '_ {
        self.rates.keys().copied()
    }

    /// Checks every rate is finite and non-negative.
    ///
    /// Tables built with [`with_rate`](Self::with_rate) always pass; this
    /// exists for tables that came in through deserialization.
    pub fn validate(&self) -> Result<()> {
        self.rates
            .iter()
            .try_for_each(|(&mode, &rate)| check_rate(mode, rate))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let rates = BTreeMap::from([
            (TransportMode::Plane, 0.50),
            (TransportMode::Train, 0.20),
            (TransportMode::Car, 0.10),
        ]);
        Self { rates }
    }
}

fn check_rate(mode: TransportMode, rate: f64) -> Result<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(RouteError::InvalidInput(format!(
            "rate for `{mode}` must be a non-negative number, got {rate}"
        )))
    }
}

/// Prices a tour: `total_distance * rate(mode)`.
///
/// # Errors
///
/// - [`RouteError::UnknownTransportMode`] if `mode` has no rate in `table`
/// - [`RouteError::InvalidInput`] if `total_distance` is negative or not finite
///
/// # Examples
///
/// ```
/// use u_itinerary::cost::{route_cost, RateTable, TransportMode};
///
/// let cost = route_cost(100.0, TransportMode::Car, &RateTable::default()).unwrap();
/// assert_eq!(cost, 10.0);
/// ```
pub fn route_cost(total_distance: f64, mode: TransportMode, table: &RateTable) -> Result<f64> {
    if !total_distance.is_finite() || total_distance < 0.0 {
        return Err(RouteError::InvalidInput(format!(
            "total distance must be a non-negative number, got {total_distance}"
        )));
    }
    Ok(total_distance * table.rate(mode)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let t = RateTable::default();
        assert_eq!(t.rate(TransportMode::Plane), Ok(0.50));
        assert_eq!(t.rate(TransportMode::Train), Ok(0.20));
        assert_eq!(t.rate(TransportMode::Car), Ok(0.10));
        assert_eq!(t.modes().count(), 3);
    }

    #[test]
    fn test_car_hundred_km() {
        let cost = route_cost(100.0, TransportMode::Car, &RateTable::default()).expect("priced");
        assert_eq!(cost, 10.0);
    }

    #[test]
    fn test_cost_is_distance_times_rate() {
        let t = RateTable::default();
        for mode in TransportMode::ALL {
            let d = 1234.5678;
            let expected = d * t.rate(mode).expect("configured");
            assert_eq!(route_cost(d, mode, &t), Ok(expected));
        }
    }

    #[test]
    fn test_zero_distance_costs_nothing() {
        assert_eq!(
            route_cost(0.0, TransportMode::Plane, &RateTable::default()),
            Ok(0.0)
        );
    }

    #[test]
    fn test_missing_mode() {
        let t = RateTable::empty();
        let err = route_cost(10.0, TransportMode::Plane, &t).unwrap_err();
        assert_eq!(err, RouteError::UnknownTransportMode("plane".into()));
    }

    #[test]
    fn test_rejects_bad_rate() {
        assert!(RateTable::empty().with_rate(TransportMode::Car, -0.1).is_err());
        assert!(RateTable::empty().with_rate(TransportMode::Car, f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_bad_distance() {
        let t = RateTable::default();
        assert!(route_cost(-1.0, TransportMode::Car, &t).is_err());
        assert!(route_cost(f64::INFINITY, TransportMode::Car, &t).is_err());
    }

    #[test]
    fn test_serde_as_map() {
        let t: RateTable = serde_json::from_str(r#"{"car": 0.12, "train": 0.3}"#).expect("valid");
        assert_eq!(t.rate(TransportMode::Car), Ok(0.12));
        assert!(t.rate(TransportMode::Plane).is_err());
        assert!(t.validate().is_ok());

        let bad: RateTable = serde_json::from_str(r#"{"car": -1.0}"#).expect("parses");
        assert!(bad.validate().is_err());
    }
}
