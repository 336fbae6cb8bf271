//! Calculator constants.

use serde::{Deserialize, Serialize};

use super::params::non_negative;
use crate::error::TripError;

/// Hours added to the trip for every overnight stop (hotel, dinner, breakfast).
pub const DEFAULT_REST_HOURS_PER_NIGHT: f64 = 10.0;

/// Slack (km) allowed on the last day before another night is required.
pub const DEFAULT_TOLERANCE_KM: f64 = 50.0;

/// Tunable constants of the trip calculation.
///
/// # Examples
///
/// ```
/// use trip_optimizer::models::CalculatorSettings;
///
/// let s = CalculatorSettings::default().with_tolerance_km(0.0);
/// assert_eq!(s.rest_hours_per_night(), 10.0);
/// assert_eq!(s.tolerance_km(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    rest_hours_per_night: f64,
    tolerance_km: f64,
}

impl CalculatorSettings {
    /// Creates settings with explicit values.
    pub fn new(rest_hours_per_night: f64, tolerance_km: f64) -> Self {
        Self {
            rest_hours_per_night,
            tolerance_km,
        }
    }

    /// Sets the rest hours charged per night.
    pub fn with_rest_hours_per_night(mut self, hours: f64) -> Self {
        self.rest_hours_per_night = hours;
        self
    }

    /// Sets the last-day tolerance.
    pub fn with_tolerance_km(mut self, km: f64) -> Self {
        self.tolerance_km = km;
        self
    }

    /// Rest hours charged per night.
    pub fn rest_hours_per_night(&self) -> f64 {
        self.rest_hours_per_night
    }

    /// Last-day tolerance in km.
    pub fn tolerance_km(&self) -> f64 {
        self.tolerance_km
    }

    /// Checks that both values are finite and non-negative.
    ///
    /// A negative tolerance would place stops past the destination, and
    /// negative rest hours would shorten the trip.
    pub fn validate(&self) -> Result<(), TripError> {
        non_negative("rest_hours_per_night", self.rest_hours_per_night)?;
        non_negative("tolerance_km", self.tolerance_km)?;
        Ok(())
    }
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self::new(DEFAULT_REST_HOURS_PER_NIGHT, DEFAULT_TOLERANCE_KM)
    }
}
