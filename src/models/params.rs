//! Trip input parameters.

use serde::{Deserialize, Serialize};

use crate::error::TripError;

/// Fuel price used when none is configured (per liter).
pub const DEFAULT_GAS_PRICE_PER_LITER: f64 = 6.33;

/// Upper bound on full driving days in one leg, and so on stops per leg.
pub const MAX_DRIVING_DAYS_PER_LEG: usize = 10_000;

/// Numeric description of a single trip.
///
/// Distances are in kilometers, speed in km/h, efficiency in km per liter,
/// prices in the local currency.
///
/// # Examples
///
/// ```
/// use trip_optimizer::models::TripParameters;
///
/// let p = TripParameters::new(800.0, 80.0, 10.0, 10.0)
///     .with_gas_price(6.0)
///     .with_toll(20.0);
/// assert_eq!(p.distance_one_way(), 800.0);
/// assert_eq!(p.daily_range_km(), 800.0);
/// assert!(!p.is_round_trip());
/// assert!(p.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    distance_one_way: f64,
    speed_kmh: f64,
    efficiency_km_per_liter: f64,
    max_hours_per_day: f64,
    #[serde(default = "default_gas_price")]
    gas_price_per_liter: f64,
    #[serde(default)]
    toll_one_way: f64,
    #[serde(default)]
    is_round_trip: bool,
}

fn default_gas_price() -> f64 {
    DEFAULT_GAS_PRICE_PER_LITER
}

impl TripParameters {
    /// Creates one-way trip parameters.
    ///
    /// Default: gas price = [`DEFAULT_GAS_PRICE_PER_LITER`], no toll.
    pub fn new(
        distance_one_way: f64,
        speed_kmh: f64,
        efficiency_km_per_liter: f64,
        max_hours_per_day: f64,
    ) -> Self {
        Self {
            distance_one_way,
            speed_kmh,
            efficiency_km_per_liter,
            max_hours_per_day,
            gas_price_per_liter: DEFAULT_GAS_PRICE_PER_LITER,
            toll_one_way: 0.0,
            is_round_trip: false,
        }
    }

    /// Sets the fuel price per liter.
    pub fn with_gas_price(mut self, price: f64) -> Self {
        self.gas_price_per_liter = price;
        self
    }

    /// Sets the toll paid on a single leg.
    pub fn with_toll(mut self, toll: f64) -> Self {
        self.toll_one_way = toll;
        self
    }

    /// Marks the trip as a round trip (or not).
    pub fn with_round_trip(mut self, round_trip: bool) -> Self {
        self.is_round_trip = round_trip;
        self
    }

    /// Checks every field against its domain.
    ///
    /// Speed, efficiency, distance, and daily hours must be finite and
    /// strictly positive; gas price and toll must be finite and non-negative.
    /// Speed and efficiency are checked first, since the calculator divides
    /// by them. A leg may take at most [`MAX_DRIVING_DAYS_PER_LEG`] days of
    /// driving.
    pub fn validate(&self) -> Result<(), TripError> {
        positive("speed_kmh", self.speed_kmh)?;
        positive("efficiency_km_per_liter", self.efficiency_km_per_liter)?;
        positive("distance_one_way", self.distance_one_way)?;
        positive("max_hours_per_day", self.max_hours_per_day)?;
        non_negative("gas_price_per_liter", self.gas_price_per_liter)?;
        non_negative("toll_one_way", self.toll_one_way)?;

        let days = self.distance_one_way / self.daily_range_km();
        if days > MAX_DRIVING_DAYS_PER_LEG as f64 {
            return Err(TripError::OutOfRange {
                field: "distance_one_way",
                value: self.distance_one_way,
                requirement: "at most 10000 days of driving per leg",
            });
        }
        Ok(())
    }

    /// One-way distance in km.
    pub fn distance_one_way(&self) -> f64 {
        self.distance_one_way
    }

    /// Average speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Fuel efficiency in km per liter.
    pub fn efficiency_km_per_liter(&self) -> f64 {
        self.efficiency_km_per_liter
    }

    /// Maximum driving hours per day.
    pub fn max_hours_per_day(&self) -> f64 {
        self.max_hours_per_day
    }

    /// Fuel price per liter.
    pub fn gas_price_per_liter(&self) -> f64 {
        self.gas_price_per_liter
    }

    /// Toll for a single leg.
    pub fn toll_one_way(&self) -> f64 {
        self.toll_one_way
    }

    /// Whether the trip returns to the origin.
    pub fn is_round_trip(&self) -> bool {
        self.is_round_trip
    }

    /// Kilometers coverable in one day of driving.
    pub fn daily_range_km(&self) -> f64 {
        self.speed_kmh * self.max_hours_per_day
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<(), TripError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TripError::OutOfRange {
            field,
            value,
            requirement: "greater than zero",
        })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<(), TripError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TripError::OutOfRange {
            field,
            value,
            requirement: "zero or more",
        })
    }
}
