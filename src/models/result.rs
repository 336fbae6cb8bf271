//! Trip result type.

use serde::Serialize;

/// Costs, timing, and overnight stops computed for a trip.
///
/// Built by [`TripCalculator`](crate::planning::TripCalculator); all values
/// are derived from the input parameters.
///
/// # Examples
///
/// ```
/// use trip_optimizer::models::TripParameters;
/// use trip_optimizer::planning::compute;
///
/// let result = compute(&TripParameters::new(2402.0, 80.0, 10.0, 10.0));
/// assert_eq!(result.stops_one_way(), &[800.0, 1600.0]);
/// assert_eq!(result.total_nights(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult {
    pub(crate) fuel_cost: f64,
    pub(crate) toll_cost: f64,
    pub(crate) total_cost: f64,
    pub(crate) stops_one_way: Vec<f64>,
    pub(crate) total_time_hours: f64,
    pub(crate) total_nights: u32,
    pub(crate) is_round_trip: bool,
    pub(crate) distance_one_way: f64,
    pub(crate) total_distance: f64,
    pub(crate) fuel_liters: f64,
    pub(crate) driving_time_hours: f64,
}

impl TripResult {
    /// Fuel cost for the whole trip.
    pub fn fuel_cost(&self) -> f64 {
        self.fuel_cost
    }

    /// Toll cost for the whole trip.
    pub fn toll_cost(&self) -> f64 {
        self.toll_cost
    }

    /// Fuel plus tolls.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Overnight stops on the outbound leg, as cumulative km from the origin.
    pub fn stops_one_way(&self) -> &[f64] {
        &self.stops_one_way
    }

    /// Overnight stops on the return leg, as cumulative km from the destination.
    ///
    /// The return leg mirrors the outbound one: the driver sleeps in the same
    /// places, visited in reverse order. Empty for one-way trips.
    pub fn return_stops(&self) -> Vec<f64> {
        if !self.is_round_trip {
            return Vec::new();
        }
        self.stops_one_way
            .iter()
            .rev()
            .map(|&km| self.distance_one_way - km)
            .collect()
    }

    /// Driving time plus rest time, in hours.
    pub fn total_time_hours(&self) -> f64 {
        self.total_time_hours
    }

    /// Number of overnight stops across all legs.
    pub fn total_nights(&self) -> u32 {
        self.total_nights
    }

    /// Whether the trip returns to the origin.
    pub fn is_round_trip(&self) -> bool {
        self.is_round_trip
    }

    /// Distance actually driven (both legs for a round trip).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Fuel consumed, in liters.
    pub fn fuel_liters(&self) -> f64 {
        self.fuel_liters
    }

    /// Time behind the wheel, excluding overnight rest.
    pub fn driving_time_hours(&self) -> f64 {
        self.driving_time_hours
    }

    /// Returns `true` if the trip needs no overnight stop.
    pub fn is_direct(&self) -> bool {
        self.stops_one_way.is_empty()
    }
}
