//! Trip calculation.
//!
//! [`TripCalculator`] turns [`TripParameters`](crate::models::TripParameters)
//! into a [`TripResult`](crate::models::TripResult); [`plan_stops`] places the
//! overnight stops along one leg.

mod calculator;
mod stops;

pub use calculator::{compute, TripCalculator};
pub use stops::plan_stops;
