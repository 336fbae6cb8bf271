//! Domain model types for trip planning.
//!
//! Provides the trip input parameters, the calculator constants, and the
//! computed result with its cost, time, and overnight stop breakdown.

mod params;
mod result;
mod settings;

pub use params::{TripParameters, DEFAULT_GAS_PRICE_PER_LITER, MAX_DRIVING_DAYS_PER_LEG};
pub use result::TripResult;
pub use settings::{CalculatorSettings, DEFAULT_REST_HOURS_PER_NIGHT, DEFAULT_TOLERANCE_KM};
