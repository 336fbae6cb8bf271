//! # trip-optimizer
//!
//! Road trip planning library: fuel and toll cost, driving time, and
//! overnight stop suggestions for one-way and round trips.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (TripParameters, TripResult, CalculatorSettings)
//! - [`planning`] — The trip calculator and overnight stop placement
//! - [`config`] — Config file loading and defaults → file → CLI resolution
//! - [`input`] — Interactive prompting for missing parameters
//! - [`report`] — Localized text and JSON rendering
//! - [`error`] — Error type for input, validation, and config failures

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod planning;
pub mod report;

pub use error::TripError;
pub use models::{CalculatorSettings, TripParameters, TripResult};
pub use planning::{compute, TripCalculator};
