//! Error type shared by parameter validation, prompting, and config loading.

use std::path::PathBuf;

/// Errors raised at the boundary of the calculator.
///
/// The calculation itself never fails; these cover everything that happens
/// before it runs (reading input, validating it, loading configuration).
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    /// Text that does not parse as a number.
    #[error("invalid number for {field}: {input:?}")]
    InvalidNumber {
        /// Parameter being read.
        field: &'static str,
        /// Raw text entered.
        input: String,
    },
    /// A number outside its allowed domain.
    #[error("{field} must be {requirement}, got {value}")]
    OutOfRange {
        /// Parameter being checked.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Human-readable bound, e.g. "greater than zero".
        requirement: &'static str,
    },
    /// Input ended before a required value was read.
    #[error("no input for {field}")]
    MissingInput {
        /// Parameter being read.
        field: &'static str,
    },
    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    ConfigRead {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl TripError {
    /// Returns `true` for errors caused by what the user typed or passed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TripError::InvalidNumber { .. }
                | TripError::OutOfRange { .. }
                | TripError::MissingInput { .. }
        )
    }
}
