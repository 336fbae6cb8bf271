//! # Configuration
//!
//! Settings resolve with a fixed override hierarchy:
//! built-in defaults → config file → CLI flags.
//!
//! The config file lives at `~/.trip-optimizer/config.toml` unless a path is
//! given explicitly. Every field is optional.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TripError;
use crate::models::{CalculatorSettings, DEFAULT_GAS_PRICE_PER_LITER};
use crate::report::Language;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

/// Contents of `config.toml`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TripConfig {
    /// `[defaults]` section.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// `[calculator]` section.
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Fallback values for trip parameters not given on the command line.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Fuel price per liter.
    pub gas_price_per_liter: Option<f64>,
    /// Driving hours per day.
    pub max_hours_per_day: Option<f64>,
    /// Usual cruising speed (km/h).
    pub speed_kmh: Option<f64>,
    /// Usual car efficiency (km per liter).
    pub efficiency_km_per_liter: Option<f64>,
    /// Toll for a single leg.
    pub toll_one_way: Option<f64>,
    /// `"pt"` or `"en"`.
    pub language: Option<Language>,
}

/// Overrides for the calculator constants.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CalculatorConfig {
    /// Rest hours added per overnight stop.
    pub rest_hours_per_night: Option<f64>,
    /// Last-day slack in km.
    pub tolerance_km: Option<f64>,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// `--distance`
    pub distance_one_way: Option<f64>,
    /// `--speed`
    pub speed_kmh: Option<f64>,
    /// `--efficiency`
    pub efficiency_km_per_liter: Option<f64>,
    /// `--max-hours`
    pub max_hours_per_day: Option<f64>,
    /// `--gas-price`
    pub gas_price_per_liter: Option<f64>,
    /// `--toll`
    pub toll_one_way: Option<f64>,
    /// `Some(true)` when `--round-trip` was passed.
    pub round_trip: Option<bool>,
    /// `--lang`
    pub language: Option<Language>,
}

// ============================================================================
// Resolved Config
// ============================================================================

/// Config after collapsing all layers.
///
/// Required trip fields stay optional here: anything still missing is
/// prompted for interactively.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// One-way distance (km), only ever from the command line.
    pub distance_one_way: Option<f64>,
    /// Average speed (km/h).
    pub speed_kmh: Option<f64>,
    /// Fuel efficiency (km per liter).
    pub efficiency_km_per_liter: Option<f64>,
    /// Driving hours per day.
    pub max_hours_per_day: Option<f64>,
    /// Fuel price per liter.
    pub gas_price_per_liter: f64,
    /// Toll for a single leg.
    pub toll_one_way: f64,
    /// Trip mode, if decided without asking.
    pub round_trip: Option<bool>,
    /// Language for prompts and output.
    pub language: Language,
    /// Validated calculator constants.
    pub settings: CalculatorSettings,
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.trip-optimizer/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trip-optimizer").join("config.toml"))
}

/// Loads the config file.
///
/// With an explicit `path`, the file must exist. Without one, the default
/// location is tried and a missing file yields `TripConfig::default()`.
pub fn load_config(path: Option<&Path>) -> Result<TripConfig, TripError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let path = match default_config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TripConfig::default());
        }
    };

    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(TripConfig::default());
    }
    read_config(&path)
}

fn read_config(path: &Path) -> Result<TripConfig, TripError> {
    let contents = fs::read_to_string(path).map_err(|source| TripError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: TripConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves the final config: defaults → config file → CLI.
///
/// Fails with `OutOfRange` if the calculator constants are negative or not
/// finite.
pub fn resolve(config: &TripConfig, cli: &CliOverrides) -> Result<ResolvedConfig, TripError> {
    let defaults = &config.defaults;

    let mut settings = CalculatorSettings::default();
    if let Some(hours) = config.calculator.rest_hours_per_night {
        settings = settings.with_rest_hours_per_night(hours);
    }
    if let Some(km) = config.calculator.tolerance_km {
        settings = settings.with_tolerance_km(km);
    }
    settings.validate()?;

    Ok(ResolvedConfig {
        // Distance is per trip, never a config default
        distance_one_way: cli.distance_one_way,
        speed_kmh: cli.speed_kmh.or(defaults.speed_kmh),
        efficiency_km_per_liter: cli
            .efficiency_km_per_liter
            .or(defaults.efficiency_km_per_liter),
        max_hours_per_day: cli.max_hours_per_day.or(defaults.max_hours_per_day),
        gas_price_per_liter: cli
            .gas_price_per_liter
            .or(defaults.gas_price_per_liter)
            .unwrap_or(DEFAULT_GAS_PRICE_PER_LITER),
        toll_one_way: cli.toll_one_way.or(defaults.toll_one_way).unwrap_or(0.0),
        round_trip: cli.round_trip,
        language: cli.language.or(defaults.language).unwrap_or_default(),
        settings,
    })
}
