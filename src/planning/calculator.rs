//! Trip calculator that computes cost, duration, and overnight stops.

use log::debug;

use super::plan_stops;
use crate::models::{CalculatorSettings, TripParameters, TripResult};

/// Computes trip costs, driving time, and overnight stops.
///
/// Stateless apart from its [`CalculatorSettings`]; the same parameters
/// always produce the same result. Parameters are expected to have passed
/// [`TripParameters::validate`].
///
/// # Examples
///
/// ```
/// use trip_optimizer::models::{CalculatorSettings, TripParameters};
/// use trip_optimizer::planning::TripCalculator;
///
/// let params = TripParameters::new(800.0, 80.0, 10.0, 10.0)
///     .with_gas_price(6.0)
///     .with_toll(20.0);
/// let calc = TripCalculator::new(CalculatorSettings::default());
/// let result = calc.compute(&params);
/// assert!((result.fuel_cost() - 480.0).abs() < 1e-10);
/// assert!((result.total_cost() - 500.0).abs() < 1e-10);
/// assert_eq!(result.total_nights(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TripCalculator {
    settings: CalculatorSettings,
}

impl TripCalculator {
    /// Creates a calculator with the given constants.
    pub fn new(settings: CalculatorSettings) -> Self {
        Self { settings }
    }

    /// Returns the constants in use.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Computes the result for one trip.
    pub fn compute(&self, params: &TripParameters) -> TripResult {
        let legs = if params.is_round_trip() { 2.0 } else { 1.0 };
        let total_distance = params.distance_one_way() * legs;
        let toll_cost = params.toll_one_way() * legs;

        let driving_time_hours = total_distance / params.speed_kmh();
        let fuel_liters = total_distance / params.efficiency_km_per_liter();
        let fuel_cost = fuel_liters * params.gas_price_per_liter();
        let total_cost = fuel_cost + toll_cost;

        // Stops are planned on the outbound leg; the return leg mirrors them.
        let stops_one_way = plan_stops(
            params.distance_one_way(),
            params.daily_range_km(),
            self.settings.tolerance_km(),
        );
        // Bounded by MAX_DRIVING_DAYS_PER_LEG, so this always fits
        let nights_one_way = u32::try_from(stops_one_way.len()).unwrap_or(u32::MAX);
        let total_nights = if params.is_round_trip() {
            nights_one_way.saturating_mul(2)
        } else {
            nights_one_way
        };

        let total_time_hours =
            driving_time_hours + f64::from(total_nights) * self.settings.rest_hours_per_night();

        debug!(
            "trip: {:.1} km, {:.2} h driving, {} nights, cost {:.2}",
            total_distance, driving_time_hours, total_nights, total_cost
        );

        TripResult {
            fuel_cost,
            toll_cost,
            total_cost,
            stops_one_way,
            total_time_hours,
            total_nights,
            is_round_trip: params.is_round_trip(),
            distance_one_way: params.distance_one_way(),
            total_distance,
            fuel_liters,
            driving_time_hours,
        }
    }
}

/// Computes a trip with the default [`CalculatorSettings`].
pub fn compute(params: &TripParameters) -> TripResult {
    TripCalculator::default().compute(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> TripParameters {
        TripParameters::new(800.0, 80.0, 10.0, 10.0)
            .with_gas_price(6.0)
            .with_toll(20.0)
    }

    #[test]
    fn test_direct_trip() {
        let r = compute(&base());
        assert!(r.stops_one_way().is_empty());
        assert_eq!(r.total_nights(), 0);
        assert!((r.fuel_cost() - 480.0).abs() < 1e-10);
        assert!((r.toll_cost() - 20.0).abs() < 1e-10);
        assert!((r.total_cost() - 500.0).abs() < 1e-10);
        assert!((r.total_time_hours() - 10.0).abs() < 1e-10);
        assert!((r.fuel_liters() - 80.0).abs() < 1e-10);
        assert!(!r.is_round_trip());
    }

    #[test]
    fn test_round_trip_doubles_costs() {
        let r = compute(&base().with_round_trip(true));
        assert!((r.total_distance() - 1600.0).abs() < 1e-10);
        assert!((r.fuel_cost() - 960.0).abs() < 1e-10);
        assert!((r.toll_cost() - 40.0).abs() < 1e-10);
        assert!((r.total_cost() - 1000.0).abs() < 1e-10);
        // Each leg fits in a day, so no nights despite 1600 km total
        assert_eq!(r.total_nights(), 0);
        assert!((r.total_time_hours() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_multi_day_one_way() {
        let params = TripParameters::new(2402.0, 80.0, 10.0, 10.0);
        let r = compute(&params);
        assert_eq!(r.stops_one_way(), &[800.0, 1600.0]);
        assert_eq!(r.total_nights(), 2);
        // 2402 / 80 = 30.025 h driving + 2 * 10 h rest
        assert!((r.driving_time_hours() - 30.025).abs() < 1e-10);
        assert!((r.total_time_hours() - 50.025).abs() < 1e-10);
    }

    #[test]
    fn test_multi_day_round_trip() {
        let params = TripParameters::new(2402.0, 80.0, 10.0, 10.0).with_round_trip(true);
        let r = compute(&params);
        assert_eq!(r.stops_one_way(), &[800.0, 1600.0]);
        assert_eq!(r.total_nights(), 4);
        assert_eq!(r.return_stops(), vec![802.0, 1602.0]);
        assert!((r.total_time_hours() - (60.05 + 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_custom_settings() {
        let calc = TripCalculator::new(
            CalculatorSettings::default()
                .with_tolerance_km(0.0)
                .with_rest_hours_per_night(8.0),
        );
        let params = TripParameters::new(820.0, 80.0, 10.0, 10.0);
        let r = calc.compute(&params);
        assert_eq!(r.stops_one_way(), &[800.0]);
        assert!((r.total_time_hours() - (10.25 + 8.0)).abs() < 1e-10);

        // Default tolerance absorbs the extra 20 km
        assert!(compute(&params).is_direct());
    }

    #[test]
    fn test_free_fuel() {
        let r = compute(&base().with_gas_price(0.0).with_toll(0.0));
        assert_eq!(r.total_cost(), 0.0);
    }

    #[test]
    fn test_idempotent() {
        let params = TripParameters::new(3100.0, 95.0, 11.5, 9.0)
            .with_toll(42.5)
            .with_round_trip(true);
        assert_eq!(compute(&params), compute(&params));
    }
}
