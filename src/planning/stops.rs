//! Overnight stop placement.

use crate::models::MAX_DRIVING_DAYS_PER_LEG;

/// Places overnight stops along a single leg.
///
/// Drives full days of `daily_range_km` while the remaining distance exceeds
/// one day plus `tolerance_km`. Each stop is the cumulative km mark at the end
/// of a full day, so marks are `daily_range_km`, `2 * daily_range_km`, ...
///
/// The `k`-th day ends in a stop exactly when `k * daily_range_km` is below
/// `distance_km - tolerance_km`, so the count is computed directly rather than
/// by repeated subtraction. At most [`MAX_DRIVING_DAYS_PER_LEG`] stops are
/// returned; validated parameters never reach that limit.
///
/// Returns no stops if any argument is not finite or `daily_range_km` is not
/// positive.
///
/// # Examples
///
/// ```
/// use trip_optimizer::planning::plan_stops;
///
/// assert_eq!(plan_stops(2402.0, 800.0, 50.0), vec![800.0, 1600.0]);
/// assert!(plan_stops(850.0, 800.0, 50.0).is_empty());
/// ```
pub fn plan_stops(distance_km: f64, daily_range_km: f64, tolerance_km: f64) -> Vec<f64> {
    if !daily_range_km.is_finite()
        || daily_range_km <= 0.0
        || !distance_km.is_finite()
        || !tolerance_km.is_finite()
    {
        return Vec::new();
    }

    let count = stop_count(distance_km - tolerance_km, daily_range_km);
    // Multiply rather than accumulate so every mark is an exact multiple.
    (1..=count).map(|day| day as f64 * daily_range_km).collect()
}

/// Number of whole days `k >= 1` with `k * daily < limit`, capped.
fn stop_count(limit: f64, daily: f64) -> usize {
    if limit <= daily {
        return 0;
    }
    let estimate = (limit / daily).floor();
    if estimate > MAX_DRIVING_DAYS_PER_LEG as f64 + 1.0 {
        return MAX_DRIVING_DAYS_PER_LEG;
    }

    // The division can be off by one either way; settle on the exact boundary.
    let mut count = estimate as usize;
    while count > 0 && count as f64 * daily >= limit {
        count -= 1;
    }
    while (count + 1) as f64 * daily < limit {
        count += 1;
    }
    count.min(MAX_DRIVING_DAYS_PER_LEG)
}
