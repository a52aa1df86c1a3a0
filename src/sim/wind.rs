//! Per-round wind

use super::rng::RandomSource;

/// Base wind lies in `-4..=5`
const BASE_MIN: i32 = 1 - 5;
const BASE_MAX: i32 = 10 - 5;
/// Strongest gust added on top of the base
const GUST_MAX: i32 = 10;

/// Roll the wind for a round
///
/// One round in three gets an extra gust pushing further in the base
/// direction; a calm base counts as blowing to the right.
pub fn generate_wind(rng: &mut impl RandomSource) -> i32 {
    let base = rng.int_in(BASE_MIN, BASE_MAX);
    let wind = if rng.int_in(1, 3) == 1 {
        let gust = rng.int_in(1, GUST_MAX);
        if base >= 0 { base + gust } else { base - gust }
    } else {
        base
    };
    log::debug!("Wind for this round: {}", wind);
    wind
}

/// Full range `generate_wind` can produce
pub const WIND_RANGE: std::ops::RangeInclusive<i32> = (BASE_MIN - GUST_MAX)..=(BASE_MAX + GUST_MAX);
