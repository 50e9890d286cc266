//! Fare and travel-time estimates for ground transport.

use chrono::Duration;

/// Flat charge for boarding public transport.
const TRANSIT_BASE_FARE: f64 = 2.0;

/// Per-km public transport rates by distance band: (band ends at km, rate).
const TRANSIT_BANDS: &[(f64, f64)] = &[(10.0, 0.15), (50.0, 0.12), (f64::INFINITY, 0.10)];

const TAXI_BASE_FARE: f64 = 3.0;
const TAXI_RATE_PER_KM: f64 = 1.2;

/// Average taxi speed used for travel-time estimates.
const TAXI_SPEED_KMH: f64 = 60.0;

/// Public transport fare for a journey of `distance_km`.
///
/// Each kilometre is charged at the rate of the band it falls in: 0.15 for
/// the first 10 km, 0.12 up to 50 km and 0.10 beyond.
pub fn transit_fare(distance_km: f64) -> f64 {
    let mut fare = TRANSIT_BASE_FARE;
    let mut band_start = 0.0;

    for &(band_end, rate) in TRANSIT_BANDS {
        if distance_km <= band_start {
            break;
        }
        fare += (distance_km.min(band_end) - band_start) * rate;
        band_start = band_end;
    }

    fare
}

/// Taxi fare for a journey of `distance_km`.
pub fn taxi_fare(distance_km: f64) -> f64 {
    TAXI_BASE_FARE + distance_km * TAXI_RATE_PER_KM
}

/// Taxi travel time for `distance_km`, rounded to whole minutes.
pub fn taxi_duration(distance_km: f64) -> Duration {
    let minutes = (distance_km / TAXI_SPEED_KMH * 60.0).round();
    if minutes.is_finite() && minutes > 0.0 {
        Duration::minutes(minutes as i64)
    } else {
        Duration::zero()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn transit_fare_grows_with_distance(a in 0.0f64..500.0, b in 0.0f64..500.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(transit_fare(near) <= transit_fare(far));
        }

        #[test]
        fn transit_cheaper_than_taxi(d in 0.0f64..500.0) {
            prop_assert!(transit_fare(d) < taxi_fare(d));
        }
    }
}
