//! Itinerary ranking for search results.

use crate::domain::Itinerary;

/// Rank itineraries by total price, cheapest first.
///
/// The sort is stable: itineraries with equal prices keep the order they
/// were assembled in.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));
    itineraries
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Coordinate, Currency, Fare, Leg, Location, TransportMode};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn tagged(tag: usize, price: f64) -> Itinerary {
        let here = Location::city("Here", Coordinate::new(0.0, 0.0));
        let leg = Leg::new(
            TransportMode::Taxi,
            here.clone(),
            here,
            Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 7, 1, 8, 30, 0).unwrap(),
            Fare::new(price, Currency::EUR),
            tag.to_string(),
        )
        .unwrap();
        Itinerary::from_legs(vec![leg], Currency::EUR).unwrap()
    }

    proptest! {
        #[test]
        fn sorted_and_stable(prices in prop::collection::vec(0u8..5, 0..30)) {
            let input: Vec<Itinerary> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| tagged(i, f64::from(*p) * 10.0))
                .collect();

            let ranked = rank_itineraries(input.clone());
            prop_assert_eq!(ranked.len(), input.len());

            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.total_price() <= b.total_price());
                if a.total_price() == b.total_price() {
                    let ia: usize = a.legs()[0].provider().parse().unwrap();
                    let ib: usize = b.legs()[0].provider().parse().unwrap();
                    prop_assert!(ia < ib);
                }
            }
        }
    }
}
