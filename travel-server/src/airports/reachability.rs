//! Distance-based filtering of candidate airports.

use crate::domain::Location;

/// An airport paired with its distance from some origin.
///
/// Only used while filtering; not part of any itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportDistance {
    pub airport: Location,
    pub distance_km: f64,
}

/// Airports within `max_distance_km` of `origin`, nearest first, at most
/// `max_count` of them.
///
/// Ties keep their input order. Candidates whose distance cannot be
/// computed (NaN) are dropped.
pub fn nearest_within(
    origin: &Location,
    candidates: Vec<Location>,
    max_distance_km: f64,
    max_count: usize,
) -> Vec<AirportDistance> {
    let mut ranked: Vec<AirportDistance> = candidates
        .into_iter()
        .map(|airport| AirportDistance {
            distance_km: origin.distance_to(&airport),
            airport,
        })
        .filter(|a| a.distance_km <= max_distance_km)
        .collect();

    // Stable: equal distances keep candidate order
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(max_count);

    ranked
}

/// The reachable airports from `origin`: the `max_count` nearest within
/// `max_distance_km`.
///
/// Returns an empty list, not an error, when nothing qualifies.
pub fn reachable(
    origin: &Location,
    candidates: Vec<Location>,
    max_distance_km: f64,
    max_count: usize,
) -> Vec<Location> {
    nearest_within(origin, candidates, max_distance_km, max_count)
        .into_iter()
        .map(|a| a.airport)
        .collect()
}

/// The single nearest candidate, regardless of distance.
pub fn closest(origin: &Location, candidates: Vec<Location>) -> Option<Location> {
    nearest_within(origin, candidates, f64::INFINITY, 1)
        .into_iter()
        .next()
        .map(|a| a.airport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn granada() -> Location {
        Location::city("Granada", Coordinate::new(37.1773, -3.5986))
    }

    fn airport(name: &str, lat: f64, lon: f64) -> Location {
        Location::airport(name, Coordinate::new(lat, lon), None)
    }

    fn names(locations: &[Location]) -> Vec<&str> {
        locations.iter().map(|l| l.name.as_str()).collect()
    }

    fn andalusia() -> Vec<Location> {
        vec![
            airport("Madrid", 40.4983, -3.5676),  // ~370 km
            airport("Granada", 37.1887, -3.7774), // ~16 km
            airport("Seville", 37.4180, -5.8931), // ~205 km
            airport("Malaga", 36.6749, -4.4991),  // ~100 km
            airport("Tel Aviv", 32.0055, 34.8854), // ~3500 km
        ]
    }

    #[test]
    fn sorted_nearest_first() {
        let result = reachable(&granada(), andalusia(), 500.0, 10);
        assert_eq!(names(&result), vec!["Granada", "Malaga", "Seville", "Madrid"]);
    }

    #[test]
    fn cutoff_excludes_far_airports() {
        let result = reachable(&granada(), andalusia(), 150.0, 10);
        assert_eq!(names(&result), vec!["Granada", "Malaga"]);
    }

    #[test]
    fn truncates_to_max_count() {
        let result = reachable(&granada(), andalusia(), 500.0, 2);
        assert_eq!(names(&result), vec!["Granada", "Malaga"]);
    }

    #[test]
    fn empty_when_nothing_in_range() {
        assert!(reachable(&granada(), andalusia(), 5.0, 10).is_empty());
        assert!(reachable(&granada(), vec![], 500.0, 10).is_empty());
        assert!(reachable(&granada(), andalusia(), 500.0, 0).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let a = airport("First", 37.3, -3.5986);
        let b = airport("Second", 37.3, -3.5986);
        let c = airport("Nearer", 37.2, -3.5986);

        let result = reachable(&granada(), vec![a, b, c], 500.0, 10);
        assert_eq!(names(&result), vec!["Nearer", "First", "Second"]);
    }

    #[test]
    fn distances_are_reported() {
        let result = nearest_within(&granada(), andalusia(), 150.0, 10);

        assert_eq!(result.len(), 2);
        assert!(result[0].distance_km < 20.0);
        assert!((result[1].distance_km - 100.0).abs() < 15.0);
    }

    #[test]
    fn nan_distance_is_dropped() {
        let broken = airport("Broken", f64::NAN, 0.0);
        let result = reachable(&granada(), vec![broken], f64::INFINITY, 10);
        assert!(result.is_empty());
    }

    #[test]
    fn closest_ignores_cutoff() {
        let best = closest(&granada(), andalusia()).unwrap();
        assert_eq!(best.name, "Granada");

        let far = vec![airport("Tel Aviv", 32.0055, 34.8854)];
        assert_eq!(closest(&granada(), far).unwrap().name, "Tel Aviv");

        assert!(closest(&granada(), vec![]).is_none());
    }
}
