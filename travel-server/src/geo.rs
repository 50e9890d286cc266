//! Great-circle distance.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
///
/// Symmetric, and zero for coincident points. Never panics: NaN inputs give
/// a NaN distance.
///
/// # Examples
///
/// ```
/// use travel_server::domain::Coordinate;
/// use travel_server::geo::distance;
///
/// let madrid = Coordinate::new(40.4168, -3.7038);
/// let barcelona = Coordinate::new(41.3851, 2.1734);
///
/// let km = distance(madrid, barcelona);
/// assert!((km - 504.0).abs() < 10.0);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal points just past 1.
    let h = if h > 1.0 { 1.0 } else { h };
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_york_to_los_angeles() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);

        let d = distance(nyc, la);
        assert!((d - 3944.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn madrid_to_barcelona() {
        let madrid = Coordinate::new(40.4168, -3.7038);
        let barcelona = Coordinate::new(41.3851, 2.1734);

        let d = distance(madrid, barcelona);
        assert!((d - 504.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn same_point_is_zero() {
        let granada = Coordinate::new(37.1773, -3.5986);
        assert_eq!(distance(granada, granada), 0.0);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!((d - half).abs() < 1e-6);

        // Off the equator the unclamped term can round past 1
        for (lat, lon) in [(40.4168, -3.7038), (-33.8688, 151.2093), (89.9, 0.5), (12.5, 179.0)] {
            let antipode = Coordinate::new(-lat, if lon > 0.0 { lon - 180.0 } else { lon + 180.0 });
            let d = distance(Coordinate::new(lat, lon), antipode);
            assert!(!d.is_nan(), "NaN for ({lat}, {lon})");
            assert!((d - half).abs() < 1e-3, "got {d} for ({lat}, {lon})");
        }
    }

    #[test]
    fn nan_does_not_panic() {
        let d = distance(Coordinate::new(f64::NAN, 0.0), Coordinate::new(1.0, 1.0));
        assert!(d.is_nan());
    }
}
