//! Leg type.
//!
//! A `Leg` is one priced, timed, directed movement between two locations:
//! a taxi to the airport, a flight, a train to the next city.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use super::{Currency, DomainError, Location};

/// How a leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Taxi,
    Transit,
    Metro,
    PublicTransport,
}

impl TransportMode {
    /// Lowercase name, as used in descriptions and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Taxi => "taxi",
            TransportMode::Transit => "transit",
            TransportMode::Metro => "metro",
            TransportMode::PublicTransport => "public_transport",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A price in a given currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fare {
    pub amount: f64,
    pub currency: Currency,
}

impl Fare {
    /// Create a new fare.
    pub const fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// A leg of a journey.
///
/// # Invariants
///
/// - `arrival >= departure`
///
/// `duration` is whatever the producer reported. It defaults to
/// `arrival - departure` but is never re-derived afterwards; itinerary
/// timing is computed from departures and arrivals, not from durations.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    mode: TransportMode,
    from: Location,
    to: Location,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    duration: Duration,
    fare: Fare,
    provider: String,
    booking_url: Option<String>,
}

impl Leg {
    /// Construct a leg, validating its timing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `arrival` is before `departure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use travel_server::domain::{Coordinate, Currency, Fare, Leg, Location, TransportMode};
    ///
    /// let madrid = Location::city("Madrid", Coordinate::new(40.4168, -3.7038));
    /// let mad = Location::airport("Madrid-Barajas", Coordinate::new(40.4983, -3.5676), None);
    /// let dep = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
    /// let arr = Utc.with_ymd_and_hms(2024, 7, 1, 8, 30, 0).unwrap();
    ///
    /// let leg = Leg::new(
    ///     TransportMode::Taxi,
    ///     madrid,
    ///     mad,
    ///     dep,
    ///     arr,
    ///     Fare::new(35.0, Currency::EUR),
    ///     "Taxi",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(leg.duration().num_minutes(), 30);
    /// assert_eq!(leg.describe(), "taxi (Taxi)");
    /// ```
    pub fn new(
        mode: TransportMode,
        from: Location,
        to: Location,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        fare: Fare,
        provider: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::InvalidLeg(
                "arrival must not precede departure",
            ));
        }

        Ok(Self {
            mode,
            from,
            to,
            departure,
            arrival,
            duration: arrival - departure,
            fare,
            provider: provider.into(),
            booking_url: None,
        })
    }

    /// Override the reported duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Attach a booking link.
    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.booking_url = Some(url.into());
        self
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn origin(&self) -> &Location {
        &self.from
    }

    pub fn destination(&self) -> &Location {
        &self.to
    }

    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Duration as reported by the producer.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }

    pub fn price(&self) -> f64 {
        self.fare.amount
    }

    pub fn currency(&self) -> Currency {
        self.fare.currency
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn booking_url(&self) -> Option<&str> {
        self.booking_url.as_deref()
    }

    /// Short description: `"<mode> (<provider>)"`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.mode, self.provider)
    }
}
