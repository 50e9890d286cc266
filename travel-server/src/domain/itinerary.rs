//! Itinerary type.
//!
//! An `Itinerary` is a complete door-to-door trip: an ordered sequence of
//! legs plus the aggregates derived from them.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use super::{Currency, DomainError, Leg};

/// Separator between leg descriptions.
pub const LEG_SEPARATOR: &str = " → ";

/// A complete journey from origin to destination.
///
/// Price, timing and description are derived from the legs when the
/// itinerary is built and cannot be set independently. Building twice from
/// the same legs always gives the same result.
///
/// Elapsed time spans first departure to last arrival, so waits between
/// legs are included. It is not the sum of leg durations.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
    total_price: f64,
    currency: Currency,
    total_time: Duration,
    departure: Option<DateTime<Utc>>,
    arrival: Option<DateTime<Utc>>,
    description: String,
}

impl Itinerary {
    /// Aggregate a leg sequence into an itinerary priced in `currency`.
    ///
    /// An empty sequence yields a zero-priced itinerary with no departure,
    /// no arrival and an empty description.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MixedCurrency`] if any leg is priced in a
    /// currency other than `currency`.
    pub fn from_legs(legs: Vec<Leg>, currency: Currency) -> Result<Self, DomainError> {
        if let Some(leg) = legs.iter().find(|leg| leg.currency() != currency) {
            return Err(DomainError::MixedCurrency {
                expected: currency,
                found: leg.currency(),
            });
        }

        let total_price = legs.iter().map(Leg::price).sum();

        let departure = legs.first().map(Leg::departure);
        let arrival = legs.last().map(Leg::arrival);
        let total_time = match (departure, arrival) {
            (Some(dep), Some(arr)) => arr - dep,
            _ => Duration::zero(),
        };

        let description = legs
            .iter()
            .map(Leg::describe)
            .collect::<Vec<_>>()
            .join(LEG_SEPARATOR);

        Ok(Self {
            legs,
            total_price,
            currency,
            total_time,
            departure,
            arrival,
            description,
        })
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Time from first departure to last arrival.
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    pub fn departure(&self) -> Option<DateTime<Utc>> {
        self.departure
    }

    pub fn arrival(&self) -> Option<DateTime<Utc>> {
        self.arrival
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Consume the itinerary, returning its legs.
    pub fn into_legs(self) -> Vec<Leg> {
        self.legs
    }
}

fn format_duration(d: Duration) -> String {
    format!("{}h{:02}m", d.num_hours(), d.num_minutes() % 60)
}

fn format_time(t: Option<DateTime<Utc>>) -> String {
    t.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f, "  Total Price: {:.2} {}", self.total_price, self.currency)?;
        writeln!(f, "  Total Time: {}", format_duration(self.total_time))?;
        writeln!(f, "  Departure: {}", format_time(self.departure))?;
        write!(f, "  Arrival: {}", format_time(self.arrival))?;

        for (i, leg) in self.legs.iter().enumerate() {
            write!(
                f,
                "\n    Leg {}: {} from {} to {} ({}, {:.2} {})",
                i + 1,
                leg.mode(),
                leg.origin().name,
                leg.destination().name,
                format_duration(leg.duration()),
                leg.price(),
                leg.currency()
            )?;
        }

        Ok(())
    }
}
