//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from provider/IO errors.

use super::Currency;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., arrival before departure)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// A leg is priced in a different currency from its itinerary
    #[error("mixed currencies: itinerary is in {expected} but a leg is priced in {found}")]
    MixedCurrency { expected: Currency, found: Currency },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidLeg("arrival must not precede departure");
        assert_eq!(
            err.to_string(),
            "invalid leg: arrival must not precede departure"
        );

        let err = DomainError::MixedCurrency {
            expected: Currency::EUR,
            found: Currency::parse("USD").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "mixed currencies: itinerary is in EUR but a leg is priced in USD"
        );
    }
}
