//! Three-letter code types.

use std::fmt;

/// Error returned when parsing an invalid three-letter code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid code: {reason}")]
pub struct InvalidCode {
    reason: &'static str,
}

/// Validate that `s` is exactly 3 uppercase ASCII letters.
fn parse_letters(s: &str) -> Result<[u8; 3], InvalidCode> {
    let bytes = s.as_bytes();

    if bytes.len() != 3 {
        return Err(InvalidCode {
            reason: "must be exactly 3 characters",
        });
    }

    if !bytes.iter().all(u8::is_ascii_uppercase) {
        return Err(InvalidCode {
            reason: "must be uppercase ASCII letters A-Z",
        });
    }

    Ok([bytes[0], bytes[1], bytes[2]])
}

fn letters_as_str(bytes: &[u8; 3]) -> &str {
    // Only valid ASCII uppercase letters are ever stored.
    std::str::from_utf8(bytes).unwrap_or_default()
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `IataCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use travel_server::domain::IataCode;
///
/// let mad = IataCode::parse("MAD").unwrap();
/// assert_eq!(mad.as_str(), "MAD");
///
/// // Strict parsing rejects lowercase
/// assert!(IataCode::parse("mad").is_err());
///
/// // ...but normalized parsing accepts it
/// assert_eq!(IataCode::parse_normalized("bcn").unwrap().as_str(), "BCN");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code. The input must be exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        parse_letters(s).map(IataCode)
    }

    /// Parse an IATA code, upper-casing the input first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCode> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        letters_as_str(&self.0)
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 3-letter ISO 4217 currency code, e.g. `EUR`.
///
/// Every leg and itinerary carries one. No conversion is ever performed:
/// amounts in different currencies are never summed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    /// Euro.
    pub const EUR: Currency = Currency(*b"EUR");

    /// Parse a currency code. The input must be exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        parse_letters(s).map(Currency)
    }

    /// Parse a currency code, upper-casing the input first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        letters_as_str(&self.0)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::EUR
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
