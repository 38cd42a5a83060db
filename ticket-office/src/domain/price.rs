//! Fixed-point ticket prices.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Error returned when parsing an invalid price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct PriceError {
    reason: &'static str,
}

/// A ticket price in hundredths of the currency unit.
///
/// Prices are always written with exactly two fractional digits, so storing
/// hundredths keeps sums exact.
///
/// # Examples
///
/// ```
/// use ticket_office::domain::Price;
///
/// let p = Price::parse("2.50").unwrap();
/// assert_eq!(p.hundredths(), 250);
/// assert_eq!(p.to_string(), "2.50");
///
/// // The integer part may be omitted
/// assert_eq!(Price::parse(".75").unwrap().hundredths(), 75);
///
/// // Exactly two fractional digits are required
/// assert!(Price::parse("2.5").is_err());
/// assert!(Price::parse("2").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// Zero price.
    pub const ZERO: Price = Price(0);

    /// Create a price from a number of hundredths.
    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// Parse a price of the form `[0-9]*.[0-9][0-9]`.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let (units, fraction) = s.split_once('.').ok_or(PriceError {
            reason: "missing decimal point",
        })?;

        if fraction.len() != 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceError {
                reason: "expected exactly two fractional digits",
            });
        }
        if !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceError {
                reason: "units must be digits",
            });
        }

        let units: u64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| PriceError {
                reason: "units out of range",
            })?
        };
        let fraction: u64 = fraction.parse().map_err(|_| PriceError {
            reason: "fraction must be digits",
        })?;

        units
            .checked_mul(100)
            .and_then(|h| h.checked_add(fraction))
            .map(Price)
            .ok_or(PriceError {
                reason: "units out of range",
            })
    }

    /// Returns the price in hundredths.
    pub fn hundredths(&self) -> u64 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |total, price| total + price)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse roundtrips
        #[test]
        fn display_parse_roundtrip(hundredths in 0u64..10_000_000) {
            let price = Price::from_hundredths(hundredths);
            prop_assert_eq!(Price::parse(&price.to_string()).unwrap(), price);
        }

        /// Ordering agrees with hundredths
        #[test]
        fn ordering_matches_hundredths(a in 0u64..100_000, b in 0u64..100_000) {
            prop_assert_eq!(
                Price::from_hundredths(a).cmp(&Price::from_hundredths(b)),
                a.cmp(&b)
            );
        }
    }
}
