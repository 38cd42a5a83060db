//! Identifier types for lines, stops and tickets.
//!
//! Each identifier has a fixed alphabet. Parsing checks it, so a value of
//! one of these types is always a well-formed protocol token.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $valid:path, $reason:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, checking its alphabet.
            pub fn parse(s: &str) -> Result<Self, InvalidId> {
                if s.is_empty() {
                    return Err(InvalidId {
                        kind: $kind,
                        reason: "must not be empty",
                    });
                }
                if !$valid(s) {
                    return Err(InvalidId {
                        kind: $kind,
                        reason: $reason,
                    });
                }
                Ok(Self(s.to_owned()))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// A line number: one or more ASCII digits.
    ///
    /// Kept as text, so `"01"` and `"1"` name different lines.
    ///
    /// ```
    /// use ticket_office::domain::LineId;
    ///
    /// assert!(LineId::parse("17").is_ok());
    /// assert!(LineId::parse("1a").is_err());
    /// ```
    LineId,
    "line",
    is_line_id,
    "must be ASCII digits"
);

string_id!(
    /// A stop name: ASCII letters, `_` and `^`.
    ///
    /// ```
    /// use ticket_office::domain::StopId;
    ///
    /// assert!(StopId::parse("Main_St^").is_ok());
    /// assert!(StopId::parse("Main St").is_err());
    /// ```
    StopId,
    "stop",
    is_stop_id,
    "must be ASCII letters, '_' or '^'"
);

string_id!(
    /// A ticket name: ASCII letters and spaces.
    ///
    /// Spaces may appear anywhere, including at either end.
    ///
    /// ```
    /// use ticket_office::domain::TicketId;
    ///
    /// assert!(TicketId::parse("Day Return").is_ok());
    /// assert!(TicketId::parse("Zone2").is_err());
    /// ```
    TicketId,
    "ticket",
    is_ticket_id,
    "must be ASCII letters or spaces"
);

/// Whether `s` is a line id: `[0-9]+`.
pub fn is_line_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `s` is a stop name: `[a-zA-Z_^]+`.
pub fn is_stop_id(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphabetic() || b == b'_' || b == b'^')
}

/// Whether `s` is a ticket name: `[a-zA-Z ]+`.
pub fn is_ticket_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic() || b == b' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ids() {
        assert!(LineId::parse("0").is_ok());
        assert!(LineId::parse("00017").is_ok());
        assert!(LineId::parse("").is_err());
        assert!(LineId::parse("-1").is_err());
        assert!(LineId::parse("1 2").is_err());
        assert_ne!(LineId::parse("01").unwrap(), LineId::parse("1").unwrap());
    }

    #[test]
    fn stop_ids() {
        assert!(StopId::parse("a").is_ok());
        assert!(StopId::parse("^_^").is_ok());
        assert!(StopId::parse("").is_err());
        assert!(StopId::parse("a1").is_err());
        assert!(StopId::parse("a-b").is_err());
        assert!(StopId::parse("Zürich").is_err());
    }

    #[test]
    fn ticket_ids() {
        assert!(TicketId::parse("Standard").is_ok());
        assert!(TicketId::parse(" Padded ").is_ok());
        assert!(TicketId::parse("").is_err());
        assert!(TicketId::parse("Half_Price").is_err());
    }

    #[test]
    fn display_and_debug() {
        let stop = StopId::parse("Central").unwrap();
        assert_eq!(stop.to_string(), "Central");
        assert_eq!(format!("{:?}", stop), "StopId(Central)");
        assert_eq!(stop.as_str(), "Central");
    }

    #[test]
    fn error_display() {
        let err = StopId::parse("a b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid stop id: must be ASCII letters, '_' or '^'"
        );
    }

    #[test]
    fn borrow_as_str_for_lookup() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(LineId::parse("42").unwrap());
        assert!(set.contains("42"));
        assert!(!set.contains("43"));
    }
}
