//! Domain error types.
//!
//! Every way a single request can be refused is a [`ValidationError`]. None
//! of them is fatal: the office state is left as it was and processing goes
//! on with the next request.

use super::{InvalidId, LineId, PriceError, StopId, TicketId, TimeError};

/// Reasons a request is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The request matches none of the request grammars
    #[error("unrecognized request format")]
    Malformed,

    /// A timetable time is out of range
    #[error(transparent)]
    InvalidTime(#[from] TimeError),

    /// A ticket price could not be read
    #[error(transparent)]
    InvalidPrice(#[from] PriceError),

    /// An identifier has the wrong alphabet
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// A ticket duration could not be read
    #[error("invalid ticket duration: {0}")]
    InvalidDuration(String),

    /// A line with this id is already registered
    #[error("line {0} already registered")]
    DuplicateLine(LineId),

    /// A stop appears twice in one line
    #[error("stop {stop} appears twice on line {line}")]
    DuplicateStop { line: LineId, stop: StopId },

    /// A ticket with this id is already registered
    #[error("ticket \"{0}\" already registered")]
    DuplicateTicket(TicketId),

    /// A route query names a line that was never registered
    #[error("line {0} is not registered")]
    UnknownLine(LineId),

    /// A route query names a stop the line does not serve
    #[error("stop {stop} is not on line {line}")]
    UnknownStop { line: LineId, stop: StopId },

    /// A leg does not travel forward along its line
    #[error("leg {from} -> {to} does not travel forward on line {line}")]
    OrderError {
        line: LineId,
        from: StopId,
        to: StopId,
    },

    /// A transfer departs before the previous leg arrives
    #[error("leg from {stop} departs before the previous leg arrives")]
    NonCausal { stop: StopId },

    /// A stop time lies outside the configured service window
    #[error("stop {stop} on line {line} is outside the service window")]
    OutsideServiceWindow { line: LineId, stop: StopId },

    /// Stop times on a line do not strictly increase
    #[error("stop times on line {line} do not increase at {stop}")]
    TimesNotAscending { line: LineId, stop: StopId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let line = LineId::parse("7").unwrap();
        let a = StopId::parse("a").unwrap();
        let b = StopId::parse("b").unwrap();

        assert_eq!(
            ValidationError::Malformed.to_string(),
            "unrecognized request format"
        );
        assert_eq!(
            ValidationError::DuplicateLine(line.clone()).to_string(),
            "line 7 already registered"
        );
        assert_eq!(
            ValidationError::DuplicateStop {
                line: line.clone(),
                stop: a.clone()
            }
            .to_string(),
            "stop a appears twice on line 7"
        );
        assert_eq!(
            ValidationError::DuplicateTicket(TicketId::parse("Day Pass").unwrap()).to_string(),
            "ticket \"Day Pass\" already registered"
        );
        assert_eq!(
            ValidationError::OrderError {
                line,
                from: b.clone(),
                to: a
            }
            .to_string(),
            "leg b -> a does not travel forward on line 7"
        );
        assert_eq!(
            ValidationError::NonCausal { stop: b }.to_string(),
            "leg from b departs before the previous leg arrives"
        );
    }

    #[test]
    fn wraps_time_errors() {
        let err: ValidationError = crate::domain::ClockTime::parse("25:00").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }
}
