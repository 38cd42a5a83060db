//! Route query responses and their wire encoding.

use std::fmt;

use crate::domain::StopId;

use super::optimize::TicketSet;

/// Outcome of a route query that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Tickets were sold for the route.
    Accepted(TicketSet),

    /// The route needs a wait at this stop; nothing was sold.
    Wait(StopId),

    /// No set of tickets covers the route.
    NoSolution,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Accepted(set) => {
                f.write_str("! ")?;
                for ticket in &set.tickets {
                    write!(f, " {ticket};")?;
                }
                Ok(())
            }
            Response::Wait(stop) => write!(f, ":-( {stop}"),
            Response::NoSolution => f.write_str(":-|"),
        }
    }
}
