//! Itinerary verification.
//!
//! An itinerary is a starting stop followed by `(line, stop)` hops. Each hop
//! is a leg travelled on one line. Legs must exist on their line, go
//! forward along it, and connect in time with the leg before.

use tracing::trace;

use crate::domain::{ClockTime, LineId, StopId, ValidationError};

use super::lines::LineRegistry;

/// A route query's itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Stop the first leg departs from.
    pub origin: StopId,

    /// Each hop: the line ridden and the stop alighted at.
    pub hops: Vec<(LineId, StopId)>,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg<'a> {
    pub from: &'a StopId,
    pub line: &'a LineId,
    pub to: &'a StopId,
}

impl Itinerary {
    /// Create an itinerary.
    pub fn new(origin: StopId, hops: Vec<(LineId, StopId)>) -> Self {
        Self { origin, hops }
    }

    /// Legs in travel order; each leg starts where the previous one ended.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_>> {
        let starts = std::iter::once(&self.origin).chain(self.hops.iter().map(|(_, stop)| stop));
        starts
            .zip(&self.hops)
            .map(|(from, (line, to))| Leg { from, line, to })
    }
}

/// Result of verifying an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Every transfer is seamless.
    Seamless {
        departure: ClockTime,
        arrival: ClockTime,
    },

    /// The traveller must wait at this stop for the next leg. Legs after it
    /// were not examined.
    Wait { stop: StopId },
}

/// Verify an itinerary against the registered lines.
///
/// Stops at the first leg that would require waiting. A leg departing
/// before the previous one arrives is an error.
pub fn verify(
    lines: &LineRegistry,
    itinerary: &Itinerary,
) -> Result<Verification, ValidationError> {
    let mut departure: Option<ClockTime> = None;
    let mut prev_arrival: Option<ClockTime> = None;

    for leg in itinerary.legs() {
        let line = lines
            .get(leg.line.as_str())
            .ok_or_else(|| ValidationError::UnknownLine(leg.line.clone()))?;

        let unknown = |stop: &StopId| ValidationError::UnknownStop {
            line: leg.line.clone(),
            stop: stop.clone(),
        };
        let start = line.stop(leg.from.as_str()).ok_or_else(|| unknown(leg.from))?;
        let end = line.stop(leg.to.as_str()).ok_or_else(|| unknown(leg.to))?;

        if start.position >= end.position {
            return Err(ValidationError::OrderError {
                line: leg.line.clone(),
                from: leg.from.clone(),
                to: leg.to.clone(),
            });
        }

        if let Some(prev) = prev_arrival {
            if prev > start.time {
                return Err(ValidationError::NonCausal {
                    stop: leg.from.clone(),
                });
            }
            if prev < start.time {
                trace!(stop = %leg.from, arrived = %prev, departs = %start.time, "Wait required");
                return Ok(Verification::Wait {
                    stop: leg.from.clone(),
                });
            }
        }

        departure.get_or_insert(start.time);
        prev_arrival = Some(end.time);
    }

    match (departure, prev_arrival) {
        (Some(departure), Some(arrival)) => Ok(Verification::Seamless { departure, arrival }),
        // An itinerary with no hops is not a route query.
        _ => Err(ValidationError::Malformed),
    }
}
