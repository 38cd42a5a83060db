//! The ticket office: request dispatch over the line and ticket registries.
//!
//! [`TicketOffice`] owns all state for a run. Each input line is classified
//! by [`Request::classify`] and handled on its own; a refused request leaves
//! the state exactly as it was.

mod config;
mod lines;
mod optimize;
mod request;
mod response;
mod sales;
mod tickets;
mod verify;

pub use config::{ConfigError, OfficeConfig, ServiceWindow};
pub use lines::{Line, LineRegistry, LineRules, StopEntry};
pub use optimize::{TicketSet, find_cheapest};
pub use request::{Request, is_duration, is_price, tokenize};
pub use response::Response;
pub use sales::SalesCounter;
pub use tickets::{TicketCatalog, TicketProduct};
pub use verify::{Itinerary, Leg, Verification, verify};

use tracing::{debug, trace};

use crate::domain::{ClockTime, LineId, Price, StopId, TicketId, ValidationError};

/// A refused request, tagged with its 1-based position in the input.
///
/// Displays as the diagnostic line written to the error stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error in line {ordinal}: {request}")]
pub struct RequestError {
    pub ordinal: usize,
    pub request: String,
    #[source]
    pub source: ValidationError,
}

/// All state of one ticket office run.
#[derive(Debug, Clone)]
pub struct TicketOffice {
    config: OfficeConfig,
    lines: LineRegistry,
    tickets: TicketCatalog,
    sales: SalesCounter,
}

impl TicketOffice {
    /// Create an empty office.
    pub fn new(config: OfficeConfig) -> Self {
        Self {
            lines: LineRegistry::with_rules(LineRules::from(&config)),
            tickets: TicketCatalog::new(),
            sales: SalesCounter::default(),
            config,
        }
    }

    /// Process the request at 1-based position `ordinal` in the input.
    ///
    /// Returns the response to print, if any. Successful registrations and
    /// blank lines produce no response.
    pub fn process(
        &mut self,
        ordinal: usize,
        request: &str,
    ) -> Result<Option<Response>, RequestError> {
        self.handle(request).map_err(|source| {
            debug!(ordinal, error = %source, "Request refused");
            RequestError {
                ordinal,
                request: request.to_owned(),
                source,
            }
        })
    }

    /// Classify and handle one request.
    pub fn handle(&mut self, request: &str) -> Result<Option<Response>, ValidationError> {
        let parsed = Request::classify(request);
        trace!(kind = parsed.kind(), request, "Handling request");

        match parsed {
            Request::LineAdd { line, calls } => {
                self.add_line(line, &calls)?;
                Ok(None)
            }
            Request::TicketAdd {
                ticket,
                price,
                duration,
            } => {
                self.add_ticket(ticket, price, duration)?;
                Ok(None)
            }
            Request::RouteQuery { origin, hops } => {
                let itinerary = parse_itinerary(origin, &hops)?;
                self.query_route(&itinerary).map(Some)
            }
            Request::Blank => Ok(None),
            Request::Malformed => Err(ValidationError::Malformed),
        }
    }

    /// Register a line from its textual id and `(time, stop)` tokens.
    pub fn add_line(
        &mut self,
        line: &str,
        calls: &[(&str, &str)],
    ) -> Result<(), ValidationError> {
        let id = LineId::parse(line)?;
        let calls = calls
            .iter()
            .map(|(time, stop)| -> Result<_, ValidationError> {
                Ok((ClockTime::parse(time)?, StopId::parse(stop)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.lines.add(id, calls)
    }

    /// Register a ticket product from its textual fields.
    pub fn add_ticket(
        &mut self,
        ticket: &str,
        price: &str,
        duration: &str,
    ) -> Result<(), ValidationError> {
        let id = TicketId::parse(ticket)?;
        let price = Price::parse(price)?;
        let duration_mins: u32 = duration
            .parse()
            .map_err(|_| ValidationError::InvalidDuration(duration.to_owned()))?;
        if duration_mins == 0 {
            return Err(ValidationError::InvalidDuration(duration.to_owned()));
        }

        self.tickets.add(id, price, duration_mins)
    }

    /// Verify an itinerary and, if it needs no waiting, sell the cheapest
    /// ticket set covering it.
    pub fn query_route(&mut self, itinerary: &Itinerary) -> Result<Response, ValidationError> {
        let verification = verify(&self.lines, itinerary)?;

        let elapsed = match &verification {
            Verification::Wait { stop } => {
                debug!(stop = %stop, "Route needs a wait");
                return Ok(Response::Wait(stop.clone()));
            }
            Verification::Seamless { departure, arrival } => departure.minutes_until(*arrival),
        };

        let target = self.config.required_coverage(elapsed);
        match find_cheapest(target, &self.tickets, self.config.max_tickets_per_set) {
            Some(set) => {
                self.sales.record(set.len());
                debug!(
                    elapsed,
                    tickets = set.len(),
                    price = %set.price,
                    sold = self.sales.total(),
                    "Tickets sold"
                );
                Ok(Response::Accepted(set))
            }
            None => {
                debug!(elapsed, target, "No covering ticket set");
                Ok(Response::NoSolution)
            }
        }
    }

    /// Total tickets sold so far.
    pub fn tickets_sold(&self) -> u64 {
        self.sales.total()
    }

    /// Registered lines.
    pub fn lines(&self) -> &LineRegistry {
        &self.lines
    }

    /// Registered ticket products.
    pub fn tickets(&self) -> &TicketCatalog {
        &self.tickets
    }

    /// The office configuration.
    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }
}

impl Default for TicketOffice {
    fn default() -> Self {
        Self::new(OfficeConfig::default())
    }
}

fn parse_itinerary(origin: &str, hops: &[(&str, &str)]) -> Result<Itinerary, ValidationError> {
    let origin = StopId::parse(origin)?;
    let hops = hops
        .iter()
        .map(|(line, stop)| -> Result<_, ValidationError> {
            Ok((LineId::parse(line)?, StopId::parse(stop)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Itinerary::new(origin, hops))
}
