//! Domain types for the ticket office.
//!
//! This module contains the value types that requests are built from. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod error;
mod ids;
mod price;
mod time;

pub use error::ValidationError;
pub use ids::{InvalidId, LineId, StopId, TicketId, is_line_id, is_stop_id, is_ticket_id};
pub use price::{Price, PriceError};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError, is_clock_shape};
