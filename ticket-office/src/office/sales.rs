//! Count of tickets sold.

/// Number of tickets sold over the life of the office. Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesCounter(u64);

impl SalesCounter {
    /// Record a sale of `tickets` tickets.
    pub fn record(&mut self, tickets: usize) {
        self.0 = self.0.saturating_add(tickets as u64);
    }

    /// Tickets sold so far.
    pub fn total(&self) -> u64 {
        self.0
    }
}
