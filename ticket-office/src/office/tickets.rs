//! Ticket products on sale.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Price, TicketId, ValidationError};

/// A ticket product: what it costs and how many minutes it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketProduct {
    pub id: TicketId,
    pub price: Price,
    pub duration_mins: u32,
}

/// Append-only store of ticket products, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TicketCatalog {
    products: Vec<TicketProduct>,
    by_id: HashMap<TicketId, usize>,
}

impl TicketCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ticket product.
    pub fn add(
        &mut self,
        id: TicketId,
        price: Price,
        duration_mins: u32,
    ) -> Result<(), ValidationError> {
        if self.by_id.contains_key(&id) {
            return Err(ValidationError::DuplicateTicket(id));
        }

        debug!(ticket = %id, %price, duration_mins, "Registered ticket");

        self.by_id.insert(id.clone(), self.products.len());
        self.products.push(TicketProduct {
            id,
            price,
            duration_mins,
        });

        Ok(())
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&TicketProduct> {
        self.by_id.get(id).map(|&i| &self.products[i])
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[TicketProduct] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TicketId {
        TicketId::parse(s).unwrap()
    }

    fn price(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    #[test]
    fn add_and_lookup() {
        let mut catalog = TicketCatalog::new();
        catalog.add(id("Standard"), price("2.00"), 40).unwrap();

        let product = catalog.get("Standard").unwrap();
        assert_eq!(product.price, price("2.00"));
        assert_eq!(product.duration_mins, 40);
        assert!(catalog.get("Other").is_none());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut catalog = TicketCatalog::new();
        for name in ["Zeta", "Alpha", "Mid Day"] {
            catalog.add(id(name), price("1.00"), 10).unwrap();
        }

        let names: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid Day"]);
    }

    #[test]
    fn reject_duplicate_ticket() {
        let mut catalog = TicketCatalog::new();
        catalog.add(id("Day"), price("5.00"), 60).unwrap();

        let err = catalog.add(id("Day"), price("1.00"), 600).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateTicket(id("Day")));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Day").unwrap().price, price("5.00"));
    }

    #[test]
    fn ids_with_spaces_are_distinct() {
        let mut catalog = TicketCatalog::new();
        catalog.add(id("Day"), price("5.00"), 60).unwrap();
        catalog.add(id("Day "), price("5.00"), 60).unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
