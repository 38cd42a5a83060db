//! Cheapest covering ticket set search.
//!
//! A route is covered by a multiset of tickets whose durations add up to at
//! least the required coverage. Sets are generated smallest first, and for a
//! given size as non-decreasing catalog index tuples in lexicographic order.
//! That is the first ordering of each multiset a full Cartesian enumeration
//! with repetition would reach, so ties between equally priced sets resolve
//! the same way: the first one found wins.

use tracing::trace;

use crate::domain::{Price, TicketId};

use super::tickets::{TicketCatalog, TicketProduct};

/// A winning ticket set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSet {
    /// Ticket ids in catalog order; repeated tickets appear repeatedly.
    pub tickets: Vec<TicketId>,

    /// Summed price.
    pub price: Price,

    /// Summed coverage in minutes.
    pub duration_mins: i64,
}

impl TicketSet {
    /// Number of tickets in the set.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Best candidate so far, as catalog indices.
struct Best {
    indices: Vec<usize>,
    price: Price,
    duration_mins: i64,
}

/// State shared by every branch of one search.
struct Search<'a> {
    products: &'a [TicketProduct],
    target_mins: i64,
    chosen: Vec<usize>,
    best: Option<Best>,
    examined: usize,
}

impl Search<'_> {
    /// Grow `chosen` to `size` tickets using indices from `from` onwards.
    fn extend(&mut self, size: usize, from: usize, price: Price, duration_mins: i64) {
        if self.chosen.len() == size {
            self.examined += 1;
            if duration_mins < self.target_mins {
                return;
            }
            // Strictly cheaper only: ties keep the earlier set.
            let improves = match &self.best {
                None => true,
                Some(current) => price < current.price,
            };
            if improves {
                self.best = Some(Best {
                    indices: self.chosen.clone(),
                    price,
                    duration_mins,
                });
            }
            return;
        }

        let products = self.products;
        for (i, product) in products.iter().enumerate().skip(from) {
            self.chosen.push(i);
            self.extend(
                size,
                i,
                price + product.price,
                duration_mins + i64::from(product.duration_mins),
            );
            self.chosen.pop();
        }
    }
}

/// Find the cheapest multiset of at most `max_tickets` tickets covering at
/// least `target_mins` minutes.
///
/// Returns `None` if no such set exists (including an empty catalog).
pub fn find_cheapest(
    target_mins: i64,
    catalog: &TicketCatalog,
    max_tickets: usize,
) -> Option<TicketSet> {
    let mut search = Search {
        products: catalog.products(),
        target_mins,
        chosen: Vec::with_capacity(max_tickets),
        best: None,
        examined: 0,
    };

    for size in 1..=max_tickets {
        search.extend(size, 0, Price::ZERO, 0);
    }

    trace!(
        target_mins,
        examined = search.examined,
        found = search.best.is_some(),
        "Ticket search complete"
    );

    let products = search.products;
    search.best.map(|best| TicketSet {
        tickets: best
            .indices
            .iter()
            .map(|&i| products[i].id.clone())
            .collect(),
        price: best.price,
        duration_mins: best.duration_mins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(products: &[(&str, &str, u32)]) -> TicketCatalog {
        let mut catalog = TicketCatalog::new();
        for (id, price, duration) in products {
            catalog
                .add(
                    TicketId::parse(id).unwrap(),
                    Price::parse(price).unwrap(),
                    *duration,
                )
                .unwrap();
        }
        catalog
    }

    fn names(set: &TicketSet) -> Vec<&str> {
        set.tickets.iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn repeated_cheap_ticket_beats_pair() {
        let catalog = catalog(&[("A", "3.00", 10), ("B", "5.00", 20), ("C", "2.00", 15)]);
        let set = find_cheapest(31, &catalog, 3).unwrap();

        assert_eq!(names(&set), vec!["C", "C", "C"]);
        assert_eq!(set.price, Price::parse("6.00").unwrap());
        assert_eq!(set.duration_mins, 45);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn single_ticket_when_enough() {
        let catalog = catalog(&[("Standard", "2.00", 40)]);
        let set = find_cheapest(31, &catalog, 3).unwrap();
        assert_eq!(names(&set), vec!["Standard"]);
    }

    #[test]
    fn coverage_boundary_is_inclusive() {
        let catalog = catalog(&[("Short", "1.00", 30)]);
        assert!(find_cheapest(30, &catalog, 1).is_some());
        assert!(find_cheapest(31, &catalog, 1).is_none());
    }

    #[test]
    fn no_solution_beyond_three_tickets() {
        let catalog = catalog(&[("Short", "1.00", 10)]);
        assert!(find_cheapest(31, &catalog, 3).is_none());
        assert_eq!(find_cheapest(30, &catalog, 3).unwrap().len(), 3);
    }

    #[test]
    fn empty_catalog_has_no_solution() {
        assert!(find_cheapest(1, &TicketCatalog::new(), 3).is_none());
    }

    #[test]
    fn zero_price_ticket_can_win() {
        let catalog = catalog(&[("Paid", "1.00", 100), ("Free", "0.00", 100)]);
        let set = find_cheapest(50, &catalog, 3).unwrap();
        assert_eq!(names(&set), vec!["Free"]);
        assert_eq!(set.price, Price::ZERO);
    }

    #[test]
    fn first_zero_price_set_is_kept() {
        // A zero best must not be mistaken for "nothing found yet"
        let catalog = catalog(&[("Free", "0.00", 100), ("AlsoFree", "0.00", 100)]);
        let set = find_cheapest(50, &catalog, 3).unwrap();
        assert_eq!(names(&set), vec!["Free"]);
    }

    #[test]
    fn ties_prefer_smaller_sets() {
        let catalog = catalog(&[("Half", "1.00", 20), ("Whole", "2.00", 40)]);
        let set = find_cheapest(40, &catalog, 3).unwrap();
        assert_eq!(names(&set), vec!["Whole"]);
    }

    #[test]
    fn ties_within_size_prefer_catalog_order() {
        let catalog = catalog(&[("X", "1.00", 10), ("Y", "2.00", 20), ("Z", "1.00", 10)]);
        // X+Y and Y+Z both cost 3.00 and cover 30
        let set = find_cheapest(30, &catalog, 2).unwrap();
        assert_eq!(names(&set), vec!["X", "Y"]);
    }

    #[test]
    fn non_positive_target_takes_cheapest_single() {
        let catalog = catalog(&[("A", "3.00", 10), ("B", "1.00", 5)]);
        let set = find_cheapest(-20, &catalog, 3).unwrap();
        assert_eq!(names(&set), vec!["B"]);
    }

    #[test]
    fn max_tickets_bounds_the_search() {
        let catalog = catalog(&[("A", "1.00", 10)]);
        assert!(find_cheapest(20, &catalog, 1).is_none());
        assert!(find_cheapest(20, &catalog, 2).is_some());
        assert!(find_cheapest(1, &catalog, 0).is_none());
    }
}
