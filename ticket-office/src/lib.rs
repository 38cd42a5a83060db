//! Ticket office request engine.
//!
//! Answers a line-oriented protocol: register lines (stops with scheduled
//! times) and ticket products (price and minutes covered), then for each
//! route query check that its transfers connect and sell the cheapest set
//! of tickets covering the journey.

pub mod domain;
pub mod driver;
pub mod office;
