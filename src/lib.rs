//! Shop Console: shopping-console service layer.
//!
//! A library for talking to the shopping console's backend services
//! (payments, orders, agent chat) and for watching a user's payment
//! records for status changes via client-side polling.

pub mod api;
pub mod config;
pub mod detector;
pub mod model;
