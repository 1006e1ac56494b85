//! REST clients for the console's backend services.
//!
//! This module provides:
//! - HTTP abstraction ([`HttpClient`], [`HttpRequest`], [`HttpResponse`])
//! - Production HTTP client ([`ReqwestClient`])
//! - Payment records and fetching ([`PaymentRecord`], [`PaymentFetcher`])
//! - Service wrappers ([`PaymentsApi`], [`OrdersApi`], [`AgentApi`])
//! - Error handling ([`ApiError`], [`HttpError`])

mod agents;
mod client;
mod error;
mod fetcher;
mod http;
mod orders;
mod payments;
mod records;
mod rest;

#[cfg(test)]
mod test_support;

pub use agents::{AgentApi, new_session_id};
pub use client::ReqwestClient;
pub use error::ApiError;
pub use fetcher::PaymentFetcher;
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse};
pub use orders::OrdersApi;
pub use payments::{NewPayment, PaymentsApi};
pub use records::PaymentRecord;
