//! Order service client.
//!
//! Wraps the order backend's REST endpoints and runs every response
//! through the order model adapter, so callers only ever see the
//! console-shaped [`Order`].

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::model::{Order, OrderDraft};

use super::rest::RestClient;
use super::{ApiError, HttpClient};

#[derive(Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

/// Client for the order service.
pub struct OrdersApi<H> {
    rest: RestClient<H>,
}

impl<H: HttpClient> OrdersApi<H> {
    /// Creates a client against the given order API base URL,
    /// e.g. `http://10.172.66.224:8084/order/api`.
    #[must_use]
    pub const fn new(client: H, base_url: Url) -> Self {
        Self {
            rest: RestClient::new(client, base_url),
        }
    }

    /// Attaches a bearer token sent with every request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBearerToken`] if the token contains
    /// characters not allowed in a header value.
    pub fn with_bearer(mut self, token: &str) -> Result<Self, ApiError> {
        self.rest = self.rest.with_bearer(token)?;
        Ok(self)
    }

    /// Fetches all orders.
    ///
    /// The backend sometimes returns a single object instead of an
    /// array for one-element results; both shapes are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        let value: Value = self.rest.get_json(&["orders"]).await?;
        Ok(adapt_order_list(&value))
    }

    /// Creates an order from console-shaped draft data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn create(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        let value: Value = self
            .rest
            .post_json(&["orders"], &draft.to_request_value())
            .await?;
        Ok(Order::from_value(&value))
    }

    /// Fetches one order's details.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn details(&self, order_id: &str) -> Result<Order, ApiError> {
        let value: Value = self.rest.get_json(&["orders", order_id]).await?;
        Ok(Order::from_value(&value))
    }

    /// Updates an order's status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn update_status(&self, order_id: &str, status: &str) -> Result<Order, ApiError> {
        let value: Value = self
            .rest
            .put_json(&["orders", order_id, "status"], &StatusUpdate { status })
            .await?;
        Ok(Order::from_value(&value))
    }
}

/// Adapts a list response, wrapping a lone object into a one-order list.
fn adapt_order_list(value: &Value) -> Vec<Order> {
    match value.as_array() {
        Some(orders) => orders.iter().map(Order::from_value).collect(),
        None => vec![Order::from_value(value)],
    }
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
