//! Payment service client.
//!
//! Thin wrappers over the payment backend's REST endpoints. The client
//! also implements [`PaymentFetcher`], which is what the status watcher
//! polls.

use serde::Serialize;
use url::Url;

use super::rest::RestClient;
use super::{ApiError, HttpClient, PaymentFetcher, PaymentRecord};

/// Payload for creating a payment record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    /// The order being paid for.
    pub order_id: String,
    /// The paying user.
    pub user_id: String,
    /// Payment amount.
    pub amount: f64,
}

#[derive(Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

/// Client for the payment service.
///
/// # Type Parameters
///
/// * `H` - The [`HttpClient`] implementation used for transport
pub struct PaymentsApi<H> {
    rest: RestClient<H>,
}

impl<H: HttpClient> PaymentsApi<H> {
    /// Creates a client against the given payment API base URL,
    /// e.g. `http://10.172.66.224:8084/payment/api`.
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

    /// Fetches all payment records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn list(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.rest.get_json(&["payments"]).await
    }

    /// Fetches the payment records belonging to one user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<PaymentRecord>, ApiError> {
        self.rest.get_json(&["payments", "user", user_id]).await
    }

    /// Fetches a single payment record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn get(&self, payment_id: &str) -> Result<PaymentRecord, ApiError> {
        self.rest.get_json(&["payments", payment_id]).await
    }

    /// Fetches the payment record for an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn get_by_order(&self, order_id: &str) -> Result<PaymentRecord, ApiError> {
        self.rest.get_json(&["payments", "order", order_id]).await
    }

    /// Creates a payment record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn create(&self, payment: &NewPayment) -> Result<PaymentRecord, ApiError> {
        self.rest.post_json(&["payments"], payment).await
    }

    /// Updates a payment record's status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn update_status(
        &self,
        payment_id: &str,
        status: &str,
    ) -> Result<PaymentRecord, ApiError> {
        self.rest
            .put_json(&["payments", payment_id, "status"], &StatusUpdate { status })
            .await
    }
}

impl<H: HttpClient> PaymentFetcher for PaymentsApi<H> {
    async fn fetch(&self, subject_id: &str) -> Result<Vec<PaymentRecord>, ApiError> {
        self.list_for_user(subject_id).await
    }
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
