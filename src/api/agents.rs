//! Agent chat client.
//!
//! The console talks to its conversational agents (product guide,
//! communication hub) through a single `/chat` endpoint; the hub routes
//! the message to order or payment agents server-side. Replies are
//! free-form JSON and returned as-is.

use serde::Serialize;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use super::rest::RestClient;
use super::{ApiError, HttpClient};

#[derive(Serialize)]
struct ChatRequest<'a> {
    user_input: &'a str,
    session_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

/// Client for a conversational agent endpoint.
pub struct AgentApi<H> {
    rest: RestClient<H>,
}

impl<H: HttpClient> AgentApi<H> {
    /// Creates a client against the given agent base URL,
    /// e.g. `http://localhost:8085`.
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

    /// Sends one chat turn to the agent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn chat(&self, user_input: &str, session_id: &str) -> Result<Value, ApiError> {
        self.rest
            .post_json(
                &["chat"],
                &ChatRequest {
                    user_input,
                    session_id,
                    user_id: None,
                },
            )
            .await
    }

    /// Sends one chat turn on behalf of a specific user, for agents
    /// that route by user (the communication hub).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn chat_as(
        &self,
        user_input: &str,
        session_id: &str,
        user_id: &str,
    ) -> Result<Value, ApiError> {
        self.rest
            .post_json(
                &["chat"],
                &ChatRequest {
                    user_input,
                    session_id,
                    user_id: Some(user_id),
                },
            )
            .await
    }

    /// Asks the hub for the user's orders.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn orders_inquiry(&self, session_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.chat_as("show my orders", session_id, user_id).await
    }

    /// Asks the hub for the user's payment information.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the payload
    /// cannot be decoded.
    pub async fn payments_inquiry(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> Result<Value, ApiError> {
        self.chat_as("show my payment records", session_id, user_id)
            .await
    }

    /// Checks whether the agent service is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the health endpoint is unreachable or
    /// answers with a non-success status.
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.rest.get_json(&["health"]).await
    }
}

/// Generates a fresh chat session identifier.
#[must_use]
pub fn new_session_id() -> String {
    format!("user_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
#[path = "agents_tests.rs"]
mod tests;
