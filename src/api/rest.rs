//! Shared request plumbing for the service wrappers.
//!
//! Each service wrapper (payments, orders, agents) composes a
//! [`RestClient`] that owns the base URL, the JSON content headers, and
//! the bearer-token injection applied to every request.

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{ApiError, HttpClient, HttpError, HttpRequest, HttpResponse};

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

pub(super) struct RestClient<H> {
    client: H,
    base_url: Url,
    bearer: Option<HeaderValue>,
}

impl<H: HttpClient> RestClient<H> {
    pub(super) const fn new(client: H, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            bearer: None,
        }
    }

    /// Attaches a bearer token sent as `Authorization` on every request.
    pub(super) fn with_bearer(mut self, token: &str) -> Result<Self, ApiError> {
        let value = HeaderValue::try_from(format!("Bearer {token}"))
            .map_err(|_| ApiError::InvalidBearerToken)?;
        self.bearer = Some(value);
        Ok(self)
    }

    /// Builds a URL by appending path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::Http(HttpError::InvalidUrl(format!(
                    "cannot-be-a-base URL: {}",
                    self.base_url
                )))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn build(&self, method: Method, url: Url) -> HttpRequest {
        let mut req = HttpRequest::new(method, url)
            .with_header(CONTENT_TYPE, application_json())
            .with_header(ACCEPT, application_json());
        if let Some(bearer) = &self.bearer {
            req = req.with_header(AUTHORIZATION, bearer.clone());
        }
        req
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, ApiError> {
        let req = self.build(Method::GET, self.endpoint(segments)?);
        self.execute(req).await
    }

    pub(super) async fn post_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let req = self
            .build(Method::POST, self.endpoint(segments)?)
            .with_body(serde_json::to_vec(body)?);
        self.execute(req).await
    }

    pub(super) async fn put_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let req = self
            .build(Method::PUT, self.endpoint(segments)?)
            .with_body(serde_json::to_vec(body)?);
        self.execute(req).await
    }

    async fn execute<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ApiError> {
        let response = self.client.request(req).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                detail: extract_detail(&response),
            });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// Pulls a human-readable detail out of an error response body.
///
/// The console's backends report validation and routing problems in a
/// JSON `detail` (FastAPI style) or `message` field.
fn extract_detail(response: &HttpResponse) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(&response.body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
#[path = "rest_tests.rs"]
mod tests;
