//! Shared test doubles for the service wrapper tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that records requests and replays queued responses.
pub(super) struct MockHttpClient {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
}

impl MockHttpClient {
    pub(super) fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    /// Queues a single 200 response with the given JSON body.
    pub(super) fn replying_json(body: &str) -> Self {
        Self::new(vec![Ok(json_response(http::StatusCode::OK, body))])
    }

    /// Returns all requests seen so far.
    pub(super) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json_response(http::StatusCode::OK, "null")))
    }
}

pub(super) fn json_response(status: http::StatusCode, body: &str) -> HttpResponse {
    HttpResponse::new(status, http::HeaderMap::new(), body.as_bytes().to_vec())
}
