use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use reqwest::{Client, Method, Request, Response};

use crate::api::HttpSender;
use crate::mock::dispatcher::MockDispatcher;

/// [`HttpSender`] implementation backed by a [`MockDispatcher`].
///
/// Matches the request's method and URL path against the route table and
/// synthesizes an HTTP response from the selected variant. Served requests
/// are recorded for assertions. Unregistered routes yield `501`.
pub struct MockServerSender {
    dispatcher: Arc<MockDispatcher>,
    served: Arc<Mutex<Vec<(Method, String)>>>,
    base_path: String,
}

impl MockServerSender {
    /// Routes are registered relative to the API base path, so the sender
    /// strips `/api/v3` from request paths before matching. Use
    /// [`MockServerSender::with_base_path`] for servers mounted elsewhere.
    pub fn new(dispatcher: Arc<MockDispatcher>) -> Self {
        Self::with_base_path(dispatcher, crate::api::DEFAULT_BASE_PATH)
    }

    pub fn with_base_path(dispatcher: Arc<MockDispatcher>, base_path: &str) -> Self {
        Self {
            dispatcher,
            served: Arc::new(Mutex::new(Vec::new())),
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn served(&self) -> Vec<(Method, String)> {
        self.served.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSender for MockServerSender {
    async fn send(&self, _client: &Client, request: Request) -> Result<Response, reqwest::Error> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        self.served.lock().unwrap().push((method.clone(), path.clone()));

        let route_path = path.strip_prefix(&self.base_path).unwrap_or(&path);
        let response = match self.dispatcher.dispatch(&method, route_path) {
            Some(variant) => {
                let body = serde_json::to_vec(&variant.body).unwrap_or_default();
                synthesize(variant.status, body)
            }
            None => {
                log::warn!("no mock registered for {} {}", method, path);
                let body = format!("no mock registered for {} {}", method, path).into_bytes();
                synthesize(StatusCode::NOT_IMPLEMENTED, body)
            }
        };
        Ok(response)
    }
}

fn synthesize(status: StatusCode, body: Vec<u8>) -> Response {
    let mut response = http::Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    Response::from(response)
}
