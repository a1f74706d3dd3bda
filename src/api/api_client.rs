use std::sync::Arc;

use reqwest::{Client, Method, Request, RequestBuilder, Response};
use serde::Serialize;

use crate::api::configuration::Configuration;
use crate::api::error::Error;
use crate::api::http_sender::{DefaultSender, HttpSender};
use crate::api::middleware::Middleware;
use crate::api::query::{QueryValue, encode_query};

pub struct ApiClient<S: HttpSender = DefaultSender> {
    pub(super) client: Client,
    pub(super) sender: S,
    pub(super) config: Configuration,
    pub(super) middleware: Vec<Arc<dyn Middleware>>,
}

impl ApiClient<DefaultSender> {
    pub fn new(config: Configuration) -> ApiClient<DefaultSender> {
        Self::with_sender(config, DefaultSender)
    }
}

impl<S: HttpSender> ApiClient<S> {
    pub fn with_sender(config: Configuration, sender: S) -> ApiClient<S> {
        Self {
            client: Client::new(),
            sender,
            config,
            middleware: Vec::new(),
        }
    }

    pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub(super) fn url(&self, path: &str, query: &[(String, QueryValue)]) -> String {
        let mut url = format!("{}{}", self.config.base_path(), path);
        if !query.is_empty() {
            url = format!("{}?{}", url, encode_query(query));
        }
        url
    }

    /// Base request with the config's default headers and auth applied.
    /// Per-request headers set later override these.
    fn request_builder(&self, method: Method, url: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        for (name, value) in &self.config.default_headers {
            builder = builder.header(name, value);
        }
        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.header("User-Agent", user_agent);
        }
        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("api_key", api_key);
        }
        if let Some(authorization) = self.config.authorization() {
            builder = builder.header("Authorization", authorization);
        }
        builder
    }

    pub(super) async fn send_get(
        &self,
        path: &str,
        query: &[(String, QueryValue)],
    ) -> Result<Response, Error> {
        let url = self.url(path, query);
        let request = self
            .request_builder(Method::GET, &url)
            .build()
            .map_err(anyhow::Error::from)?;
        self.dispatch(request).await
    }

    pub(super) async fn send_delete(
        &self,
        path: &str,
        query: &[(String, QueryValue)],
    ) -> Result<Response, Error> {
        let url = self.url(path, query);
        let request = self
            .request_builder(Method::DELETE, &url)
            .build()
            .map_err(anyhow::Error::from)?;
        self.dispatch(request).await
    }

    pub(super) async fn send_post_json<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, Error> {
        self.send_json(Method::POST, path, payload).await
    }

    pub(super) async fn send_put_json<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, Error> {
        self.send_json(Method::PUT, path, payload).await
    }

    async fn send_json<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
    ) -> Result<Response, Error> {
        let json = serde_json::to_vec(payload).map_err(Error::Serialization)?;
        let url = self.url(path, &[]);
        let request = self
            .request_builder(method, &url)
            .header("Content-Type", "application/json")
            .body(json)
            .build()
            .map_err(anyhow::Error::from)?;
        self.dispatch(request).await
    }

    pub(super) async fn send_post_form(
        &self,
        path: &str,
        query: &[(String, QueryValue)],
        fields: &[(&str, String)],
    ) -> Result<Response, Error> {
        let url = self.url(path, query);
        let request = self
            .request_builder(Method::POST, &url)
            .form(fields)
            .build()
            .map_err(anyhow::Error::from)?;
        self.dispatch(request).await
    }

    pub(super) async fn send_post_octet_stream(
        &self,
        path: &str,
        query: &[(String, QueryValue)],
        payload: Vec<u8>,
    ) -> Result<Response, Error> {
        let url = self.url(path, query);
        let request = self
            .request_builder(Method::POST, &url)
            .header("Content-Type", "application/octet-stream")
            .body(payload)
            .build()
            .map_err(anyhow::Error::from)?;
        self.dispatch(request).await
    }

    /// Runs the middleware pipeline around the sender: `pre` hooks in order,
    /// the send, `post` hooks in order, then status checking. Every error
    /// path notifies `on_error` before propagating.
    async fn dispatch(&self, request: Request) -> Result<Response, Error> {
        let mut request = request;
        for middleware in &self.middleware {
            request = match middleware.pre(request).await {
                Ok(request) => request,
                Err(error) => {
                    self.notify_error(&error).await;
                    return Err(error);
                }
            };
        }

        log::debug!("sending {} {}", request.method(), request.url());
        let sent = self
            .sender
            .send(&self.client, request)
            .await
            .map_err(anyhow::Error::from);
        let mut response = match sent {
            Ok(response) => response,
            Err(error) => {
                let error = Error::Other(error);
                self.notify_error(&error).await;
                return Err(error);
            }
        };

        for middleware in &self.middleware {
            response = match middleware.post(response).await {
                Ok(response) => response,
                Err(error) => {
                    self.notify_error(&error).await;
                    return Err(error);
                }
            };
        }

        match error_if_unsuccessful(response).await {
            Ok(response) => Ok(response),
            Err(error) => {
                self.notify_error(&error).await;
                Err(error)
            }
        }
    }

    async fn notify_error(&self, error: &Error) {
        for middleware in &self.middleware {
            middleware.on_error(error).await;
        }
    }
}

pub(super) async fn error_if_unsuccessful(response: Response) -> Result<Response, Error> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::UnexpectedStatus { status, body });
    }
    Ok(response)
}
