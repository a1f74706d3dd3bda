use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Seam between the client and the network. The mock engine plugs in here.
#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(&self, client: &Client, request: Request) -> Result<Response, reqwest::Error>;
}

pub struct DefaultSender;

#[async_trait]
impl HttpSender for DefaultSender {
    async fn send(&self, client: &Client, request: Request) -> Result<Response, reqwest::Error> {
        client.execute(request).await
    }
}
