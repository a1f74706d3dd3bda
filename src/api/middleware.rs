use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::api::error::Error;

/// Hooks run around every request the client sends, in registration order.
///
/// All hooks are passthrough by default; implement only what you need.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Runs on the built request before it is handed to the sender.
    async fn pre(&self, request: Request) -> Result<Request, Error> {
        Ok(request)
    }

    /// Runs on the response before status checking.
    async fn post(&self, response: Response) -> Result<Response, Error> {
        Ok(response)
    }

    /// Observes errors from the send or from earlier hooks.
    async fn on_error(&self, _error: &Error) {}
}
