//! Petstore REST API client runtime.

mod api_client;
mod configuration;
mod error;
mod http_sender;
mod middleware;
mod pet;
mod query;
mod store;
mod user;

#[cfg(test)]
mod mock_sender;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod pet_tests;
#[cfg(test)]
mod store_tests;

pub use api_client::ApiClient;
pub use configuration::{Configuration, DEFAULT_BASE_PATH};
pub use error::Error;
pub use http_sender::{DefaultSender, HttpSender};
pub use middleware::Middleware;
pub use pet::PetApi;
pub use query::{QueryValue, decode_query, encode_query, flatten_query};
pub use store::StoreApi;
pub use user::UserApi;
