//! # Petstore SDK
//!
//! REST client for the OpenAPI Petstore example, plus a companion mock
//! backend: per-route canned responses cycled round-robin by a shared
//! counter, with payloads synthesized by a seeded generator so runs are
//! reproducible.

mod api;
pub mod mock;
pub mod models;

pub use api::{
    ApiClient, Configuration, DefaultSender, Error, HttpSender, Middleware, PetApi, QueryValue,
    StoreApi, UserApi,
};
