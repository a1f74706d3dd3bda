//! Deterministic mock backend for exercising the client without a live
//! server.

mod catalog;
mod dispatcher;
mod faker;
mod sender;


pub use catalog::{DEFAULT_SEED, fake_order, fake_pet, fake_user, petstore_routes};
pub use dispatcher::{MockDispatcher, ResponseVariant};
pub use faker::Faker;
pub use sender::MockServerSender;
