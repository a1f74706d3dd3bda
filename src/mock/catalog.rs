//! Canned Petstore routes and the fake payloads behind them.
//!
//! Payloads are generated once at registration time from a single seeded
//! [`Faker`], so the whole route table is reproducible from its seed.

use http::StatusCode;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Value, json};

use crate::mock::dispatcher::{MockDispatcher, ResponseVariant};
use crate::mock::faker::Faker;
use crate::models::{Category, Order, OrderStatus, Pet, PetStatus, Tag, User};

pub const DEFAULT_SEED: u64 = 20250825;

pub fn fake_pet(faker: &mut Faker) -> Pet {
    let statuses = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];
    Pet {
        id: Some(faker.int_in(1, 100_000)),
        name: faker.word().to_string(),
        category: Some(Category {
            id: Some(faker.int_in(1, 100)),
            name: Some(faker.word().to_string()),
        }),
        photo_urls: faker.vec_of(1, 4, |f| format!("https://img.example/{}.png", f.word())),
        tags: Some(faker.vec_of(0, 3, |f| Tag {
            id: Some(f.int_in(1, 1_000)),
            name: Some(f.word().to_string()),
        })),
        status: Some(*faker.pick(&statuses)),
    }
}

pub fn fake_order(faker: &mut Faker) -> Order {
    let statuses = [
        OrderStatus::Placed,
        OrderStatus::Approved,
        OrderStatus::Delivered,
    ];
    Order {
        id: Some(faker.int_in(1, 100_000)),
        pet_id: Some(faker.int_in(1, 100_000)),
        quantity: Some(faker.int_in(1, 10) as i32),
        ship_date: Some(faker.recent_timestamp()),
        status: Some(*faker.pick(&statuses)),
        complete: Some(faker.bool()),
    }
}

pub fn fake_user(faker: &mut Faker) -> User {
    let first = faker.word();
    let last = faker.word();
    User {
        id: Some(faker.int_in(1, 100_000)),
        username: Some(format!("{}{}", first, faker.int_in(10, 100))),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(format!("{}.{}@example.com", first, last)),
        password: Some(faker.words(2).replace(' ', "-")),
        phone: Some(format!("555-{:04}", faker.int_in(0, 10_000))),
        user_status: Some(1),
    }
}

fn fake_inventory(faker: &mut Faker) -> Value {
    json!({
        "available": faker.int_in(0, 500),
        "pending": faker.int_in(0, 100),
        "sold": faker.int_in(0, 300),
    })
}

fn to_value<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

fn error_body(code: u16, message: &str) -> Value {
    json!({ "code": code, "type": "error", "message": message })
}

fn bad_request(message: &str) -> ResponseVariant {
    ResponseVariant::with_status(error_body(400, message), StatusCode::BAD_REQUEST)
}

fn not_found(message: &str) -> ResponseVariant {
    ResponseVariant::with_status(error_body(404, message), StatusCode::NOT_FOUND)
}

/// The full Petstore route table, with success and synthetic error variants
/// per operation.
pub fn petstore_routes(seed: u64) -> MockDispatcher {
    let mut faker = Faker::seeded(seed);
    let mut dispatcher = MockDispatcher::new();

    dispatcher.register(
        Method::POST,
        "/pet",
        vec![
            ResponseVariant::ok(to_value(&fake_pet(&mut faker))),
            bad_request("Invalid input"),
        ],
    );
    dispatcher.register(
        Method::PUT,
        "/pet",
        vec![
            ResponseVariant::ok(to_value(&fake_pet(&mut faker))),
            bad_request("Invalid ID supplied"),
            not_found("Pet not found"),
        ],
    );
    // Literal routes must be registered before the /pet/{petId} placeholder,
    // which would otherwise swallow them.
    dispatcher.register(
        Method::GET,
        "/pet/findByStatus",
        vec![
            ResponseVariant::ok(to_value(&faker.vec_of(1, 5, fake_pet))),
            bad_request("Invalid status value"),
        ],
    );
    dispatcher.register(
        Method::GET,
        "/pet/findByTags",
        vec![
            ResponseVariant::ok(to_value(&faker.vec_of(1, 5, fake_pet))),
            bad_request("Invalid tag value"),
        ],
    );
    dispatcher.register(
        Method::GET,
        "/pet/{petId}",
        vec![
            ResponseVariant::ok(to_value(&fake_pet(&mut faker))),
            bad_request("Invalid ID supplied"),
            not_found("Pet not found"),
        ],
    );
    dispatcher.register(
        Method::POST,
        "/pet/{petId}",
        vec![
            ResponseVariant::ok(to_value(&fake_pet(&mut faker))),
            bad_request("Invalid input"),
        ],
    );
    dispatcher.register(
        Method::DELETE,
        "/pet/{petId}",
        vec![
            ResponseVariant::ok(json!({})),
            bad_request("Invalid pet value"),
        ],
    );
    dispatcher.register(
        Method::POST,
        "/pet/{petId}/uploadImage",
        vec![ResponseVariant::ok(json!({
            "code": 200,
            "type": "ok",
            "message": "image uploaded",
        }))],
    );

    dispatcher.register(
        Method::GET,
        "/store/inventory",
        vec![ResponseVariant::ok(fake_inventory(&mut faker))],
    );
    dispatcher.register(
        Method::POST,
        "/store/order",
        vec![
            ResponseVariant::ok(to_value(&fake_order(&mut faker))),
            bad_request("Invalid input"),
        ],
    );
    dispatcher.register(
        Method::GET,
        "/store/order/{orderId}",
        vec![
            ResponseVariant::ok(to_value(&fake_order(&mut faker))),
            bad_request("Invalid ID supplied"),
            not_found("Order not found"),
        ],
    );
    dispatcher.register(
        Method::DELETE,
        "/store/order/{orderId}",
        vec![
            ResponseVariant::ok(json!({})),
            not_found("Order not found"),
        ],
    );

    dispatcher.register(
        Method::POST,
        "/user",
        vec![ResponseVariant::ok(to_value(&fake_user(&mut faker)))],
    );
    dispatcher.register(
        Method::POST,
        "/user/createWithList",
        vec![ResponseVariant::ok(to_value(&faker.vec_of(1, 4, fake_user)))],
    );
    dispatcher.register(
        Method::GET,
        "/user/login",
        vec![
            ResponseVariant::ok(Value::String(format!(
                "logged in user session:{}",
                faker.int_in(1_000_000, 10_000_000)
            ))),
            bad_request("Invalid username/password supplied"),
        ],
    );
    dispatcher.register(Method::GET, "/user/logout", vec![ResponseVariant::ok(json!({}))]);
    dispatcher.register(
        Method::GET,
        "/user/{username}",
        vec![
            ResponseVariant::ok(to_value(&fake_user(&mut faker))),
            bad_request("Invalid username supplied"),
            not_found("User not found"),
        ],
    );
    dispatcher.register(
        Method::PUT,
        "/user/{username}",
        vec![
            ResponseVariant::ok(json!({})),
            not_found("User not found"),
        ],
    );
    dispatcher.register(
        Method::DELETE,
        "/user/{username}",
        vec![
            ResponseVariant::ok(json!({})),
            not_found("User not found"),
        ],
    );

    dispatcher
}
