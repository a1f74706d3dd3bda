use std::sync::Arc;

use super::*;
use crate::mock::{MockServerSender, petstore_routes};
use crate::models::{Order, OrderStatus};

const BASE: &str = "https://petstore.example/api/v3";

fn mock_client(seed: u64) -> ApiClient<MockServerSender> {
    let dispatcher = Arc::new(petstore_routes(seed));
    ApiClient::with_sender(Configuration::new(BASE), MockServerSender::new(dispatcher))
}

#[tokio::test]
async fn get_inventory_returns_status_counts() {
    // Arrange
    let client = mock_client(7);

    // Act
    let inventory = client.get_inventory().await.unwrap();

    // Assert
    assert!(inventory.contains_key("available"));
    assert!(inventory.contains_key("pending"));
    assert!(inventory.contains_key("sold"));
}

#[tokio::test]
async fn place_order_returns_order_with_ship_date() {
    // Arrange
    let client = mock_client(7);
    let order = Order {
        id: None,
        pet_id: Some(42),
        quantity: Some(1),
        ship_date: None,
        status: Some(OrderStatus::Placed),
        complete: Some(false),
    };

    // Act
    let placed = client.place_order(&order).await.unwrap();

    // Assert
    assert!(placed.id.is_some());
    assert!(placed.ship_date.is_some());
    assert!(placed.status.is_some());
}

#[tokio::test]
async fn get_order_by_id_cycles_through_configured_variants() {
    // Arrange
    let client = mock_client(7);

    // Act
    let first = client.get_order_by_id(3).await;
    let second = client.get_order_by_id(3).await;
    let third = client.get_order_by_id(3).await;

    // Assert
    assert!(first.is_ok());
    match second {
        Err(Error::UnexpectedStatus { status, .. }) => assert_eq!(status, 400),
        _ => panic!("Expected 400 on the second call"),
    }
    match third {
        Err(Error::UnexpectedStatus { status, .. }) => assert_eq!(status, 404),
        _ => panic!("Expected 404 on the third call"),
    }
}

#[tokio::test]
async fn delete_order_alternates_between_ok_and_not_found() {
    // Arrange
    let client = mock_client(7);

    // Act
    let first = client.delete_order(3).await;
    let second = client.delete_order(3).await;

    // Assert
    assert!(first.is_ok());
    match second {
        Err(Error::UnexpectedStatus { status, .. }) => assert_eq!(status, 404),
        _ => panic!("Expected 404 on the second call"),
    }
}
