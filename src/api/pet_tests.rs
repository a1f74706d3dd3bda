use std::sync::Arc;

use super::*;
use crate::mock::{MockDispatcher, MockServerSender, petstore_routes};
use crate::models::PetStatus;

const BASE: &str = "https://petstore.example/api/v3";

fn mock_client(seed: u64) -> ApiClient<MockServerSender> {
    let dispatcher = Arc::new(petstore_routes(seed));
    ApiClient::with_sender(Configuration::new(BASE), MockServerSender::new(dispatcher))
}

#[tokio::test]
async fn get_pet_by_id_cycles_through_configured_variants() {
    // Arrange
    let client = mock_client(7);

    // Act - the route has [200, 400, 404]; the fourth call wraps around
    let first = client.get_pet_by_id(42).await;
    let second = client.get_pet_by_id(42).await;
    let third = client.get_pet_by_id(42).await;
    let fourth = client.get_pet_by_id(42).await;

    // Assert
    let first = first.expect("first call should hit the success variant");
    match second {
        Err(Error::UnexpectedStatus { status, .. }) => assert_eq!(status, 400),
        _ => panic!("Expected 400 on the second call"),
    }
    match third {
        Err(Error::UnexpectedStatus { status, .. }) => assert_eq!(status, 404),
        _ => panic!("Expected 404 on the third call"),
    }
    let fourth = fourth.expect("fourth call should wrap back to the success variant");
    assert_eq!(first, fourth);
}

#[tokio::test]
async fn find_pets_by_status_returns_generated_pets() {
    // Arrange
    let client = mock_client(7);

    // Act
    let pets = client.find_pets_by_status(PetStatus::Available).await.unwrap();

    // Assert
    assert!(!pets.is_empty());
    assert!(pets.iter().all(|pet| !pet.name.is_empty()));
}

#[tokio::test]
async fn find_pets_by_tags_sends_repeated_tag_parameters() {
    // Arrange
    let client = mock_client(7);
    let tags = vec!["friendly".to_string(), "small".to_string()];

    // Act
    let pets = client.find_pets_by_tags(&tags).await.unwrap();

    // Assert
    assert!(!pets.is_empty());
    let served = client.sender.served();
    assert_eq!(served[0].1, "/api/v3/pet/findByTags");
}

#[tokio::test]
async fn add_pet_returns_created_pet() {
    // Arrange
    let client = mock_client(7);
    let pet = crate::mock::fake_pet(&mut crate::mock::Faker::seeded(1));

    // Act
    let created = client.add_pet(&pet).await.unwrap();

    // Assert
    assert!(created.id.is_some());
    assert!(!created.name.is_empty());
}

#[tokio::test]
async fn update_pet_with_form_posts_form_fields() {
    // Arrange
    let client = mock_client(7);

    // Act
    let result = client
        .update_pet_with_form(42, Some("rex"), Some(PetStatus::Sold))
        .await;

    // Assert
    assert!(result.is_ok());
    let served = client.sender.served();
    assert_eq!(served[0].0, reqwest::Method::POST);
    assert_eq!(served[0].1, "/api/v3/pet/42");
}

#[tokio::test]
async fn upload_file_returns_api_response() {
    // Arrange
    let client = mock_client(7);

    // Act
    let response = client
        .upload_file(42, Some("profile photo"), vec![0xde, 0xad])
        .await
        .unwrap();

    // Assert
    assert_eq!(response.code, Some(200));
    assert_eq!(response.message.as_deref(), Some("image uploaded"));
}

#[tokio::test]
async fn delete_pet_succeeds_on_first_variant() {
    // Arrange
    let client = mock_client(7);

    // Act / Assert
    assert!(client.delete_pet(42).await.is_ok());
}

#[tokio::test]
async fn unregistered_route_surfaces_as_not_implemented() {
    // Arrange - empty dispatcher, so nothing matches
    let dispatcher = Arc::new(MockDispatcher::new());
    let client =
        ApiClient::with_sender(Configuration::new(BASE), MockServerSender::new(dispatcher));

    // Act
    let result = client.get_pet_by_id(42).await;

    // Assert
    match result {
        Err(Error::UnexpectedStatus { status, body }) => {
            assert_eq!(status, 501);
            assert!(body.contains("no mock registered"));
        }
        _ => panic!("Expected Error::UnexpectedStatus with status 501"),
    }
}
