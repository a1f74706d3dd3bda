use crate::ApiClient;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::query::QueryValue;
use crate::models::{ApiResponse, Pet, PetStatus};

/// Operations on the `/pet` endpoint group.
#[async_trait::async_trait]
pub trait PetApi {
    async fn add_pet(&self, pet: &Pet) -> Result<Pet, Error>;
    async fn update_pet(&self, pet: &Pet) -> Result<Pet, Error>;
    async fn find_pets_by_status(&self, status: PetStatus) -> Result<Vec<Pet>, Error>;
    async fn find_pets_by_tags(&self, tags: &[String]) -> Result<Vec<Pet>, Error>;
    async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, Error>;
    async fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<PetStatus>,
    ) -> Result<(), Error>;
    async fn delete_pet(&self, pet_id: i64) -> Result<(), Error>;
    async fn upload_file(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Vec<u8>,
    ) -> Result<ApiResponse, Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender> PetApi for ApiClient<S> {
    async fn add_pet(&self, pet: &Pet) -> Result<Pet, Error> {
        let response = self.send_post_json("/pet", pet).await?;

        let created = response
            .json::<Pet>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(created)
    }

    async fn update_pet(&self, pet: &Pet) -> Result<Pet, Error> {
        let response = self.send_put_json("/pet", pet).await?;

        let updated = response
            .json::<Pet>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(updated)
    }

    async fn find_pets_by_status(&self, status: PetStatus) -> Result<Vec<Pet>, Error> {
        let query = [("status".to_string(), QueryValue::from(status.as_str()))];
        let response = self.send_get("/pet/findByStatus", &query).await?;

        let pets = response
            .json::<Vec<Pet>>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(pets)
    }

    async fn find_pets_by_tags(&self, tags: &[String]) -> Result<Vec<Pet>, Error> {
        let tags = tags.iter().cloned().map(QueryValue::from).collect();
        let query = [("tags".to_string(), QueryValue::List(tags))];
        let response = self.send_get("/pet/findByTags", &query).await?;

        let pets = response
            .json::<Vec<Pet>>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(pets)
    }

    async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, Error> {
        let response = self.send_get(&format!("/pet/{}", pet_id), &[]).await?;

        let pet = response
            .json::<Pet>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(pet)
    }

    async fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<PetStatus>,
    ) -> Result<(), Error> {
        let mut fields = Vec::new();
        if let Some(name) = name {
            fields.push(("name", name.to_string()));
        }
        if let Some(status) = status {
            fields.push(("status", status.as_str().to_string()));
        }
        _ = self
            .send_post_form(&format!("/pet/{}", pet_id), &[], &fields)
            .await?;

        Ok(())
    }

    async fn delete_pet(&self, pet_id: i64) -> Result<(), Error> {
        _ = self.send_delete(&format!("/pet/{}", pet_id), &[]).await?;

        Ok(())
    }

    async fn upload_file(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Vec<u8>,
    ) -> Result<ApiResponse, Error> {
        let mut query = Vec::new();
        if let Some(metadata) = additional_metadata {
            query.push(("additionalMetadata".to_string(), QueryValue::from(metadata)));
        }
        let response = self
            .send_post_octet_stream(&format!("/pet/{}/uploadImage", pet_id), &query, file)
            .await?;

        let result = response
            .json::<ApiResponse>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(result)
    }
}
