use crate::ApiClient;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::query::QueryValue;
use crate::models::User;

/// Operations on the `/user` endpoint group.
#[async_trait::async_trait]
pub trait UserApi {
    async fn create_user(&self, user: &User) -> Result<(), Error>;
    async fn create_users_with_list(&self, users: &[User]) -> Result<(), Error>;
    async fn login(&self, username: &str, password: &str) -> Result<String, Error>;
    async fn logout(&self) -> Result<(), Error>;
    async fn get_user_by_name(&self, username: &str) -> Result<User, Error>;
    async fn update_user(&self, username: &str, user: &User) -> Result<(), Error>;
    async fn delete_user(&self, username: &str) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender> UserApi for ApiClient<S> {
    async fn create_user(&self, user: &User) -> Result<(), Error> {
        _ = self.send_post_json("/user", user).await?;

        Ok(())
    }

    async fn create_users_with_list(&self, users: &[User]) -> Result<(), Error> {
        _ = self.send_post_json("/user/createWithList", &users).await?;

        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, Error> {
        let query = [
            ("username".to_string(), QueryValue::from(username)),
            ("password".to_string(), QueryValue::from(password)),
        ];
        let response = self.send_get("/user/login", &query).await?;

        // The session token comes back as a JSON string body
        let session = response
            .json::<String>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(session)
    }

    async fn logout(&self) -> Result<(), Error> {
        _ = self.send_get("/user/logout", &[]).await?;

        Ok(())
    }

    async fn get_user_by_name(&self, username: &str) -> Result<User, Error> {
        let response = self.send_get(&format!("/user/{}", username), &[]).await?;

        let user = response
            .json::<User>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(user)
    }

    async fn update_user(&self, username: &str, user: &User) -> Result<(), Error> {
        _ = self.send_put_json(&format!("/user/{}", username), user).await?;

        Ok(())
    }

    async fn delete_user(&self, username: &str) -> Result<(), Error> {
        _ = self.send_delete(&format!("/user/{}", username), &[]).await?;

        Ok(())
    }
}
