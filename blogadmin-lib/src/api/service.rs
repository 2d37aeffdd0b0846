//! Collection operations

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::AdminClient;
use crate::envelope::Envelope;
use crate::model::Record;
use crate::model::Resource;
use crate::model::dto::ArticleDto;
use crate::model::dto::CategoryDto;
use crate::model::dto::UserDto;

/// Operations a page controller needs from the backend.
///
/// Implementations never fail with an error: every outcome, transport
/// failures included, is reported through the envelope.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Fetches the whole collection.
    async fn list(&self, resource: Resource) -> Envelope<Vec<Record>>;

    /// Creates a record.
    async fn create(&self, resource: Resource, record: &Record) -> Envelope<JsonValue>;

    /// Updates a record.
    async fn update(&self, resource: Resource, record: &Record) -> Envelope<JsonValue>;

    /// Deletes the record with the given identifier.
    async fn delete(&self, resource: Resource, id: &str) -> Envelope<JsonValue>;
}

#[async_trait]
impl DataService for AdminClient {
    async fn list(&self, resource: Resource) -> Envelope<Vec<Record>> {
        self.get_data(&resource.list_endpoint()).await
    }

    async fn create(&self, resource: Resource, record: &Record) -> Envelope<JsonValue> {
        self.post_data(&resource.create_endpoint(), record).await
    }

    async fn update(&self, resource: Resource, record: &Record) -> Envelope<JsonValue> {
        self.put_data(&resource.update_endpoint(), record).await
    }

    async fn delete(&self, resource: Resource, id: &str) -> Envelope<JsonValue> {
        self.delete_data(&resource.delete_endpoint(id)).await
    }
}

impl AdminClient {
    /// Fetches all articles.
    pub async fn get_articles(&self) -> Envelope<Vec<ArticleDto>> {
        self.get_data(&Resource::Article.list_endpoint()).await
    }

    /// Fetches all categories.
    pub async fn get_categories(&self) -> Envelope<Vec<CategoryDto>> {
        self.get_data(&Resource::Category.list_endpoint()).await
    }

    /// Fetches all users.
    pub async fn get_users(&self) -> Envelope<Vec<UserDto>> {
        self.get_data(&Resource::User.list_endpoint()).await
    }

    pub async fn delete_article(&self, id: &str) -> Envelope<JsonValue> {
        DataService::delete(self, Resource::Article, id).await
    }

    pub async fn delete_category(&self, id: &str) -> Envelope<JsonValue> {
        DataService::delete(self, Resource::Category, id).await
    }

    pub async fn delete_user(&self, id: &str) -> Envelope<JsonValue> {
        DataService::delete(self, Resource::User, id).await
    }
}
