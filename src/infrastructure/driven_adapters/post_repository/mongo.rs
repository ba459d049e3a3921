//! MongoDB Post Repository Implementation
//!
//! Implements the PostRepository trait on top of a single MongoDB collection.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::domain::gateways::PostRepository;
use crate::domain::models::post::{CreatePostData, Post, PostId, UpdatePostData};
use crate::infrastructure::driven_adapters::config::DatabaseConfig;
use crate::shared::errors::RepositoryError;

/// Stored document representation of a post
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    content: String,
}

impl TryFrom<PostDocument> for Post {
    type Error = RepositoryError;

    fn try_from(document: PostDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| RepositoryError::Mapping("post document has no _id".to_string()))?;

        Ok(Post::restore(PostId::from_object_id(id), document.title, document.content))
    }
}

/// MongoDB implementation of PostRepository
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
    operation_timeout: Duration,
}

impl MongoPostRepository {
    /// Create a new MongoPostRepository on the configured database and collection
    #[must_use]
    pub fn new(client: &Client, config: &DatabaseConfig) -> Self {
        Self {
            collection: client.database(&config.name).collection(&config.collection),
            operation_timeout: config.operation_timeout(),
        }
    }

    /// Run a storage operation under the configured deadline
    async fn bounded<T, E, F>(&self, operation: F) -> Result<T, RepositoryError>
    where
        F: IntoFuture<Output = Result<T, E>>,
        RepositoryError: From<E>,
    {
        match tokio::time::timeout(self.operation_timeout, operation).await {
            Ok(result) => result.map_err(RepositoryError::from),
            Err(_) => Err(RepositoryError::Timeout(self.operation_timeout)),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, data: &CreatePostData) -> Result<Post, RepositoryError> {
        let document = PostDocument {
            id: None,
            title: data.title.clone(),
            content: data.content.clone(),
        };

        let result = self.bounded(self.collection.insert_one(&document)).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::Mapping(format!("unexpected inserted id: {}", result.inserted_id))
        })?;

        Ok(Post::restore(PostId::from_object_id(id), document.title, document.content))
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        let document = self
            .bounded(self.collection.find_one(doc! { "_id": *id.as_object_id() }))
            .await?;

        document.map(Post::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        self.bounded(async {
            let mut cursor = self.collection.find(doc! {}).await?;
            let mut posts = Vec::new();

            while cursor.advance().await? {
                let document = cursor.deserialize_current().map_err(|e| {
                    tracing::error!(error = %e, "Failed to decode post document");
                    RepositoryError::from(e)
                })?;
                posts.push(Post::try_from(document)?);
            }

            Ok::<_, RepositoryError>(posts)
        })
        .await
    }

    async fn update(&self, id: &PostId, data: &UpdatePostData) -> Result<bool, RepositoryError> {
        let result = self
            .bounded(self.collection.update_one(
                doc! { "_id": *id.as_object_id() },
                doc! { "$set": { "title": data.title.as_str(), "content": data.content.as_str() } },
            ))
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &PostId) -> Result<bool, RepositoryError> {
        let result = self
            .bounded(self.collection.delete_one(doc! { "_id": *id.as_object_id() }))
            .await?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_serialized_without_id() {
        let document = PostDocument {
            id: None,
            title: "A".to_string(),
            content: "B".to_string(),
        };

        let bson = bson::to_document(&document).unwrap();
        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("title").unwrap(), "A");
        assert_eq!(bson.get_str("content").unwrap(), "B");
    }

    #[test]
    fn test_stored_document_maps_to_post() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "title": "A", "content": "B" };

        let document: PostDocument = bson::from_document(stored).unwrap();
        let post = Post::try_from(document).unwrap();

        assert_eq!(post.id().as_object_id(), &oid);
        assert_eq!(post.title(), "A");
        assert_eq!(post.content(), "B");
    }

    #[test]
    fn test_document_without_id_is_a_mapping_error() {
        let document = PostDocument {
            id: None,
            title: "A".to_string(),
            content: "B".to_string(),
        };

        assert!(matches!(Post::try_from(document), Err(RepositoryError::Mapping(_))));
    }

    #[test]
    fn test_document_missing_field_fails_to_decode() {
        let stored = doc! { "_id": ObjectId::new(), "title": "A" };
        assert!(bson::from_document::<PostDocument>(stored).is_err());
    }

    #[tokio::test]
    async fn test_operation_past_deadline_is_a_timeout() {
        let config = DatabaseConfig {
            uri: "mongodb://localhost:1".to_string(),
            name: "blog_test".to_string(),
            collection: "posts".to_string(),
            max_pool_size: 1,
            min_pool_size: 0,
            connect_timeout_secs: 1,
            operation_timeout_secs: 1,
        };
        // Client construction does not connect
        let client = Client::with_uri_str(&config.uri).await.unwrap();
        let repository = MongoPostRepository::new(&client, &config);

        let result = repository
            .bounded(std::future::pending::<Result<(), mongodb::error::Error>>())
            .await;

        assert!(matches!(
            result,
            Err(RepositoryError::Timeout(limit)) if limit == Duration::from_secs(1)
        ));
    }
}
