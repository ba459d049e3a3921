//! Post Repository Gateway
//!
//! Abstract trait defining the contract for post persistence operations.

use async_trait::async_trait;

use crate::domain::models::post::{CreatePostData, Post, PostId, UpdatePostData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Post persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post; the storage layer assigns its id
    async fn create(&self, data: &CreatePostData) -> Result<Post, RepositoryError>;

    /// Find a post by its ID
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepositoryError>;

    /// Find all posts in storage-native order
    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError>;

    /// Overwrite title and content of an existing post.
    /// Returns `false` when no post matched the id.
    async fn update(&self, id: &PostId, data: &UpdatePostData) -> Result<bool, RepositoryError>;

    /// Delete a post. Returns `false` when no post matched the id.
    async fn delete(&self, id: &PostId) -> Result<bool, RepositoryError>;
}
