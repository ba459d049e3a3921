//! Create Post Use Case
//!
//! Persists a new blog post.

use std::sync::Arc;

use crate::domain::gateways::PostRepository;
use crate::domain::models::post::{CreatePostData, Post};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new post
pub struct CreatePostUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl CreatePostUseCase {
    /// Create a new CreatePostUseCase
    #[must_use]
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Persistence` if the post could not be stored.
    pub async fn execute(&self, data: CreatePostData) -> Result<Post, UseCaseError> {
        tracing::info!(title = %data.title, "Creating new post");

        let created = self
            .post_repository
            .create(&data)
            .await
            .map_err(UseCaseError::persistence("insert blog post"))?;

        tracing::info!(post_id = %created.id(), "Post created successfully");
        Ok(created)
    }
}
