//! Get All Posts Use Case
//!
//! Retrieves every stored post in storage-native order.

use std::sync::Arc;

use crate::domain::gateways::PostRepository;
use crate::domain::models::post::Post;
use crate::shared::errors::UseCaseError;

/// Use case for listing all posts
pub struct GetAllPostsUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl GetAllPostsUseCase {
    /// Create a new GetAllPostsUseCase
    #[must_use]
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Persistence` if the query or any document decode fails.
    pub async fn execute(&self) -> Result<Vec<Post>, UseCaseError> {
        tracing::debug!("Getting all posts");

        let posts = self
            .post_repository
            .find_all()
            .await
            .map_err(UseCaseError::persistence("retrieve blog posts"))?;

        tracing::debug!(count = posts.len(), "Found posts");
        Ok(posts)
    }
}
