//! Update Post Use Case (PUT)
//!
//! Overwrites title and content of an existing post.

use std::sync::Arc;

use crate::domain::gateways::PostRepository;
use crate::domain::models::post::{PostId, UpdatePostData};
use crate::shared::errors::UseCaseError;

/// Use case for replacing a post's title and content
pub struct UpdatePostUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl UpdatePostUseCase {
    /// Create a new UpdatePostUseCase
    #[must_use]
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// Execute the use case
    ///
    /// Both fields are always overwritten, so repeating the same update
    /// leaves the stored post unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the post doesn't exist.
    /// Returns `UseCaseError::Persistence` if there's a database error.
    pub async fn execute(&self, id: &PostId, data: UpdatePostData) -> Result<(), UseCaseError> {
        tracing::info!(post_id = %id, "Updating post");

        let matched = self
            .post_repository
            .update(id, &data)
            .await
            .map_err(UseCaseError::persistence("update blog post"))?;

        if !matched {
            tracing::warn!(post_id = %id, "Post not found for update");
            return Err(UseCaseError::NotFound {
                resource: "Blog post".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(post_id = %id, "Post updated successfully");
        Ok(())
    }
}
