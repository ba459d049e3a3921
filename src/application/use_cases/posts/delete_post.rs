//! Delete Post Use Case
//!
//! Removes a post permanently.

use std::sync::Arc;

use crate::domain::gateways::PostRepository;
use crate::domain::models::post::PostId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a post
pub struct DeletePostUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl DeletePostUseCase {
    /// Create a new DeletePostUseCase
    #[must_use]
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the post doesn't exist.
    /// Returns `UseCaseError::Persistence` if there's a database error.
    pub async fn execute(&self, id: &PostId) -> Result<(), UseCaseError> {
        tracing::info!(post_id = %id, "Deleting post");

        let deleted = self
            .post_repository
            .delete(id)
            .await
            .map_err(UseCaseError::persistence("delete blog post"))?;

        if !deleted {
            tracing::warn!(post_id = %id, "Post not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Blog post".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(post_id = %id, "Post deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::post_repository::MockPostRepository;
    use bson::oid::ObjectId;

    #[tokio::test]
    async fn should_delete_post_when_found() {
        let mut repo = MockPostRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let use_case = DeletePostUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(&PostId::from_object_id(ObjectId::new()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_post_does_not_exist() {
        let mut repo = MockPostRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeletePostUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(&PostId::from_object_id(ObjectId::new()))
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
