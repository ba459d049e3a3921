//! Get Post By ID Use Case
//!
//! Retrieves a single post by its ID.

use std::sync::Arc;

use crate::domain::gateways::PostRepository;
use crate::domain::models::post::{Post, PostId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a post by ID
pub struct GetPostByIdUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl GetPostByIdUseCase {
    /// Create a new GetPostByIdUseCase
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
    pub async fn execute(&self, id: &PostId) -> Result<Post, UseCaseError> {
        tracing::debug!(post_id = %id, "Getting post by ID");

        let post = self
            .post_repository
            .find_by_id(id)
            .await
            .map_err(UseCaseError::persistence("retrieve blog post"))?
            .ok_or_else(|| {
                tracing::warn!(post_id = %id, "Post not found");
                UseCaseError::NotFound {
                    resource: "Blog post".to_string(),
                    id: id.to_string(),
                }
            })?;

        tracing::debug!(post_id = %id, "Post found");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::post_repository::MockPostRepository;
    use crate::domain::models::post::CreatePostData;
    use bson::oid::ObjectId;

    fn create_test_post() -> Post {
        Post::persisted(
            PostId::from_object_id(ObjectId::new()),
            CreatePostData {
                title: "Hello".to_string(),
                content: "World".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn should_return_post_when_found() {
        let post = create_test_post();
        let expected = post.clone();
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_id()
            .withf({
                let id = *post.id();
                move |requested| *requested == id
            })
            .returning(move |_| Ok(Some(post.clone())));

        let use_case = GetPostByIdUseCase::new(Arc::new(repo));
        let result = use_case.execute(expected.id()).await.unwrap();

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn should_return_not_found_when_post_does_not_exist() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetPostByIdUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(&PostId::from_object_id(ObjectId::new()))
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
