//! Post DTOs
//!
//! Data transfer objects for post API endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::models::post::{CreatePostData, Post, UpdatePostData};

/// DTO for creating a new post
///
/// Fields are optional at the serde level so that a missing or `null` field
/// is reported as a validation error naming the field. Empty strings are accepted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePostDto {
    #[validate(required(message = "title is required"))]
    pub title: Option<String>,

    #[validate(required(message = "content is required"))]
    pub content: Option<String>,
}

impl TryFrom<CreatePostDto> for CreatePostData {
    type Error = ValidationErrors;

    fn try_from(dto: CreatePostDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        let (title, content) = required_pair(dto.title, dto.content)?;
        Ok(Self { title, content })
    }
}

/// DTO for full post update (PUT); both fields are overwritten
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostDto {
    #[validate(required(message = "title is required"))]
    pub title: Option<String>,

    #[validate(required(message = "content is required"))]
    pub content: Option<String>,
}

impl TryFrom<UpdatePostDto> for UpdatePostData {
    type Error = ValidationErrors;

    fn try_from(dto: UpdatePostDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        let (title, content) = required_pair(dto.title, dto.content)?;
        Ok(Self { title, content })
    }
}

fn required_pair(
    title: Option<String>,
    content: Option<String>,
) -> Result<(String, String), ValidationErrors> {
    match (title, content) {
        (Some(title), Some(content)) => Ok((title, content)),
        _ => Err(ValidationErrors::new()),
    }
}

/// Post response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponseDto {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl From<Post> for PostResponseDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id().to_hex(),
            title: post.title().to_string(),
            content: post.content().to_string(),
        }
    }
}

/// Confirmation returned by update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseDto {
    pub message: String,
}

impl MessageResponseDto {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
