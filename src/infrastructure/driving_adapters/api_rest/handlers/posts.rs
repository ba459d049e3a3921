//! Post Handlers
//!
//! HTTP handlers for post CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::models::post::{CreatePostData, PostId, UpdatePostData};
use crate::infrastructure::driving_adapters::api_rest::dto::post::{
    CreatePostDto, MessageResponseDto, PostResponseDto, UpdatePostDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract;
use crate::infrastructure::driving_adapters::api_rest::handlers::fallback::method_not_allowed;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for post endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_all_posts)
                .post(create_post)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_post_by_id)
                .put(update_post)
                .delete(delete_post)
                .fallback(method_not_allowed),
        )
}

/// POST /posts - Create a new post
///
/// # Responses
///
/// * 201 Created - Post created, body includes the assigned id
/// * 400 Bad Request - Malformed body or missing field
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn create_post(
    State(state): State<AppState>,
    extract::Json(dto): extract::Json<CreatePostDto>,
) -> Result<(StatusCode, Json<PostResponseDto>), ApiError> {
    let data = CreatePostData::try_from(dto)?;

    let post = state.create_post_use_case.execute(data).await?;

    Ok((StatusCode::CREATED, Json(PostResponseDto::from(post))))
}

/// GET /posts - Get all posts
///
/// # Responses
///
/// * 200 OK - Array of posts (empty when none exist)
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn get_all_posts(State(state): State<AppState>) -> Result<Json<Vec<PostResponseDto>>, ApiError> {
    let posts = state.get_all_posts_use_case.execute().await?;

    let response: Vec<PostResponseDto> = posts.into_iter().map(PostResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /posts/:id - Get a post by ID
///
/// # Responses
///
/// * 200 OK - Post found
/// * 400 Bad Request - Id is not a 24-hex identifier
/// * 404 Not Found - Post does not exist
#[axum::debug_handler]
async fn get_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponseDto>, ApiError> {
    let post_id: PostId = id.parse()?;

    let post = state.get_post_by_id_use_case.execute(&post_id).await?;

    Ok(Json(PostResponseDto::from(post)))
}

/// PUT /posts/:id - Overwrite title and content of a post
///
/// # Responses
///
/// * 200 OK - Post updated
/// * 400 Bad Request - Invalid id or body
/// * 404 Not Found - Post does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    extract::Json(dto): extract::Json<UpdatePostDto>,
) -> Result<Json<MessageResponseDto>, ApiError> {
    let post_id: PostId = id.parse()?;
    let data = UpdatePostData::try_from(dto)?;

    state.update_post_use_case.execute(&post_id, data).await?;

    Ok(Json(MessageResponseDto::new(format!(
        "Blog post with ID {post_id} updated"
    ))))
}

/// DELETE /posts/:id - Delete a post
///
/// # Responses
///
/// * 200 OK - Post deleted
/// * 400 Bad Request - Invalid id
/// * 404 Not Found - Post does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponseDto>, ApiError> {
    let post_id: PostId = id.parse()?;

    state.delete_post_use_case.execute(&post_id).await?;

    Ok(Json(MessageResponseDto::new(format!(
        "Blog post with ID {post_id} deleted"
    ))))
}
