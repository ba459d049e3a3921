//! REST API Module
//!
//! Contains HTTP handlers, DTOs, extractors and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::posts::{
    CreatePostUseCase, DeletePostUseCase, GetAllPostsUseCase, GetPostByIdUseCase, UpdatePostUseCase,
};
use crate::domain::gateways::PostRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_post_use_case: Arc<CreatePostUseCase>,
    pub get_post_by_id_use_case: Arc<GetPostByIdUseCase>,
    pub get_all_posts_use_case: Arc<GetAllPostsUseCase>,
    pub update_post_use_case: Arc<UpdatePostUseCase>,
    pub delete_post_use_case: Arc<DeletePostUseCase>,
}

impl AppState {
    /// Wire every use case to the same repository
    #[must_use]
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self {
            create_post_use_case: Arc::new(CreatePostUseCase::new(post_repository.clone())),
            get_post_by_id_use_case: Arc::new(GetPostByIdUseCase::new(post_repository.clone())),
            get_all_posts_use_case: Arc::new(GetAllPostsUseCase::new(post_repository.clone())),
            update_post_use_case: Arc::new(UpdatePostUseCase::new(post_repository.clone())),
            delete_post_use_case: Arc::new(DeletePostUseCase::new(post_repository)),
        }
    }
}

/// Build the application router.
///
/// Deployment-only layers (request timeout, rate limiting) are added by the binary.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/posts", handlers::posts::router())
        .route(
            "/health",
            get(handlers::health::health_check).fallback(handlers::fallback::method_not_allowed),
        )
        .fallback(handlers::fallback::route_not_found)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
